//! Utility apps and the manager that opens and closes them.
//!
//! Each app is created the first time it is opened and then kept for the
//! lifetime of the manager, so its state survives close/reopen.

mod duplicates;
mod formatter;

pub use duplicates::{
    AnalyzeError, AnalyzerField, DuplicatesAnalyzer, Group, PreviewRow, count_duplicates,
    frequency_text, list_groups, table_text,
};
pub use formatter::{
    CsvOptions, Enclosure, FormatError, FormatterField, ListFormatter, csv_to_list, list_to_csv,
};

use tracing::debug;

use crate::comparison::ListComparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    ListFormatter,
    ListComparison,
    DuplicatesAnalyzer,
}

impl AppId {
    pub fn all() -> &'static [AppId] {
        &[
            AppId::ListFormatter,
            AppId::ListComparison,
            AppId::DuplicatesAnalyzer,
        ]
    }

    pub fn definition(self) -> &'static AppDefinition {
        match self {
            AppId::ListFormatter => &APPS[0],
            AppId::ListComparison => &APPS[1],
            AppId::DuplicatesAnalyzer => &APPS[2],
        }
    }

    /// Looks an app up by its kebab-case id.
    pub fn from_slug(slug: &str) -> Option<AppId> {
        AppId::all().iter().copied().find(|id| id.definition().id == slug)
    }
}

/// Static description shown in the apps grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

static APPS: [AppDefinition; 3] = [
    AppDefinition {
        id: "list-formatter",
        name: "List Formatter",
        icon: "📋",
        description: "Convert between lists and CSV formats",
    },
    AppDefinition {
        id: "list-comparison",
        name: "List Comparison",
        icon: "🔍",
        description: "Compare two lists and find common or unique items",
    },
    AppDefinition {
        id: "duplicates-analyzer",
        name: "Duplicates Analyzer",
        icon: "🔄",
        description: "Analyze and remove duplicates from lists",
    },
];

/// Registry of app instances plus the currently active app.
#[derive(Debug, Default)]
pub struct AppsManager {
    formatter: Option<ListFormatter>,
    comparison: Option<ListComparison>,
    analyzer: Option<DuplicatesAnalyzer>,
    active: Option<AppId>,
}

impl AppsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apps(&self) -> &'static [AppDefinition] {
        &APPS
    }

    pub fn active(&self) -> Option<AppId> {
        self.active
    }

    pub fn is_initialized(&self, id: AppId) -> bool {
        match id {
            AppId::ListFormatter => self.formatter.is_some(),
            AppId::ListComparison => self.comparison.is_some(),
            AppId::DuplicatesAnalyzer => self.analyzer.is_some(),
        }
    }

    /// Makes `id` the active app, initialising it on first open.
    pub fn open(&mut self, id: AppId) {
        if !self.is_initialized(id) {
            debug!(app = id.definition().id, "initializing app");
            match id {
                AppId::ListFormatter => self.formatter = Some(ListFormatter::new()),
                AppId::ListComparison => self.comparison = Some(ListComparison::new()),
                AppId::DuplicatesAnalyzer => self.analyzer = Some(DuplicatesAnalyzer::new()),
            }
        }
        self.active = Some(id);
    }

    /// Hides `id`. Clears the active app only if it was `id`.
    pub fn close(&mut self, id: AppId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn formatter_mut(&mut self) -> Option<&mut ListFormatter> {
        self.formatter.as_mut()
    }

    pub fn comparison(&self) -> Option<&ListComparison> {
        self.comparison.as_ref()
    }

    pub fn comparison_mut(&mut self) -> Option<&mut ListComparison> {
        self.comparison.as_mut()
    }

    pub fn formatter(&self) -> Option<&ListFormatter> {
        self.formatter.as_ref()
    }

    pub fn analyzer(&self) -> Option<&DuplicatesAnalyzer> {
        self.analyzer.as_ref()
    }

    pub fn analyzer_mut(&mut self) -> Option<&mut DuplicatesAnalyzer> {
        self.analyzer.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::TableId;

    #[test]
    fn test_open_initializes_once_and_keeps_state() {
        let mut apps = AppsManager::new();
        assert!(!apps.is_initialized(AppId::ListComparison));

        apps.open(AppId::ListComparison);
        assert_eq!(apps.active(), Some(AppId::ListComparison));
        apps.comparison_mut()
            .unwrap()
            .input_mut(TableId::A)
            .set_text("kept");

        apps.close(AppId::ListComparison);
        assert_eq!(apps.active(), None);

        apps.open(AppId::ListComparison);
        assert_eq!(
            apps.comparison().unwrap().input(TableId::A).text(),
            "kept"
        );
    }

    #[test]
    fn test_close_other_app_keeps_active() {
        let mut apps = AppsManager::new();
        apps.open(AppId::ListFormatter);
        apps.close(AppId::DuplicatesAnalyzer);
        assert_eq!(apps.active(), Some(AppId::ListFormatter));
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(
            AppId::from_slug("duplicates-analyzer"),
            Some(AppId::DuplicatesAnalyzer)
        );
        assert_eq!(AppId::from_slug("weather"), None);
        assert_eq!(AppId::ListComparison.definition().name, "List Comparison");
        assert_eq!(AppsManager::new().apps().len(), 3);
    }
}
