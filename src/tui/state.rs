//! Application state management.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tracing::warn;

use crate::apps::{AppId, AppsManager};
use crate::clipboard::Clipboard;
use crate::comparison::{CellRef, ComparisonView, Notice, NoticeLevel, TableId, TableRow};
use crate::config::Config;
use crate::dispatch::{InputDispatcher, Layer};
use crate::status::StatusLine;
use crate::widgets::{BookmarkForm, BookmarkStore, Calculator, ClockPrefs, Notes};

const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Dashboard panes that take focus when no layer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Apps,
    Notes,
    Bookmarks,
}

impl Pane {
    pub fn next(self) -> Pane {
        match self {
            Pane::Apps => Pane::Notes,
            Pane::Notes => Pane::Bookmarks,
            Pane::Bookmarks => Pane::Apps,
        }
    }

    pub fn prev(self) -> Pane {
        match self {
            Pane::Apps => Pane::Bookmarks,
            Pane::Notes => Pane::Apps,
            Pane::Bookmarks => Pane::Notes,
        }
    }
}

/// Focus inside the List Comparison popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonFocus {
    Input(TableId),
    Table(TableId),
}

impl Default for ComparisonFocus {
    fn default() -> Self {
        ComparisonFocus::Input(TableId::A)
    }
}

impl ComparisonFocus {
    pub fn next(self) -> Self {
        match self {
            ComparisonFocus::Input(TableId::A) => ComparisonFocus::Input(TableId::B),
            ComparisonFocus::Input(TableId::B) => ComparisonFocus::Table(TableId::A),
            ComparisonFocus::Table(TableId::A) => ComparisonFocus::Table(TableId::B),
            ComparisonFocus::Table(TableId::B) => ComparisonFocus::Input(TableId::A),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ComparisonFocus::Input(TableId::A) => ComparisonFocus::Table(TableId::B),
            ComparisonFocus::Input(TableId::B) => ComparisonFocus::Input(TableId::A),
            ComparisonFocus::Table(TableId::A) => ComparisonFocus::Input(TableId::B),
            ComparisonFocus::Table(TableId::B) => ComparisonFocus::Table(TableId::A),
        }
    }
}

/// Which cell of a result row a click lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    Index,
    #[default]
    Value,
}

/// Terminal rendition of the comparison results.
///
/// Receives everything the comparison component publishes and keeps it for
/// drawing: rendered rows, the single highlight, control states and notices.
#[derive(Debug, Default)]
pub struct ComparisonPane {
    pub rows_a: Vec<TableRow>,
    pub rows_b: Vec<TableRow>,
    pub table_a: TableState,
    pub table_b: TableState,
    pub highlighted: Option<CellRef>,
    pub can_up: bool,
    pub can_down: bool,
    pub focus: ComparisonFocus,
    pub column: Column,
    pub status: StatusLine,
    /// Blocking notice waiting to be shown as an alert.
    pub pending_alert: Option<String>,
}

impl ComparisonPane {
    pub fn rows(&self, table: TableId) -> &[TableRow] {
        match table {
            TableId::A => &self.rows_a,
            TableId::B => &self.rows_b,
        }
    }

    pub fn table_state_mut(&mut self, table: TableId) -> &mut TableState {
        match table {
            TableId::A => &mut self.table_a,
            TableId::B => &mut self.table_b,
        }
    }

    /// Row under the cursor of `table`.
    pub fn cursor_row(&self, table: TableId) -> Option<usize> {
        match table {
            TableId::A => self.table_a.selected(),
            TableId::B => self.table_b.selected(),
        }
    }

    pub fn cursor_up(&mut self, table: TableId) {
        let state = self.table_state_mut(table);
        if let Some(row) = state.selected() {
            state.select(Some(row.saturating_sub(1)));
        }
    }

    pub fn cursor_down(&mut self, table: TableId) {
        let len = self.rows(table).len();
        let state = self.table_state_mut(table);
        if let Some(row) = state.selected()
            && row + 1 < len
        {
            state.select(Some(row + 1));
        }
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }
}

impl ComparisonView for ComparisonPane {
    fn render_table(&mut self, table: TableId, rows: &[TableRow]) {
        let selected = (!rows.is_empty()).then_some(0);
        match table {
            TableId::A => self.rows_a = rows.to_vec(),
            TableId::B => self.rows_b = rows.to_vec(),
        }
        let state = self.table_state_mut(table);
        *state = TableState::default();
        state.select(selected);
    }

    fn highlight(&mut self, cell: Option<CellRef>) {
        self.highlighted = cell;
    }

    fn scroll_to(&mut self, cell: CellRef) {
        self.table_state_mut(cell.table).select(Some(cell.row));
    }

    fn set_controls(&mut self, up_enabled: bool, down_enabled: bool) {
        self.can_up = up_enabled;
        self.can_down = down_enabled;
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Transient => self.status.show_for(notice.message, NOTICE_TTL),
            NoticeLevel::Blocking => self.pending_alert = Some(notice.message),
        }
    }
}

/// Main application state.
pub struct AppState {
    pub dispatcher: InputDispatcher,
    pub apps: AppsManager,
    pub comparison: ComparisonPane,
    pub calculator: Calculator,
    pub notes: Notes,
    pub bookmarks: BookmarkStore,
    pub bookmark_form: BookmarkForm,
    pub clock: ClockPrefs,
    pub data_dir: PathBuf,

    pub pane: Pane,
    pub app_cursor: usize,
    pub bookmark_cursor: usize,
    pub help_scroll: usize,

    /// Message of the open alert layer.
    pub alert: Option<String>,
    /// Dashboard status shown in the header.
    pub status: StatusLine,

    pub clipboard: Box<dyn Clipboard>,
}

impl AppState {
    /// Loads persisted widgets from the configured data directory.
    pub fn new(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        let data_dir = config.data_dir.clone();
        Self {
            dispatcher: InputDispatcher::new(),
            apps: AppsManager::new(),
            comparison: ComparisonPane::default(),
            calculator: Calculator::new(),
            notes: Notes::load(&data_dir, config.autosave_delay()),
            bookmarks: BookmarkStore::load(&data_dir),
            bookmark_form: BookmarkForm::new(),
            clock: ClockPrefs::load_or(&data_dir, config.clock_prefs()),
            data_dir,
            pane: Pane::Apps,
            app_cursor: 0,
            bookmark_cursor: 0,
            help_scroll: 0,
            alert: None,
            status: StatusLine::new(),
            clipboard,
        }
    }

    /// Advances every timer: note autosave and status expiry.
    pub fn tick(&mut self, now: Instant) {
        self.notes.tick(now);
        self.status.expire(now);
        self.comparison.status.expire(now);
        if let Some(formatter) = self.apps.formatter_mut() {
            formatter.status.expire(now);
        }
        if let Some(analyzer) = self.apps.analyzer_mut() {
            analyzer.status.expire(now);
        }
    }

    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status.show_for(message, NOTICE_TTL);
    }

    /// Opens a blocking alert on top of every other layer.
    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        self.dispatcher.push(Layer::Alert);
    }

    pub fn open_app(&mut self, id: AppId) {
        self.apps.open(id);
        self.dispatcher.push(Layer::App(id));
    }

    /// Persists the clock preferences, reporting failures in the header.
    pub fn save_clock_prefs(&mut self) {
        if let Err(e) = self.clock.save(&self.data_dir) {
            warn!(error = %e, "failed to save clock preferences");
            self.show_status("Error saving preferences");
        }
    }

    /// Keeps the bookmark cursor inside the list after deletions.
    pub fn clamp_bookmark_cursor(&mut self) {
        let len = self.bookmarks.len();
        if self.bookmark_cursor >= len {
            self.bookmark_cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ListComparison;

    #[test]
    fn test_pane_receives_render_and_controls() {
        let mut comparison = ListComparison::new();
        comparison.input_mut(TableId::A).set_text("p\nq\np");
        comparison.input_mut(TableId::B).set_text("x");

        let mut pane = ComparisonPane::default();
        comparison.process(&mut pane).unwrap();
        assert_eq!(pane.rows_a.len(), 3);
        assert_eq!(pane.cursor_row(TableId::A), Some(0));

        comparison.click_value(CellRef::new(TableId::A, 0), &mut pane);
        assert_eq!(pane.highlighted, Some(CellRef::new(TableId::A, 0)));
        assert!(!pane.can_up);
        assert!(pane.can_down);
    }

    #[test]
    fn test_blocking_notice_becomes_pending_alert() {
        let mut comparison = ListComparison::new();
        let mut pane = ComparisonPane::default();
        assert!(comparison.process(&mut pane).is_err());
        assert_eq!(
            pane.take_alert().as_deref(),
            Some("Please enter values for both lists.")
        );
        assert_eq!(pane.take_alert(), None);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut pane = ComparisonPane::default();
        let rows = vec![
            TableRow {
                index: 1,
                value: "a".to_string(),
                is_common: false,
            },
            TableRow {
                index: 2,
                value: "b".to_string(),
                is_common: true,
            },
        ];
        pane.render_table(TableId::B, &rows);
        pane.cursor_down(TableId::B);
        pane.cursor_down(TableId::B);
        assert_eq!(pane.cursor_row(TableId::B), Some(1));
        pane.cursor_up(TableId::B);
        pane.cursor_up(TableId::B);
        assert_eq!(pane.cursor_row(TableId::B), Some(0));
    }
}
