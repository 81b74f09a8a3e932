//! Duplicates analyzer.
//!
//! Each input line is a separated record whose first column names the list
//! it belongs to. The user picks lists, then identical records within them
//! are counted and shown most frequent first.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::status::StatusLine;
use crate::text_input::TextInput;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please enter some data to analyze")]
    EmptyInput,

    #[error("Please select at least one list to analyze")]
    NothingSelected,
}

/// One row of the frequency preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub number: usize,
    pub frequency: usize,
    pub values: Vec<String>,
}

fn separator_or<'a>(sep: &'a str, default: &'a str) -> &'a str {
    if sep.is_empty() { default } else { sep }
}

fn split_records(input: &str, separator: &str) -> Vec<Vec<String>> {
    input
        .trim()
        .split('\n')
        .map(|row| row.split(separator).map(|v| v.trim().to_string()).collect())
        .collect()
}

/// Distinct non-empty first-column values in first-seen order.
pub fn list_groups(input: &str, separator: &str) -> Result<Vec<String>, AnalyzeError> {
    if input.trim().is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }
    let separator = separator_or(separator, ",");

    let mut groups: Vec<String> = Vec::new();
    for record in split_records(input, separator) {
        if let Some(first) = record.into_iter().next()
            && !first.is_empty()
            && !groups.contains(&first)
        {
            groups.push(first);
        }
    }
    Ok(groups)
}

/// Counts identical records among the selected groups.
///
/// Records are keyed by their fields joined with `join_separator`; the
/// preview splits that key back into columns. Ties keep first-seen order.
pub fn count_duplicates(
    input: &str,
    separator: &str,
    join_separator: &str,
    selected: &[String],
) -> Result<Vec<PreviewRow>, AnalyzeError> {
    if selected.is_empty() {
        return Err(AnalyzeError::NothingSelected);
    }
    let separator = separator_or(separator, ",");
    let join_separator = separator_or(join_separator, "|");

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in split_records(input, separator) {
        let Some(first) = record.first() else {
            continue;
        };
        if !selected.contains(first) {
            continue;
        }
        let key = record.join(join_separator);
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    let mut entries: Vec<(String, usize)> = order
        .into_iter()
        .map(|key| {
            let n = counts.get(&key).copied().unwrap_or(0);
            (key, n)
        })
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, (key, frequency))| PreviewRow {
            number: i + 1,
            frequency,
            values: key.split(join_separator).map(str::to_string).collect(),
        })
        .collect())
}

/// Frequency column, one value per line.
pub fn frequency_text(rows: &[PreviewRow]) -> String {
    rows.iter()
        .map(|r| r.frequency.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole preview as tab-separated lines, header included.
pub fn table_text(rows: &[PreviewRow]) -> String {
    let mut lines = vec!["#\tFrequency\tCombined Values".to_string()];
    for row in rows {
        let mut cells = vec![row.number.to_string(), row.frequency.to_string()];
        cells.extend(row.values.iter().cloned());
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

/// A selectable list name discovered by [`list_groups`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub selected: bool,
}

/// Editable fields of the analyzer, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyzerField {
    #[default]
    Input,
    Separator,
    Groups,
    JoinSeparator,
}

impl AnalyzerField {
    pub fn next(self) -> Self {
        match self {
            AnalyzerField::Input => AnalyzerField::Separator,
            AnalyzerField::Separator => AnalyzerField::Groups,
            AnalyzerField::Groups => AnalyzerField::JoinSeparator,
            AnalyzerField::JoinSeparator => AnalyzerField::Input,
        }
    }
}

/// Duplicates Analyzer app state.
#[derive(Debug, Clone)]
pub struct DuplicatesAnalyzer {
    pub input: TextInput,
    pub separator: TextInput,
    pub join_separator: TextInput,
    pub groups: Vec<Group>,
    pub group_cursor: usize,
    pub preview: Vec<PreviewRow>,
    pub focus: AnalyzerField,
    /// Validation message that must be acknowledged.
    pub alert: Option<String>,
    pub status: StatusLine,
}

impl Default for DuplicatesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DuplicatesAnalyzer {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            separator: TextInput::with_text(","),
            join_separator: TextInput::with_text("|"),
            groups: Vec::new(),
            group_cursor: 0,
            preview: Vec::new(),
            focus: AnalyzerField::Input,
            alert: None,
            status: StatusLine::new(),
        }
    }

    /// Text input behind the focused field, if the field is editable text.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            AnalyzerField::Input => Some(&mut self.input),
            AnalyzerField::Separator => Some(&mut self.separator),
            AnalyzerField::JoinSeparator => Some(&mut self.join_separator),
            AnalyzerField::Groups => None,
        }
    }

    /// "Check": discovers the list names and offers them for selection.
    pub fn check(&mut self) {
        match list_groups(self.input.text(), self.separator.text()) {
            Ok(names) => {
                info!(groups = names.len(), "duplicate groups found");
                self.groups = names
                    .into_iter()
                    .map(|name| Group {
                        name,
                        selected: false,
                    })
                    .collect();
                self.group_cursor = 0;
                self.focus = AnalyzerField::Groups;
            }
            Err(e) => self.alert = Some(e.to_string()),
        }
    }

    pub fn toggle_group(&mut self) {
        if let Some(group) = self.groups.get_mut(self.group_cursor) {
            group.selected = !group.selected;
        }
    }

    pub fn select_up(&mut self) {
        self.group_cursor = self.group_cursor.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.group_cursor + 1 < self.groups.len() {
            self.group_cursor += 1;
        }
    }

    /// "Finalize": counts duplicates among the selected lists.
    pub fn finalize(&mut self) {
        let selected: Vec<String> = self
            .groups
            .iter()
            .filter(|g| g.selected)
            .map(|g| g.name.clone())
            .collect();
        match count_duplicates(
            self.input.text(),
            self.separator.text(),
            self.join_separator.text(),
            &selected,
        ) {
            Ok(rows) => {
                info!(rows = rows.len(), "duplicates finalized");
                self.preview = rows;
            }
            Err(e) => self.alert = Some(e.to_string()),
        }
    }

    pub fn copy_frequency(&mut self, clipboard: &mut dyn Clipboard) {
        let text = frequency_text(&self.preview);
        self.copy(clipboard, &text);
    }

    pub fn copy_all(&mut self, clipboard: &mut dyn Clipboard) {
        let text = table_text(&self.preview);
        self.copy(clipboard, &text);
    }

    fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str) {
        let message = match clipboard.write_text(text) {
            Ok(()) => "Copied to clipboard!",
            Err(e) => {
                warn!(error = %e, "failed to copy analyzer output");
                "Failed to copy to clipboard. Try again or copy manually."
            }
        };
        self.status.show_for(message, STATUS_TTL);
    }
}
