//! List ⇄ CSV formatter.

use std::time::Duration;

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::clipboard::Clipboard;
use crate::status::StatusLine;
use crate::text_input::TextInput;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Please enter a list to convert")]
    EmptyList,

    #[error("Please enter CSV to convert")]
    EmptyCsv,

    #[error("Invalid separator or enclosure: {0}")]
    Pattern(String),
}

/// Quote character wrapped around each CSV item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enclosure {
    #[default]
    Single,
    Double,
}

impl Enclosure {
    pub fn as_str(self) -> &'static str {
        match self {
            Enclosure::Single => "'",
            Enclosure::Double => "\"",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Enclosure::Single => Enclosure::Double,
            Enclosure::Double => Enclosure::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub remove_duplicates: bool,
    pub separator: String,
    pub enclosure: Enclosure,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: false,
            separator: ",".to_string(),
            enclosure: Enclosure::Single,
        }
    }
}

impl CsvOptions {
    /// Separator actually used: an empty field falls back to `,`.
    pub fn separator(&self) -> &str {
        if self.separator.is_empty() {
            ","
        } else {
            &self.separator
        }
    }
}

/// Converts one-item-per-line text into a single enclosed, separated line.
pub fn list_to_csv(input: &str, options: &CsvOptions) -> Result<String, FormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::EmptyList);
    }

    let mut lines: Vec<&str> = input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if options.remove_duplicates {
        let mut seen = Vec::with_capacity(lines.len());
        lines.retain(|line| {
            if seen.contains(line) {
                false
            } else {
                seen.push(*line);
                true
            }
        });
    }

    let enc = options.enclosure.as_str();
    Ok(lines
        .iter()
        .map(|line| format!("{enc}{line}{enc}"))
        .collect::<Vec<_>>()
        .join(options.separator()))
}

/// Converts a CSV line back into newline-separated items.
///
/// Enclosed items are extracted first; when none are found the input is
/// split on the separator and a surrounding enclosure pair is stripped from
/// each item.
pub fn csv_to_list(
    input: &str,
    separator: &str,
    enclosure: Enclosure,
) -> Result<String, FormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormatError::EmptyCsv);
    }
    let separator = if separator.is_empty() { "," } else { separator };
    let enc = enclosure.as_str();

    let pattern = format!(
        "{enc}(.*?){enc}(?:{sep}|$)",
        enc = regex::escape(enc),
        sep = regex::escape(separator)
    );
    let re = Regex::new(&pattern).map_err(|e| FormatError::Pattern(e.to_string()))?;

    let matches: Vec<&str> = re
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let items: Vec<&str> = if matches.is_empty() {
        input
            .split(separator)
            .map(|item| {
                let item = item.trim();
                let enclosed =
                    item.len() >= 2 * enc.len() && item.starts_with(enc) && item.ends_with(enc);
                if enclosed {
                    &item[enc.len()..item.len() - enc.len()]
                } else {
                    item
                }
            })
            .collect()
    } else {
        matches
    };

    Ok(items.join("\n"))
}

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Editable fields of the formatter, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterField {
    #[default]
    List,
    Separator,
    Csv,
    CsvSeparator,
}

impl FormatterField {
    pub fn next(self) -> Self {
        match self {
            FormatterField::List => FormatterField::Separator,
            FormatterField::Separator => FormatterField::Csv,
            FormatterField::Csv => FormatterField::CsvSeparator,
            FormatterField::CsvSeparator => FormatterField::List,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormatterField::List => FormatterField::CsvSeparator,
            FormatterField::Separator => FormatterField::List,
            FormatterField::Csv => FormatterField::Separator,
            FormatterField::CsvSeparator => FormatterField::Csv,
        }
    }
}

/// List Formatter app state.
#[derive(Debug, Clone)]
pub struct ListFormatter {
    pub list_input: TextInput,
    pub separator: TextInput,
    pub csv_input: TextInput,
    pub csv_separator: TextInput,
    pub remove_duplicates: bool,
    pub enclosure: Enclosure,
    pub csv_enclosure: Enclosure,
    pub focus: FormatterField,
    pub status: StatusLine,
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListFormatter {
    pub fn new() -> Self {
        Self {
            list_input: TextInput::new(),
            separator: TextInput::with_text(","),
            csv_input: TextInput::new(),
            csv_separator: TextInput::with_text(","),
            remove_duplicates: false,
            enclosure: Enclosure::Single,
            csv_enclosure: Enclosure::Single,
            focus: FormatterField::List,
            status: StatusLine::new(),
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            FormatterField::List => &mut self.list_input,
            FormatterField::Separator => &mut self.separator,
            FormatterField::Csv => &mut self.csv_input,
            FormatterField::CsvSeparator => &mut self.csv_separator,
        }
    }

    /// Converts the list input to CSV and copies it.
    pub fn convert_and_copy(&mut self, clipboard: &mut dyn Clipboard) {
        let options = CsvOptions {
            remove_duplicates: self.remove_duplicates,
            separator: self.separator.text().to_string(),
            enclosure: self.enclosure,
        };
        let csv = match list_to_csv(self.list_input.text(), &options) {
            Ok(csv) => csv,
            Err(e) => {
                self.status.show_for(e.to_string(), STATUS_TTL);
                return;
            }
        };
        let message = match clipboard.write_text(&csv) {
            Ok(()) => "Copied to clipboard!",
            Err(e) => {
                warn!(error = %e, "failed to copy CSV");
                "Error copying to clipboard"
            }
        };
        self.status.show_for(message, STATUS_TTL);
    }

    /// Converts the CSV input back to a list, writes it into the list input
    /// and copies it.
    pub fn convert_csv_to_list(&mut self, clipboard: &mut dyn Clipboard) {
        let list = match csv_to_list(
            self.csv_input.text(),
            self.csv_separator.text(),
            self.csv_enclosure,
        ) {
            Ok(list) => list,
            Err(e) => {
                self.status.show_for(e.to_string(), STATUS_TTL);
                return;
            }
        };
        self.list_input.set_text(list.as_str());
        let message = match clipboard.write_text(&list) {
            Ok(()) => "Converted to list and copied to clipboard!",
            Err(e) => {
                warn!(error = %e, "failed to copy list");
                "Converted to list but failed to copy to clipboard"
            }
        };
        self.status.show_for(message, STATUS_TTL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn test_list_to_csv_defaults() {
        let csv = list_to_csv(" a \n\nb\nc\n", &CsvOptions::default()).unwrap();
        assert_eq!(csv, "'a','b','c'");
    }

    #[test]
    fn test_list_to_csv_dedup_and_custom_separator() {
        let options = CsvOptions {
            remove_duplicates: true,
            separator: ";".to_string(),
            enclosure: Enclosure::Double,
        };
        let csv = list_to_csv("b\na\nb\na\nc", &options).unwrap();
        assert_eq!(csv, "\"b\";\"a\";\"c\"");
    }

    #[test]
    fn test_empty_separator_falls_back_to_comma() {
        let options = CsvOptions {
            separator: String::new(),
            ..CsvOptions::default()
        };
        assert_eq!(list_to_csv("x\ny", &options).unwrap(), "'x','y'");
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert_eq!(
            list_to_csv("  \n ", &CsvOptions::default()),
            Err(FormatError::EmptyList)
        );
        assert_eq!(
            csv_to_list("", ",", Enclosure::Single),
            Err(FormatError::EmptyCsv)
        );
    }

    #[test]
    fn test_csv_to_list_enclosed() {
        let list = csv_to_list("'a','b c','d'", ",", Enclosure::Single).unwrap();
        assert_eq!(list, "a\nb c\nd");
    }

    #[test]
    fn test_csv_to_list_plain_split_fallback() {
        let list = csv_to_list("a, b ,c", ",", Enclosure::Double).unwrap();
        assert_eq!(list, "a\nb\nc");
    }

    #[test]
    fn test_csv_to_list_regex_metachar_separator() {
        let list = csv_to_list("\"x\"|\"y\"", "|", Enclosure::Double).unwrap();
        assert_eq!(list, "x\ny");
    }

    #[test]
    fn test_formatter_round_trip_through_inputs() {
        let mut app = ListFormatter::new();
        let mut clipboard = MemoryClipboard::new();
        app.list_input.set_text("a\nb\na");
        app.remove_duplicates = true;
        app.convert_and_copy(&mut clipboard);
        assert_eq!(clipboard.contents.as_deref(), Some("'a','b'"));
        assert_eq!(app.status.message(), Some("Copied to clipboard!"));

        app.csv_input.set_text("'x','y'");
        app.convert_csv_to_list(&mut clipboard);
        assert_eq!(app.list_input.text(), "x\ny");
        assert_eq!(clipboard.contents.as_deref(), Some("x\ny"));
    }

    #[test]
    fn test_formatter_reports_errors_in_status() {
        let mut app = ListFormatter::new();
        let mut clipboard = MemoryClipboard::failing();
        app.convert_and_copy(&mut clipboard);
        assert_eq!(app.status.message(), Some("Please enter a list to convert"));

        app.csv_input.set_text("a,b");
        app.convert_csv_to_list(&mut clipboard);
        assert_eq!(app.list_input.text(), "a\nb");
        assert_eq!(
            app.status.message(),
            Some("Converted to list but failed to copy to clipboard")
        );
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut field = FormatterField::List;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormatterField::List);
        assert_eq!(FormatterField::List.prev(), FormatterField::CsvSeparator);
    }
}
