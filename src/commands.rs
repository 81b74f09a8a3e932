//! Text-in, text-out operations behind the command-line subcommands.

use crate::apps::{
    CsvOptions, Enclosure, count_duplicates, csv_to_list, list_groups, list_to_csv, table_text,
};
use crate::comparison::{Comparison, compare, parse_list};
use crate::error::Result;
use crate::widgets::BookmarkStore;

fn enclosure(double_quotes: bool) -> Enclosure {
    if double_quotes {
        Enclosure::Double
    } else {
        Enclosure::Single
    }
}

/// Compares two raw lists. Output is either the JSON [`Comparison`] or three
/// titled sections.
pub fn compare_text(a: &str, b: &str, json: bool) -> Result<String> {
    let result = compare(&parse_list(a), &parse_list(b))?;
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(sections(&result))
}

fn sections(result: &Comparison) -> String {
    let mut out = String::new();
    for (title, values) in [
        ("Common", &result.common),
        ("A-B", &result.unique_to_a),
        ("B-A", &result.unique_to_b),
    ] {
        out.push_str(&format!("{title} ({}):\n", values.len()));
        for value in values {
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

pub fn to_csv_text(input: &str, separator: &str, double_quotes: bool, dedup: bool) -> Result<String> {
    let options = CsvOptions {
        remove_duplicates: dedup,
        separator: separator.to_string(),
        enclosure: enclosure(double_quotes),
    };
    Ok(list_to_csv(input, &options)?)
}

pub fn from_csv_text(input: &str, separator: &str, double_quotes: bool) -> Result<String> {
    Ok(csv_to_list(input, separator, enclosure(double_quotes))?)
}

/// Without `lists`, names the lists found in the first column. With them,
/// the tab-separated frequency table.
pub fn dupes_text(
    input: &str,
    separator: &str,
    join: &str,
    lists: Option<&[String]>,
) -> Result<String> {
    match lists {
        None => Ok(list_groups(input, separator)?.join("\n")),
        Some(lists) => {
            let rows = count_duplicates(input, separator, join, lists)?;
            Ok(table_text(&rows))
        }
    }
}

/// One bookmark per line: name, tab, URL.
pub fn bookmarks_text(store: &BookmarkStore) -> String {
    store
        .bookmarks()
        .iter()
        .map(|b| format!("{}\t{}", b.name, b.url))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HomedeckError;

    #[test]
    fn test_compare_sections() {
        let out = compare_text("a\nb\nc", "b\nd", false).unwrap();
        assert_eq!(out, "Common (1):\nb\nA-B (2):\na\nc\nB-A (1):\nd\n");
    }

    #[test]
    fn test_compare_json_keys() {
        let out = compare_text("a,b", "b", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["common"][0], "b");
        assert_eq!(value["unique_to_a"][0], "a");
        assert!(value["unique_to_b"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_compare_empty_side_fails() {
        let err = compare_text("a", "  \n", false).unwrap_err();
        assert!(matches!(err, HomedeckError::Compare(_)));
    }

    #[test]
    fn test_csv_both_ways() {
        let csv = to_csv_text("x\ny\nx", ",", false, true).unwrap();
        assert_eq!(csv, "'x','y'");
        assert_eq!(from_csv_text("\"p\";\"q\"", ";", true).unwrap(), "p\nq");
    }

    #[test]
    fn test_dupes_groups_then_table() {
        let data = "l1,a\nl2,b\nl1,a";
        assert_eq!(dupes_text(data, ",", "|", None).unwrap(), "l1\nl2");

        let lists = vec!["l1".to_string()];
        let table = dupes_text(data, ",", "|", Some(&lists)).unwrap();
        assert_eq!(table, "#\tFrequency\tCombined Values\n1\t2\tl1\ta");
    }
}
