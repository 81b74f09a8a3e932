//! Free-text list parsing.

/// Splits raw text into list items.
///
/// Lines are trimmed and empty lines dropped. When the text collapses to a
/// single item containing a comma, that item is split on commas instead.
/// Order and duplicates are preserved.
pub fn parse_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let items = split_trimmed(raw, '\n');
    if items.len() == 1 && items[0].contains(',') {
        return split_trimmed(&items[0], ',');
    }
    items
}

fn split_trimmed(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
