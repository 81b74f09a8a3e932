//! Bookmarks: a persisted list of named links.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::error::StoreError;
use crate::text_input::TextInput;

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Please enter both name and URL")]
    MissingField,

    #[error("Failed to import bookmarks: {0}")]
    Import(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl Bookmark {
    /// Upper-cased first letter, shown when there is no favicon.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Prefixes `https://` unless the URL already names an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

pub fn favicon_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(format!(
        "https://www.google.com/s2/favicons?domain={host}&sz=64"
    ))
}

/// How an imported list is combined with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Replace,
    /// Appends bookmarks whose URL is not already present.
    Merge,
}

#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
    edit_mode: bool,
}

impl BookmarkStore {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("bookmarks.json")
    }

    /// Loads `bookmarks.json`; a missing, empty or invalid file gives an
    /// empty list.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let bookmarks = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring invalid bookmarks file");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };
        Self {
            path,
            bookmarks,
            edit_mode: false,
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    pub fn add(&mut self, name: &str, url: &str) -> Result<&Bookmark, BookmarkError> {
        self.add_at(name, url, Utc::now())
    }

    pub fn add_at(
        &mut self,
        name: &str,
        url: &str,
        now: DateTime<Utc>,
    ) -> Result<&Bookmark, BookmarkError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(BookmarkError::MissingField);
        }
        let url = normalize_url(url);
        let bookmark = Bookmark {
            name: name.to_string(),
            favicon_url: favicon_url(&url),
            url,
            date_added: now,
        };
        info!(name = %bookmark.name, url = %bookmark.url, "bookmark added");
        self.bookmarks.push(bookmark);
        self.save()?;
        let index = self.bookmarks.len() - 1;
        Ok(&self.bookmarks[index])
    }

    /// Removes the bookmark at `index`. Only honoured in edit mode; an
    /// out-of-range index is ignored.
    pub fn delete(&mut self, index: usize) -> Result<bool, StoreError> {
        if !self.edit_mode || index >= self.bookmarks.len() {
            return Ok(false);
        }
        let removed = self.bookmarks.remove(index);
        info!(name = %removed.name, "bookmark deleted");
        self.save()?;
        Ok(true)
    }

    /// Copies the URL at `index` to the clipboard. Does nothing in edit mode.
    pub fn activate(
        &self,
        index: usize,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Option<&str>, ClipboardError> {
        if self.edit_mode {
            return Ok(None);
        }
        let Some(bookmark) = self.bookmarks.get(index) else {
            return Ok(None);
        };
        clipboard.write_text(&bookmark.url)?;
        Ok(Some(&bookmark.url))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.bookmarks)
    }

    pub fn export(&self, path: &Path) -> Result<(), StoreError> {
        let json = self.to_json().map_err(|e| StoreError::json(path, e))?;
        fs::write(path, json).map_err(|e| StoreError::io(path, e))
    }

    /// Reads a JSON array of bookmarks from `path` and combines it with the
    /// current list. Returns the number of bookmarks added.
    pub fn import(&mut self, path: &Path, mode: ImportMode) -> Result<usize, BookmarkError> {
        let content =
            fs::read_to_string(path).map_err(|e| BookmarkError::Import(e.to_string()))?;
        let imported: Vec<Bookmark> =
            serde_json::from_str(&content).map_err(|e| BookmarkError::Import(e.to_string()))?;

        let added = match mode {
            ImportMode::Replace => {
                let n = imported.len();
                self.bookmarks = imported;
                n
            }
            ImportMode::Merge => {
                let mut n = 0;
                for bookmark in imported {
                    if !self.bookmarks.iter().any(|b| b.url == bookmark.url) {
                        self.bookmarks.push(bookmark);
                        n += 1;
                    }
                }
                n
            }
        };
        info!(added, ?mode, "bookmarks imported");
        self.save()?;
        Ok(added)
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        let json = self.to_json().map_err(|e| StoreError::json(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkField {
    #[default]
    Name,
    Url,
}

/// The "add bookmark" form.
#[derive(Debug, Clone, Default)]
pub struct BookmarkForm {
    pub name: TextInput,
    pub url: TextInput,
    pub focus: BookmarkField,
    pub error: Option<String>,
}

impl BookmarkForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            BookmarkField::Name => &mut self.name,
            BookmarkField::Url => &mut self.url,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            BookmarkField::Name => BookmarkField::Url,
            BookmarkField::Url => BookmarkField::Name,
        };
    }

    /// Adds the bookmark. On success the form is cleared and `true` returned;
    /// on failure the message is kept in `error`.
    pub fn submit(&mut self, store: &mut BookmarkStore) -> bool {
        match store.add(self.name.text(), self.url.text()) {
            Ok(_) => {
                *self = Self::new();
                true
            }
            Err(e) => {
                warn!(error = %e, "bookmark not added");
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use chrono::TimeZone;

    fn store() -> (tempfile::TempDir, BookmarkStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::load(dir.path());
        (dir, store)
    }

    #[test]
    fn test_missing_empty_or_invalid_file_loads_empty() {
        let (dir, store) = store();
        assert!(store.is_empty());

        std::fs::write(BookmarkStore::path(dir.path()), "  \n").unwrap();
        assert!(BookmarkStore::load(dir.path()).is_empty());

        std::fs::write(BookmarkStore::path(dir.path()), "{not json").unwrap();
        assert!(BookmarkStore::load(dir.path()).is_empty());
    }

    #[test]
    fn test_add_normalizes_url_and_persists() {
        let (dir, mut store) = store();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let added = store.add_at("  Rust ", "rust-lang.org/learn", now).unwrap();
        assert_eq!(added.name, "Rust");
        assert_eq!(added.url, "https://rust-lang.org/learn");
        assert_eq!(
            added.favicon_url.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=rust-lang.org&sz=64")
        );

        let reloaded = BookmarkStore::load(dir.path());
        assert_eq!(reloaded.bookmarks(), store.bookmarks());
        let raw = std::fs::read_to_string(BookmarkStore::path(dir.path())).unwrap();
        assert!(raw.contains("\"dateAdded\": \"2026-03-01T12:00:00Z\""));
    }

    #[test]
    fn test_add_keeps_explicit_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_add_requires_name_and_url() {
        let (_dir, mut store) = store();
        let err = store.add(" ", "example.com").unwrap_err();
        assert_eq!(err.to_string(), "Please enter both name and URL");
        assert!(store.add("x", "").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_only_in_edit_mode() {
        let (_dir, mut store) = store();
        store.add("a", "a.com").unwrap();
        store.add("b", "b.com").unwrap();

        assert!(!store.delete(0).unwrap());
        assert_eq!(store.len(), 2);

        store.toggle_edit_mode();
        assert!(!store.delete(5).unwrap());
        assert!(store.delete(0).unwrap());
        assert_eq!(store.bookmarks()[0].name, "b");
    }

    #[test]
    fn test_activate_copies_url_outside_edit_mode() {
        let (_dir, mut store) = store();
        store.add("docs", "docs.rs").unwrap();
        let mut clipboard = MemoryClipboard::new();

        let url = store.activate(0, &mut clipboard).unwrap();
        assert_eq!(url, Some("https://docs.rs"));
        assert_eq!(clipboard.contents.as_deref(), Some("https://docs.rs"));

        store.toggle_edit_mode();
        clipboard.contents = None;
        assert_eq!(store.activate(0, &mut clipboard).unwrap(), None);
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn test_export_then_import_merge_skips_known_urls() {
        let (dir, mut store) = store();
        store.add("a", "a.com").unwrap();
        store.add("b", "b.com").unwrap();
        let export = dir.path().join("export.json");
        store.export(&export).unwrap();

        let other_dir = tempfile::tempdir().unwrap();
        let mut other = BookmarkStore::load(other_dir.path());
        other.add("b", "b.com").unwrap();
        assert_eq!(other.import(&export, ImportMode::Merge).unwrap(), 1);
        assert_eq!(other.len(), 2);

        assert_eq!(other.import(&export, ImportMode::Replace).unwrap(), 2);
        assert_eq!(other.bookmarks()[0].name, "a");
    }

    #[test]
    fn test_import_rejects_non_array() {
        let (dir, mut store) = store();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"name\": \"x\"}").unwrap();
        assert!(matches!(
            store.import(&path, ImportMode::Replace),
            Err(BookmarkError::Import(_))
        ));
    }

    #[test]
    fn test_form_submit_clears_on_success() {
        let (_dir, mut store) = store();
        let mut form = BookmarkForm::new();
        assert!(!form.submit(&mut store));
        assert_eq!(form.error.as_deref(), Some("Please enter both name and URL"));

        form.name.set_text("News");
        form.toggle_focus();
        form.focused_input().set_text("news.ycombinator.com");
        assert!(form.submit(&mut store));
        assert!(form.name.is_empty());
        assert_eq!(form.error, None);
        assert_eq!(store.bookmarks()[0].initial(), "N");
    }
}
