//! Quick note with bullet entry and debounced autosave.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::status::StatusLine;
use crate::text_input::TextInput;

pub const DEFAULT_NOTE: &str = "• ";
const BULLET: &str = "•";
const SAVED_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct Notes {
    editor: TextInput,
    path: PathBuf,
    last_saved: String,
    autosave: Duration,
    save_due: Option<Instant>,
    status: StatusLine,
}

impl Notes {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("note.txt")
    }

    /// Loads the note from `data_dir`; a missing or unreadable file yields
    /// the default bullet.
    pub fn load(data_dir: &Path, autosave: Duration) -> Self {
        let path = Self::path(data_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no stored note, using default");
                DEFAULT_NOTE.to_string()
            }
        };
        let mut editor = TextInput::with_text(content.clone());
        editor.move_end();
        Self {
            editor,
            path,
            last_saved: content,
            autosave,
            save_due: None,
            status: StatusLine::new(),
        }
    }

    pub fn editor(&self) -> &TextInput {
        &self.editor
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.message()
    }

    pub fn save_pending(&self) -> bool {
        self.save_due.is_some()
    }

    /// Applies an editing operation; a change in content schedules an
    /// autosave.
    pub fn edit(&mut self, now: Instant, f: impl FnOnce(&mut TextInput)) {
        let before = self.editor.text().to_string();
        f(&mut self.editor);
        if self.editor.text() != before {
            self.touch(now);
        }
    }

    /// Enter key: continues the bullet list, or removes a bullet line that
    /// has no text yet.
    pub fn enter(&mut self, now: Instant) {
        let line = self.editor.line_before_cursor();
        if line.trim() == BULLET {
            let start = self.editor.line_start();
            let cursor = self.editor.cursor();
            let text = self.editor.text();
            let joined = format!("{}{}", &text[..start], &text[cursor..]);
            self.editor.set_text_and_cursor(joined, start);
        } else {
            self.editor.insert_str("\n• ");
        }
        self.touch(now);
    }

    fn touch(&mut self, now: Instant) {
        self.status.show("Typing...");
        self.save_due = Some(now + self.autosave);
    }

    /// Saves once the autosave deadline has passed and expires the status.
    pub fn tick(&mut self, now: Instant) {
        if self.save_due.is_some_and(|due| now >= due) {
            self.flush(now);
        }
        self.status.expire(now);
    }

    /// Saves immediately if the content differs from what was last stored.
    pub fn flush(&mut self, now: Instant) {
        self.save_due = None;
        if self.editor.text() == self.last_saved {
            self.status.clear();
            return;
        }
        match self.write() {
            Ok(()) => {
                self.last_saved = self.editor.text().to_string();
                self.status.show_until("Saved", now + SAVED_TTL);
            }
            Err(e) => {
                warn!(error = %e, "failed to save note");
                self.status.show("Error saving");
            }
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        fs::write(&self.path, self.editor.text()).map_err(|e| StoreError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTOSAVE: Duration = Duration::from_millis(1000);

    #[test]
    fn test_missing_file_gives_default_bullet() {
        let dir = tempfile::tempdir().unwrap();
        let notes = Notes::load(dir.path(), AUTOSAVE);
        assert_eq!(notes.text(), DEFAULT_NOTE);
        assert_eq!(notes.editor().cursor(), DEFAULT_NOTE.len());
    }

    #[test]
    fn test_enter_continues_bullets() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        let now = Instant::now();

        notes.edit(now, |e| e.insert_str("milk"));
        notes.enter(now);
        assert_eq!(notes.text(), "• milk\n• ");
        assert_eq!(notes.status(), Some("Typing..."));
    }

    #[test]
    fn test_enter_on_empty_bullet_removes_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        let now = Instant::now();

        notes.edit(now, |e| e.insert_str("milk"));
        notes.enter(now);
        notes.enter(now);
        assert_eq!(notes.text(), "• milk\n");
        assert_eq!(notes.editor().cursor(), "• milk\n".len());
    }

    #[test]
    fn test_enter_without_bullet_adds_one() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Notes::path(dir.path()), "plain").unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        notes.enter(Instant::now());
        assert_eq!(notes.text(), "plain\n• ");
    }

    #[test]
    fn test_autosave_after_delay() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        let now = Instant::now();

        notes.edit(now, |e| e.insert_str("eggs"));
        notes.tick(now + Duration::from_millis(500));
        assert!(notes.save_pending());
        assert!(!Notes::path(dir.path()).exists());

        notes.tick(now + AUTOSAVE);
        assert!(!notes.save_pending());
        assert_eq!(notes.status(), Some("Saved"));
        assert_eq!(
            std::fs::read_to_string(Notes::path(dir.path())).unwrap(),
            "• eggs"
        );

        notes.tick(now + AUTOSAVE + SAVED_TTL);
        assert_eq!(notes.status(), None);

        let reloaded = Notes::load(dir.path(), AUTOSAVE);
        assert_eq!(reloaded.text(), "• eggs");
    }

    #[test]
    fn test_cursor_move_does_not_schedule_save_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        notes.edit(Instant::now(), |e| e.move_end());
        assert!(!notes.save_pending());
    }

    #[test]
    fn test_flush_unchanged_content_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Notes::load(dir.path(), AUTOSAVE);
        notes.flush(Instant::now());
        assert!(!Notes::path(dir.path()).exists());
        assert_eq!(notes.status(), None);
    }

    #[test]
    fn test_write_failure_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let mut notes = Notes::load(&blocker.join("data"), AUTOSAVE);
        notes.edit(Instant::now(), |e| e.insert_char('x'));
        notes.flush(Instant::now());
        assert_eq!(notes.status(), Some("Error saving"));
    }
}
