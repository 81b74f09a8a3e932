//! Dashboard widgets: clock, notes, bookmarks and the calculator.

mod bookmarks;
mod calculator;
mod clock;
mod notes;

pub use bookmarks::{
    Bookmark, BookmarkError, BookmarkField, BookmarkForm, BookmarkStore, ImportMode, favicon_url,
    normalize_url,
};
pub use calculator::{Calculator, ERROR_DISPLAY, Operator, format_number};
pub use clock::{ClockFace, ClockFormat, ClockPrefs, clock_face, greeting};
pub use notes::{DEFAULT_NOTE, Notes};
