//! Terminal User Interface for homedeck.
//!
//! The dashboard (clock, apps, note, bookmarks) with the utility apps and
//! widgets opened as popups on top of it.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::AppState;
