//! TUI widgets for homedeck.

mod calculator;
mod common;
mod comparison;
mod dashboard;
mod duplicates;
mod formatter;
mod header;
mod help;
mod popups;
mod quit_confirm;

pub use calculator::render_calculator;
pub use comparison::render_comparison;
pub use dashboard::render_dashboard;
pub use duplicates::render_duplicates;
pub use formatter::render_formatter;
pub use header::render_header;
pub use help::render_help;
pub use popups::{render_alert, render_bookmark_form};
pub use quit_confirm::render_quit_confirm;
