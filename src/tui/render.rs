//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::apps::AppId;
use crate::dispatch::Layer;

use super::state::AppState;
use super::widgets::{
    render_alert, render_bookmark_form, render_calculator, render_comparison, render_dashboard,
    render_duplicates, render_formatter, render_header, render_help, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Dashboard
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_dashboard(frame, chunks[1], state);

    // Popups bottom to top, so the focused layer is drawn last.
    let layers = state.dispatcher.layers().to_vec();
    for layer in layers {
        match layer {
            Layer::App(AppId::ListComparison) => render_comparison(frame, area, state),
            Layer::App(AppId::ListFormatter) => {
                if let Some(app) = state.apps.formatter() {
                    render_formatter(frame, area, app);
                }
            }
            Layer::App(AppId::DuplicatesAnalyzer) => {
                if let Some(app) = state.apps.analyzer() {
                    render_duplicates(frame, area, app);
                }
            }
            Layer::Calculator => render_calculator(frame, area, &state.calculator),
            // Edited in place on the dashboard.
            Layer::NoteEditor => {}
            Layer::BookmarkForm => render_bookmark_form(frame, area, &state.bookmark_form),
            Layer::Alert => {
                if let Some(message) = &state.alert {
                    render_alert(frame, area, message);
                }
            }
            Layer::Help => render_help(frame, area, &mut state.help_scroll),
            Layer::QuitConfirm => render_quit_confirm(frame, area, state.notes.save_pending()),
        }
    }
}
