//! Calculator popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::widgets::{Calculator, ERROR_DISPLAY};

use super::common::{key_hints, popup_block, popup_rect};

pub fn render_calculator(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let popup = popup_rect(area, 30, 30, (30, 40), (8, 8));
    let inner = popup_block(frame, popup, "Calculator");

    let chunks = Layout::vertical([
        Constraint::Length(1), // History
        Constraint::Length(2), // Display
        Constraint::Min(0),
        Constraint::Length(1), // Hints
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(calc.history().to_string())
            .style(Styles::dim())
            .alignment(Alignment::Right),
        chunks[0],
    );

    let display_style = if calc.display() == ERROR_DISPLAY {
        Styles::error()
    } else {
        Styles::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(calc.display().to_string())
            .style(display_style)
            .alignment(Alignment::Right),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(key_hints(&[("=", "result"), ("c", "clear"), ("n", "±")])),
        chunks[3],
    );
}
