//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

use super::common::{popup_block, popup_rect};

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect, unsaved_note: bool) {
    let popup_area = popup_rect(area, 50, 100, (40, 60), (7, 9));
    let inner = popup_block(frame, popup_area, "Exit homedeck");

    let mut content = vec![
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            Styles::default(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::help()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::help()),
        ]),
    ];
    if unsaved_note {
        content.insert(
            1,
            Line::from(Span::styled("(the note will be saved first)", Styles::dim())),
        );
    }

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
