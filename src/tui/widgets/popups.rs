//! Small modal popups: blocking alert and the add-bookmark form.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::style::Styles;
use crate::widgets::{BookmarkField, BookmarkForm};

use super::common::{key_hints, popup_block, popup_rect, render_text_input};

pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = popup_rect(area, 50, 30, (30, 60), (6, 10));
    let inner = popup_block(frame, popup_area, "Alert");

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_string(), Styles::error())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(key_hints(&[("Esc", "dismiss")])).alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn render_bookmark_form(frame: &mut Frame, area: Rect, form: &BookmarkForm) {
    let popup_area = popup_rect(area, 50, 40, (40, 70), (11, 11));
    let inner = popup_block(frame, popup_area, "Add Bookmark");

    let chunks = Layout::vertical([
        Constraint::Length(3), // Name
        Constraint::Length(3), // URL
        Constraint::Length(1), // Error
        Constraint::Length(1), // Hints
    ])
    .split(inner);

    render_text_input(
        frame,
        chunks[0],
        "Name",
        &form.name,
        form.focus == BookmarkField::Name,
    );
    render_text_input(
        frame,
        chunks[1],
        "URL",
        &form.url,
        form.focus == BookmarkField::Url,
    );
    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.clone()).style(Styles::error()),
            chunks[2],
        );
    }
    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("Tab", "switch"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ])),
        chunks[3],
    );
}
