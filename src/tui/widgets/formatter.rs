//! List Formatter popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::apps::{AppId, FormatterField, ListFormatter};
use crate::tui::style::Styles;

use super::common::{key_hints, popup_block, popup_rect, render_text_input, status_line};

pub fn render_formatter(frame: &mut Frame, area: Rect, app: &ListFormatter) {
    let popup = popup_rect(area, 80, 85, (50, 120), (18, 48));
    let inner = popup_block(frame, popup, AppId::ListFormatter.definition().name);

    let chunks = Layout::vertical([
        Constraint::Percentage(45), // List
        Constraint::Length(3),      // List options
        Constraint::Percentage(30), // CSV
        Constraint::Length(3),      // CSV options
        Constraint::Length(1),      // Status
        Constraint::Length(1),      // Hints
    ])
    .split(inner);

    render_text_input(
        frame,
        chunks[0],
        "List (one item per line)",
        &app.list_input,
        app.focus == FormatterField::List,
    );
    render_options(
        frame,
        chunks[1],
        app,
        FormatterField::Separator,
        Some(app.remove_duplicates),
    );
    render_text_input(
        frame,
        chunks[2],
        "CSV",
        &app.csv_input,
        app.focus == FormatterField::Csv,
    );
    render_options(frame, chunks[3], app, FormatterField::CsvSeparator, None);

    frame.render_widget(status_line(app.status.message()), chunks[4]);
    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("Tab", "next field"),
            ("Ctrl-R", "convert"),
            ("Ctrl-D", "dedup"),
            ("Ctrl-E", "quotes"),
            ("Esc", "close"),
        ])),
        chunks[5],
    );
}

/// Separator field plus the toggles of one section.
fn render_options(
    frame: &mut Frame,
    area: Rect,
    app: &ListFormatter,
    field: FormatterField,
    remove_duplicates: Option<bool>,
) {
    let cols = Layout::horizontal([Constraint::Length(16), Constraint::Min(10)]).split(area);
    let (input, enclosure) = match field {
        FormatterField::Separator => (&app.separator, app.enclosure),
        _ => (&app.csv_separator, app.csv_enclosure),
    };
    render_text_input(frame, cols[0], "Separator", input, app.focus == field);

    let mut spans = vec![
        Span::styled(" Enclosure: ", Styles::dim()),
        Span::styled(enclosure.as_str(), Styles::section_header()),
    ];
    if let Some(on) = remove_duplicates {
        let mark = if on { "[x]" } else { "[ ]" };
        spans.push(Span::styled("   Remove duplicates ", Styles::dim()));
        spans.push(Span::styled(mark, Styles::section_header()));
    }
    let options = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(cols[1]);
    frame.render_widget(Paragraph::new(Line::from(spans)), options[1]);
}
