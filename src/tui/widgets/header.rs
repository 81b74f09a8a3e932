//! Header widget showing greeting, clock and status.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::widgets::clock_face;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(18), // Greeting
        Constraint::Length(14), // Time
        Constraint::Length(30), // Date
        Constraint::Min(10),    // Status
    ])
    .split(area);

    let face = clock_face(&Local::now(), state.clock.format);

    let greeting = Paragraph::new(format!(" {}", face.greeting)).style(Styles::header());
    frame.render_widget(greeting, chunks[0]);

    let mut time = vec![Span::styled(face.time, Styles::header())];
    if state.clock.show_seconds {
        time.push(Span::styled(format!(":{}", face.seconds), Styles::header()));
    } else if let Some((_, meridiem)) = face.seconds.split_once(' ') {
        time.push(Span::styled(format!(" {meridiem}"), Styles::header()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(time)).style(Styles::header()),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(face.date).style(Styles::header()),
        chunks[2],
    );

    let right = match state.status.message() {
        Some(msg) => Paragraph::new(msg.to_string()).style(Styles::header().patch(Styles::status())),
        None => Paragraph::new(Line::from(vec![
            Span::styled("?", Styles::header()),
            Span::styled(" help ", Styles::header()),
        ]))
        .style(Styles::header())
        .right_aligned(),
    };
    frame.render_widget(right, chunks[3]);
}
