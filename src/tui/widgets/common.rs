//! Shared primitives for popups and text fields.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::text_input::TextInput;
use crate::tui::style::Styles;

/// Centered popup rect: `percent_x` of the width clamped to
/// `min_width..=max_width`, `percent_y` of the height clamped likewise.
pub fn popup_rect(
    area: Rect,
    percent_x: u16,
    percent_y: u16,
    (min_width, max_width): (u16, u16),
    (min_height, max_height): (u16, u16),
) -> Rect {
    let width = (area.width * percent_x / 100)
        .clamp(min_width, max_width)
        .min(area.width);
    let height = (area.height * percent_y / 100)
        .clamp(min_height, max_height)
        .min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears `area` and draws the popup border. Returns the inner area.
pub fn popup_block(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Bordered block whose border colour follows focus.
pub fn field_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

/// Renders a text field in a titled box, scrolled so the cursor line is
/// visible. The terminal cursor is placed only when `focused`.
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    focused: bool,
) {
    let block = field_block(title, focused);
    let inner = block.inner(area);

    let (line, col) = input.cursor_position();
    let scroll_y = line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = col.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(input.text().to_string())
        .block(block)
        .style(Styles::input())
        .scroll((scroll_y as u16, scroll_x as u16));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(
            inner.x + (col - scroll_x) as u16,
            inner.y + (line - scroll_y) as u16,
        ));
    }
}

/// One-line footer of `key → action` hints.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::help()));
        }
        spans.push(Span::styled(*key, Styles::help_key()));
        spans.push(Span::styled(format!(" {action}"), Styles::help()));
    }
    Line::from(spans)
}

/// Status line below an app: message in the status colour, or nothing.
pub fn status_line(message: Option<&str>) -> Paragraph<'static> {
    Paragraph::new(message.unwrap_or_default().to_string()).style(Styles::status())
}
