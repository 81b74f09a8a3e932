//! Help popup with the key bindings of every screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::common::{popup_block, popup_rect};

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_area = popup_rect(area, 60, 80, (40, 80), (10, 30));
    let inner = popup_block(frame, popup_area, "homedeck Help");

    let content = help_content();
    let content_lines = content.len();

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;

    // Clamp scroll to valid range
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        Span::styled(", ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Cyan)))
}

fn binding(keys: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        section("Dashboard"),
        binding("Tab", "Next pane (apps, notes, bookmarks)"),
        binding("Enter", "Open app / edit note / copy bookmark URL"),
        binding("a", "Add bookmark"),
        binding("e", "Toggle bookmark edit mode"),
        binding("d", "Delete bookmark (edit mode)"),
        binding("f", "Toggle 12h/24h clock"),
        binding("s", "Toggle seconds"),
        binding("0-9", "Open calculator"),
        binding("q", "Quit"),
        binding("Esc", "Close the topmost popup"),
        Line::from(""),
        section("List Comparison"),
        binding("Tab", "Cycle inputs and tables"),
        binding("Ctrl-R / F5", "Process lists"),
        binding("↑/↓", "Move row"),
        binding("←/→", "Pick index or value column"),
        binding("Enter", "Click cell (index jumps, value highlights)"),
        binding("n / ]", "Next duplicate"),
        binding("N / [", "Previous duplicate"),
        binding("c a b", "Copy common / A-B / B-A"),
        Line::from(""),
        section("List Formatter"),
        binding("Ctrl-R", "Convert focused section and copy"),
        binding("Ctrl-D", "Toggle duplicate removal"),
        binding("Ctrl-E", "Toggle ' / \" enclosure"),
        Line::from(""),
        section("Duplicates Analyzer"),
        binding("Ctrl-R", "Check lists / finalize"),
        binding("Space", "Select list"),
        binding("Ctrl-F", "Copy frequency column"),
        binding("Ctrl-A", "Copy whole table"),
        Line::from(""),
        section("Calculator"),
        binding("0-9 .", "Digits"),
        binding("+ - * / %", "Operators"),
        binding("= / Enter", "Result"),
        binding("c", "Clear"),
        binding("n", "Toggle sign"),
    ]
}
