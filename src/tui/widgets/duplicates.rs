//! Duplicates Analyzer popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, List, ListItem, ListState, Paragraph, Row, Table};

use crate::apps::{AnalyzerField, AppId, DuplicatesAnalyzer};
use crate::tui::style::Styles;

use super::common::{
    field_block, key_hints, popup_block, popup_rect, render_text_input, status_line,
};

pub fn render_duplicates(frame: &mut Frame, area: Rect, app: &DuplicatesAnalyzer) {
    let popup = popup_rect(area, 85, 90, (50, 140), (20, 56));
    let inner = popup_block(frame, popup, AppId::DuplicatesAnalyzer.definition().name);

    let rows = Layout::vertical([
        Constraint::Percentage(35), // Input
        Constraint::Min(6),         // Groups + preview
        Constraint::Length(1),      // Status
        Constraint::Length(1),      // Hints
    ])
    .split(inner);

    let top = Layout::horizontal([Constraint::Min(20), Constraint::Length(16)]).split(rows[0]);
    render_text_input(
        frame,
        top[0],
        "Data (list,value,...)",
        &app.input,
        app.focus == AnalyzerField::Input,
    );
    let seps = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(top[1]);
    render_text_input(
        frame,
        seps[0],
        "Separator",
        &app.separator,
        app.focus == AnalyzerField::Separator,
    );
    render_text_input(
        frame,
        seps[1],
        "Join with",
        &app.join_separator,
        app.focus == AnalyzerField::JoinSeparator,
    );

    let bottom = Layout::horizontal([Constraint::Length(28), Constraint::Min(20)]).split(rows[1]);
    render_groups(frame, bottom[0], app);
    render_preview(frame, bottom[1], app);

    frame.render_widget(status_line(app.status.message()), rows[2]);
    let hints = if app.focus == AnalyzerField::Groups {
        key_hints(&[
            ("Space", "select"),
            ("Enter", "finalize"),
            ("Ctrl-F", "copy frequency"),
            ("Ctrl-A", "copy all"),
            ("Esc", "close"),
        ])
    } else {
        key_hints(&[
            ("Tab", "next field"),
            ("Ctrl-R", "check/finalize"),
            ("Esc", "close"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), rows[3]);
}

fn render_groups(frame: &mut Frame, area: Rect, app: &DuplicatesAnalyzer) {
    let focused = app.focus == AnalyzerField::Groups;
    let items: Vec<ListItem> = app
        .groups
        .iter()
        .map(|g| {
            let mark = if g.selected { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Styles::section_header()),
                Span::raw(g.name.clone()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if focused && !app.groups.is_empty() {
        state.select(Some(app.group_cursor));
    }
    let list = List::new(items)
        .block(field_block("Lists", focused))
        .highlight_style(Styles::selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview(frame: &mut Frame, area: Rect, app: &DuplicatesAnalyzer) {
    let width = app.preview.iter().map(|r| r.values.len()).max().unwrap_or(1);

    let mut header_cells = vec![
        Cell::from("#").style(Styles::table_header()),
        Cell::from("Frequency").style(Styles::table_header()),
    ];
    header_cells.extend(
        (0..width).map(|i| Cell::from(if i == 0 { "Combined Values" } else { "" })),
    );
    let header = Row::new(header_cells).style(Styles::table_header());

    let rows: Vec<Row> = app
        .preview
        .iter()
        .map(|r| {
            let mut cells = vec![
                Cell::from(r.number.to_string()).style(Styles::dim()),
                Cell::from(r.frequency.to_string()).style(Styles::common()),
            ];
            cells.extend(r.values.iter().map(|v| Cell::from(v.clone())));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(4), Constraint::Length(10)];
    widths.extend((0..width).map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(field_block("Preview", false))
        .column_spacing(1);
    frame.render_widget(table, area);
}
