//! List Comparison popup: two inputs, two result tables and the
//! duplicate navigation controls.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::apps::AppId;
use crate::comparison::{CellRef, CopyTarget, ListComparison, TableId};
use crate::tui::state::{AppState, Column, ComparisonFocus, ComparisonPane};
use crate::tui::style::Styles;

use super::common::{field_block, key_hints, popup_block, popup_rect, render_text_input, status_line};

pub fn render_comparison(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let Some(app) = state.apps.comparison() else {
        return;
    };
    let pane = &mut state.comparison;

    let popup = popup_rect(area, 92, 92, (60, 160), (20, 60));
    let inner = popup_block(frame, popup, AppId::ListComparison.definition().name);

    let chunks = Layout::vertical([
        Constraint::Percentage(35), // Inputs
        Constraint::Length(1),      // Controls
        Constraint::Min(5),         // Tables
        Constraint::Length(1),      // Status
        Constraint::Length(1),      // Hints
    ])
    .split(inner);

    render_inputs(frame, chunks[0], app, pane.focus);
    render_controls(frame, chunks[1], pane);

    let tables = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_table(frame, tables[0], pane, TableId::A);
    render_table(frame, tables[1], pane, TableId::B);

    frame.render_widget(status_line(pane.status.message()), chunks[3]);

    let hints = match pane.focus {
        ComparisonFocus::Input(_) => key_hints(&[
            ("Tab", "next"),
            ("Ctrl-R", "process"),
            ("Esc", "close"),
        ]),
        ComparisonFocus::Table(_) => key_hints(&[
            ("←/→", "column"),
            ("Enter", "click"),
            ("n/N", "next/prev duplicate"),
            ("c/a/b", "copy"),
            ("Esc", "close"),
        ]),
    };
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &ListComparison, focus: ComparisonFocus) {
    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    for (table, rect) in [(TableId::A, halves[0]), (TableId::B, halves[1])] {
        render_text_input(
            frame,
            rect,
            table.name(),
            app.input(table),
            focus == ComparisonFocus::Input(table),
        );
    }
}

fn render_controls(frame: &mut Frame, area: Rect, pane: &ComparisonPane) {
    let copy = [CopyTarget::Common, CopyTarget::UniqueToA, CopyTarget::UniqueToB]
        .iter()
        .zip(["c", "a", "b"])
        .flat_map(|(target, key)| {
            [
                Span::styled(format!(" {key}"), Styles::help_key()),
                Span::styled(format!(" {} ", target.label()), Styles::help()),
            ]
        });

    let mut spans = vec![
        Span::styled(" ▲ prev", Styles::control(pane.can_up)),
        Span::raw("  "),
        Span::styled("▼ next", Styles::control(pane.can_down)),
        Span::raw("   "),
    ];
    spans.extend(copy);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, pane: &mut ComparisonPane, table: TableId) {
    let focused = pane.focus == ComparisonFocus::Table(table);
    let cursor = pane.cursor_row(table).filter(|_| focused);
    let highlighted = pane.highlighted;
    let column = pane.column;

    let header = Row::new(vec![
        Cell::from("#").style(Styles::table_header()),
        Cell::from("Value").style(Styles::table_header()),
    ])
    .style(Styles::table_header());

    let rows: Vec<Row> = pane
        .rows(table)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let base = if row.is_common {
                Styles::common()
            } else {
                Styles::default()
            };
            let at_cursor = cursor == Some(i);

            let index_style = if at_cursor && column == Column::Index {
                Styles::selected()
            } else {
                Styles::dim()
            };
            let value_style = if highlighted == Some(CellRef::new(table, i)) {
                Styles::highlight()
            } else if at_cursor && column == Column::Value {
                base.patch(Styles::selected())
            } else {
                base
            };

            Row::new(vec![
                Cell::from(row.index.to_string()).style(index_style),
                Cell::from(row.value.clone()).style(value_style),
            ])
        })
        .collect();

    let title = format!("{} ({})", table.name(), pane.rows(table).len());
    let widget = Table::new(rows, [Constraint::Length(5), Constraint::Fill(1)])
        .header(header)
        .block(field_block(&title, focused))
        .column_spacing(1);

    frame.render_stateful_widget(widget, area, pane.table_state_mut(table));
}
