//! Dashboard panes: apps grid, note and bookmarks.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::apps::AppId;
use crate::dispatch::Layer;
use crate::tui::state::{AppState, Pane};
use crate::tui::style::Styles;

use super::common::{field_block, key_hints, render_text_input};

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);
    let left = Layout::vertical([
        Constraint::Length(AppId::all().len() as u16 * 2 + 2),
        Constraint::Min(5),
    ])
    .split(columns[0]);

    render_apps(frame, left[0], state);
    render_notes(frame, left[1], state);
    render_bookmarks(frame, columns[1], state);
}

fn render_apps(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.pane == Pane::Apps;
    let items: Vec<ListItem> = AppId::all()
        .iter()
        .map(|id| {
            let def = id.definition();
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", def.icon)),
                    Span::styled(def.name, Styles::section_header()),
                ]),
                Line::from(Span::styled(format!("   {}", def.description), Styles::dim())),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.app_cursor));
    }
    let list = List::new(items)
        .block(field_block("Apps", focused))
        .highlight_style(Styles::selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_notes(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.dispatcher.is_open(Layer::NoteEditor);
    let focused = state.pane == Pane::Notes || editing;
    let title = match state.notes.status() {
        Some(status) => format!("Notes · {status}"),
        None => "Notes".to_string(),
    };

    if editing {
        render_text_input(frame, area, &title, state.notes.editor(), true);
        return;
    }
    let notes = Paragraph::new(state.notes.text().to_string())
        .block(field_block(&title, focused))
        .wrap(Wrap { trim: false });
    frame.render_widget(notes, area);
}

fn render_bookmarks(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.pane == Pane::Bookmarks;
    let store = &state.bookmarks;
    let title = if store.edit_mode() {
        "Bookmarks ✓ editing"
    } else {
        "Bookmarks"
    };
    let block = field_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    if store.is_empty() {
        frame.render_widget(
            Paragraph::new("No bookmarks added yet").style(Styles::dim()),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = store
            .bookmarks()
            .iter()
            .map(|b| {
                let mut spans = vec![
                    Span::styled(format!("[{}] ", b.initial()), Styles::section_header()),
                    Span::raw(b.name.clone()),
                    Span::styled(format!("  {}", b.url), Styles::dim()),
                ];
                if store.edit_mode() {
                    spans.push(Span::styled("  ×", Styles::error()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.bookmark_cursor));
        }
        let list = List::new(items).highlight_style(Styles::selected());
        frame.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    if focused {
        let hints = if store.edit_mode() {
            key_hints(&[("d", "delete"), ("e", "done")])
        } else {
            key_hints(&[("Enter", "copy URL"), ("a", "add"), ("e", "edit")])
        };
        frame.render_widget(Paragraph::new(hints), chunks[1]);
    }
}
