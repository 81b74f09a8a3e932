//! Input handling and keybindings.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::apps::{AnalyzerField, AppId, FormatterField};
use crate::comparison::{CellRef, CopyTarget, Direction, TableId};
use crate::dispatch::{Dispatch, Layer, Shortcut};
use crate::text_input::TextInput;
use crate::widgets::{BookmarkField, Operator};

use super::state::{AppState, Column, ComparisonFocus, Pane};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// "Run" chord shared by every app: `Ctrl-R` or `F5`.
fn is_run(key: &KeyEvent) -> bool {
    is_ctrl(key, 'r') || key.code == KeyCode::F(5)
}

/// Applies a text-editing key to `input`. Returns `true` if the key was an
/// editing key.
fn edit_text(input: &mut TextInput, key: &KeyEvent, multiline: bool) -> bool {
    match key.code {
        KeyCode::Char(c) if is_plain(key) => input.insert_char(c),
        KeyCode::Enter if multiline => input.insert_char('\n'),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl(&key, 'c') {
        return KeyAction::Quit;
    }

    match state.dispatcher.dispatch(&key) {
        Dispatch::Closed(layer) => {
            on_layer_closed(state, layer);
            KeyAction::None
        }
        Dispatch::Layer(layer) => handle_layer(state, layer, key),
        Dispatch::Shortcut(shortcut) => {
            match shortcut {
                Shortcut::OpenCalculator(digit) => {
                    state.calculator.start_with(digit);
                    state.dispatcher.push(Layer::Calculator);
                }
                Shortcut::Help => {
                    state.help_scroll = 0;
                    state.dispatcher.push(Layer::Help);
                }
                Shortcut::Quit => state.dispatcher.push(Layer::QuitConfirm),
            }
            KeyAction::None
        }
        Dispatch::Dashboard => {
            handle_dashboard(state, key);
            KeyAction::None
        }
    }
}

/// Inserts pasted text into whatever text field has focus.
pub fn handle_paste(state: &mut AppState, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    match state.dispatcher.top() {
        Some(Layer::App(AppId::ListComparison)) => {
            if let ComparisonFocus::Input(table) = state.comparison.focus
                && let Some(app) = state.apps.comparison_mut()
            {
                app.input_mut(table).insert_str(&text);
            }
        }
        Some(Layer::App(AppId::ListFormatter)) => {
            if let Some(app) = state.apps.formatter_mut() {
                app.focused_input().insert_str(&text);
            }
        }
        Some(Layer::App(AppId::DuplicatesAnalyzer)) => {
            if let Some(input) = state.apps.analyzer_mut().and_then(|a| a.focused_input()) {
                input.insert_str(&text);
            }
        }
        Some(Layer::NoteEditor) => state.notes.edit(Instant::now(), |e| e.insert_str(&text)),
        Some(Layer::BookmarkForm) => {
            let single_line = text.replace('\n', " ");
            state.bookmark_form.focused_input().insert_str(&single_line);
        }
        _ => {}
    }
}

fn on_layer_closed(state: &mut AppState, layer: Layer) {
    match layer {
        Layer::App(id) => state.apps.close(id),
        Layer::NoteEditor => state.notes.flush(Instant::now()),
        Layer::BookmarkForm => state.bookmark_form = Default::default(),
        Layer::Alert => state.alert = None,
        Layer::Calculator | Layer::Help | Layer::QuitConfirm => {}
    }
}

fn handle_layer(state: &mut AppState, layer: Layer, key: KeyEvent) -> KeyAction {
    match layer {
        Layer::QuitConfirm => return handle_quit_confirm(state, key),
        Layer::Alert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.dispatcher.pop();
                state.alert = None;
            }
        }
        Layer::Help => handle_help(state, key),
        Layer::Calculator => handle_calculator(state, key),
        Layer::NoteEditor => handle_note_editor(state, key),
        Layer::BookmarkForm => handle_bookmark_form(state, key),
        Layer::App(AppId::ListComparison) => handle_comparison(state, key),
        Layer::App(AppId::ListFormatter) => handle_formatter(state, key),
        Layer::App(AppId::DuplicatesAnalyzer) => handle_analyzer(state, key),
    }
    KeyAction::None
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.dispatcher.pop();
            KeyAction::Quit
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            state.dispatcher.pop();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Char('q') => {
            state.dispatcher.pop();
        }
        KeyCode::Up | KeyCode::Char('k') => state.help_scroll = state.help_scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1)
        }
        KeyCode::PageUp => state.help_scroll = state.help_scroll.saturating_sub(10),
        KeyCode::PageDown => state.help_scroll = state.help_scroll.saturating_add(10),
        KeyCode::Home => state.help_scroll = 0,
        _ => {}
    }
}

fn handle_calculator(state: &mut AppState, key: KeyEvent) {
    let calc = &mut state.calculator;
    match key.code {
        KeyCode::Enter | KeyCode::Char('=') => calc.equals(),
        KeyCode::Char('c') | KeyCode::Char('C') => calc.clear(),
        KeyCode::Char('n') => calc.toggle_sign(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => calc.input(c),
        KeyCode::Char(c) => {
            if let Some(op) = Operator::from_key(c) {
                calc.operator(op);
            }
        }
        _ => {}
    }
}

fn handle_dashboard(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => state.pane = state.pane.next(),
        KeyCode::BackTab => state.pane = state.pane.prev(),
        KeyCode::Char('f') => {
            state.clock.format = state.clock.format.toggle();
            state.save_clock_prefs();
        }
        KeyCode::Char('s') => {
            state.clock.show_seconds = !state.clock.show_seconds;
            state.save_clock_prefs();
        }
        _ => match state.pane {
            Pane::Apps => handle_apps_pane(state, key),
            Pane::Notes => {
                if key.code == KeyCode::Enter {
                    state.dispatcher.push(Layer::NoteEditor);
                }
            }
            Pane::Bookmarks => handle_bookmarks_pane(state, key),
        },
    }
}

fn handle_apps_pane(state: &mut AppState, key: KeyEvent) {
    let count = AppId::all().len();
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            state.app_cursor = state.app_cursor.saturating_sub(1)
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
            state.app_cursor = (state.app_cursor + 1).min(count - 1)
        }
        KeyCode::Enter => {
            if let Some(id) = AppId::all().get(state.app_cursor).copied() {
                state.open_app(id);
            }
        }
        _ => {}
    }
}

fn handle_bookmarks_pane(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.bookmark_cursor = state.bookmark_cursor.saturating_sub(1)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.bookmark_cursor + 1 < state.bookmarks.len() {
                state.bookmark_cursor += 1;
            }
        }
        KeyCode::Enter => {
            let index = state.bookmark_cursor;
            let message = match state.bookmarks.activate(index, state.clipboard.as_mut()) {
                Ok(Some(url)) => format!("Copied {url}"),
                Ok(None) => return,
                Err(e) => {
                    warn!(error = %e, "failed to copy bookmark");
                    "Failed to copy to clipboard".to_string()
                }
            };
            state.show_status(message);
        }
        KeyCode::Char('a') => {
            state.bookmark_form = Default::default();
            state.dispatcher.push(Layer::BookmarkForm);
        }
        KeyCode::Char('e') => state.bookmarks.toggle_edit_mode(),
        KeyCode::Char('d') | KeyCode::Delete => {
            match state.bookmarks.delete(state.bookmark_cursor) {
                Ok(_) => state.clamp_bookmark_cursor(),
                Err(e) => {
                    warn!(error = %e, "failed to save bookmarks");
                    state.show_status("Error saving bookmarks");
                }
            }
        }
        _ => {}
    }
}

fn handle_note_editor(state: &mut AppState, key: KeyEvent) {
    let now = Instant::now();
    if key.code == KeyCode::Enter {
        state.notes.enter(now);
    } else {
        state.notes.edit(now, |editor| {
            edit_text(editor, &key, false);
        });
    }
}

fn handle_bookmark_form(state: &mut AppState, key: KeyEvent) {
    let form = &mut state.bookmark_form;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Enter if form.focus == BookmarkField::Name => form.toggle_focus(),
        KeyCode::Enter => {
            if form.submit(&mut state.bookmarks) {
                state.dispatcher.pop();
                state.bookmark_cursor = state.bookmarks.len().saturating_sub(1);
                state.show_status("Bookmark added");
            }
        }
        _ => {
            form.error = None;
            edit_text(form.focused_input(), &key, false);
        }
    }
}

fn handle_comparison(state: &mut AppState, key: KeyEvent) {
    let Some(app) = state.apps.comparison_mut() else {
        return;
    };
    let pane = &mut state.comparison;

    if is_run(&key) {
        if app.process(pane).is_ok() {
            pane.focus = ComparisonFocus::Table(TableId::A);
        }
    } else {
        match key.code {
            KeyCode::Tab => pane.focus = pane.focus.next(),
            KeyCode::BackTab => pane.focus = pane.focus.prev(),
            _ => match pane.focus {
                ComparisonFocus::Input(table) => {
                    edit_text(app.input_mut(table), &key, true);
                }
                ComparisonFocus::Table(table) => match key.code {
                    KeyCode::Up | KeyCode::Char('k') => pane.cursor_up(table),
                    KeyCode::Down | KeyCode::Char('j') => pane.cursor_down(table),
                    KeyCode::Left | KeyCode::Char('h') => pane.column = Column::Index,
                    KeyCode::Right | KeyCode::Char('l') => pane.column = Column::Value,
                    KeyCode::Enter => {
                        if let Some(row) = pane.cursor_row(table) {
                            let cell = CellRef::new(table, row);
                            match pane.column {
                                Column::Index => app.click_index(cell, pane),
                                Column::Value => app.click_value(cell, pane),
                            }
                        }
                    }
                    KeyCode::Char('n') | KeyCode::Char(']') => {
                        app.navigate(Direction::Down, pane)
                    }
                    KeyCode::Char('N') | KeyCode::Char('[') => app.navigate(Direction::Up, pane),
                    KeyCode::Char('c') => {
                        app.copy(CopyTarget::Common, state.clipboard.as_mut(), pane)
                    }
                    KeyCode::Char('a') => {
                        app.copy(CopyTarget::UniqueToA, state.clipboard.as_mut(), pane)
                    }
                    KeyCode::Char('b') => {
                        app.copy(CopyTarget::UniqueToB, state.clipboard.as_mut(), pane)
                    }
                    _ => {}
                },
            },
        }
    }

    if let Some(message) = state.comparison.take_alert() {
        state.raise_alert(message);
    }
}

fn handle_formatter(state: &mut AppState, key: KeyEvent) {
    let Some(app) = state.apps.formatter_mut() else {
        return;
    };
    let in_list_section = matches!(app.focus, FormatterField::List | FormatterField::Separator);

    if is_run(&key) {
        if in_list_section {
            app.convert_and_copy(state.clipboard.as_mut());
        } else {
            app.convert_csv_to_list(state.clipboard.as_mut());
        }
        info!(to_csv = in_list_section, "formatter conversion");
        return;
    }
    if is_ctrl(&key, 'd') {
        app.remove_duplicates = !app.remove_duplicates;
        return;
    }
    if is_ctrl(&key, 'e') {
        if in_list_section {
            app.enclosure = app.enclosure.toggle();
        } else {
            app.csv_enclosure = app.csv_enclosure.toggle();
        }
        return;
    }
    match key.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        _ => {
            let multiline = matches!(app.focus, FormatterField::List | FormatterField::Csv);
            edit_text(app.focused_input(), &key, multiline);
        }
    }
}

fn handle_analyzer(state: &mut AppState, key: KeyEvent) {
    let Some(app) = state.apps.analyzer_mut() else {
        return;
    };

    if is_run(&key) {
        match app.focus {
            AnalyzerField::Input | AnalyzerField::Separator => app.check(),
            AnalyzerField::Groups | AnalyzerField::JoinSeparator => app.finalize(),
        }
    } else if is_ctrl(&key, 'f') {
        app.copy_frequency(state.clipboard.as_mut());
    } else if is_ctrl(&key, 'a') {
        app.copy_all(state.clipboard.as_mut());
    } else if key.code == KeyCode::Tab {
        app.focus = app.focus.next();
    } else if app.focus == AnalyzerField::Groups {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.select_up(),
            KeyCode::Down | KeyCode::Char('j') => app.select_down(),
            KeyCode::Char(' ') => app.toggle_group(),
            KeyCode::Enter => app.finalize(),
            _ => {}
        }
    } else {
        let multiline = app.focus == AnalyzerField::Input;
        if let Some(input) = app.focused_input() {
            edit_text(input, &key, multiline);
        }
    }

    if let Some(message) = state.apps.analyzer_mut().and_then(|a| a.alert.take()) {
        state.raise_alert(message);
    }
}
