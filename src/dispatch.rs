//! Shared input dispatch for modal layers and global shortcuts.
//!
//! Every overlay (an open app, the calculator, help, the note editor, ...)
//! registers a [`Layer`] on one stack. Keys go to the top layer, Escape
//! closes it, and dashboard shortcuts only fire when the stack is empty.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::apps::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    App(AppId),
    Calculator,
    NoteEditor,
    BookmarkForm,
    /// Blocking message that must be acknowledged.
    Alert,
    Help,
    QuitConfirm,
}

/// Shortcuts available on the bare dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// A digit opens the calculator and starts a new entry with it.
    OpenCalculator(char),
    Help,
    Quit,
}

/// Where a key event should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Handled by the top layer.
    Layer(Layer),
    /// Escape closed this layer.
    Closed(Layer),
    Shortcut(Shortcut),
    /// No layer is open and the key is not a global shortcut.
    Dashboard,
}

#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    stack: Vec<Layer>,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `layer` on top. A layer that is already open moves to the top.
    pub fn push(&mut self, layer: Layer) {
        self.stack.retain(|l| *l != layer);
        self.stack.push(layer);
        debug!(?layer, depth = self.stack.len(), "layer opened");
    }

    pub fn pop(&mut self) -> Option<Layer> {
        let layer = self.stack.pop();
        if let Some(layer) = layer {
            debug!(?layer, depth = self.stack.len(), "layer closed");
        }
        layer
    }

    /// Removes `layer` wherever it is in the stack.
    pub fn remove(&mut self, layer: Layer) -> bool {
        let before = self.stack.len();
        self.stack.retain(|l| *l != layer);
        before != self.stack.len()
    }

    pub fn top(&self) -> Option<Layer> {
        self.stack.last().copied()
    }

    pub fn is_open(&self, layer: Layer) -> bool {
        self.stack.contains(&layer)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.stack
    }

    /// Routes `key`. Escape is consumed here by closing the top layer.
    pub fn dispatch(&mut self, key: &KeyEvent) -> Dispatch {
        if key.code == KeyCode::Esc
            && let Some(layer) = self.pop()
        {
            return Dispatch::Closed(layer);
        }
        if let Some(layer) = self.top() {
            return Dispatch::Layer(layer);
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Dispatch::Dashboard;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                Dispatch::Shortcut(Shortcut::OpenCalculator(c))
            }
            KeyCode::Char('?') => Dispatch::Shortcut(Shortcut::Help),
            KeyCode::Char('q') | KeyCode::Char('Q') => Dispatch::Shortcut(Shortcut::Quit),
            _ => Dispatch::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts_only_without_layers() {
        let mut d = InputDispatcher::new();
        assert_eq!(
            d.dispatch(&key(KeyCode::Char('7'))),
            Dispatch::Shortcut(Shortcut::OpenCalculator('7'))
        );
        assert_eq!(
            d.dispatch(&key(KeyCode::Char('?'))),
            Dispatch::Shortcut(Shortcut::Help)
        );
        assert_eq!(
            d.dispatch(&key(KeyCode::Char('q'))),
            Dispatch::Shortcut(Shortcut::Quit)
        );
        assert_eq!(d.dispatch(&key(KeyCode::Char('f'))), Dispatch::Dashboard);

        d.push(Layer::App(AppId::ListComparison));
        assert_eq!(
            d.dispatch(&key(KeyCode::Char('7'))),
            Dispatch::Layer(Layer::App(AppId::ListComparison))
        );
    }

    #[test]
    fn test_escape_closes_top_layer_only() {
        let mut d = InputDispatcher::new();
        d.push(Layer::App(AppId::ListFormatter));
        d.push(Layer::Calculator);

        assert_eq!(d.dispatch(&key(KeyCode::Esc)), Dispatch::Closed(Layer::Calculator));
        assert_eq!(d.top(), Some(Layer::App(AppId::ListFormatter)));
        assert_eq!(
            d.dispatch(&key(KeyCode::Esc)),
            Dispatch::Closed(Layer::App(AppId::ListFormatter))
        );
        assert!(d.is_empty());
        assert_eq!(d.dispatch(&key(KeyCode::Esc)), Dispatch::Dashboard);
    }

    #[test]
    fn test_push_existing_layer_moves_to_top() {
        let mut d = InputDispatcher::new();
        d.push(Layer::Help);
        d.push(Layer::Calculator);
        d.push(Layer::Help);
        assert_eq!(d.layers(), &[Layer::Calculator, Layer::Help]);

        assert!(d.remove(Layer::Calculator));
        assert!(!d.remove(Layer::Calculator));
        assert!(d.is_open(Layer::Help));
    }

    #[test]
    fn test_control_digit_is_not_a_shortcut() {
        let mut d = InputDispatcher::new();
        let ctrl = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert_eq!(d.dispatch(&ctrl), Dispatch::Dashboard);
    }
}
