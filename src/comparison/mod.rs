//! List comparison component.
//!
//! Takes two free-text lists, computes common values and values unique to
//! each side, renders two aligned tables and lets the user cycle through
//! repeated occurrences of a value with a single highlighted cell.
//!
//! Drawing is delegated to a host-provided [`ComparisonView`], so the whole
//! component runs without a terminal in tests.

mod compare;
mod navigator;
mod parse;
mod table;

pub use compare::{CompareError, Comparison, compare};
pub use navigator::{Cursor, Direction, Highlight, NavState, Navigator};
pub use parse::parse_list;
pub use table::{CellRef, TableId, TableRow, Tables, render_rows};

use tracing::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::text_input::TextInput;

/// How a message should be surfaced by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Must be acknowledged before continuing (validation failures).
    Blocking,
    /// Shown briefly, then cleared.
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn blocking(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Blocking,
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Transient,
            message: message.into(),
        }
    }
}

/// Render interface implemented by the host.
pub trait ComparisonView {
    /// Replaces the rows of one table.
    fn render_table(&mut self, table: TableId, rows: &[TableRow]);
    /// Sets the single highlighted cell, clearing any other highlight.
    fn highlight(&mut self, cell: Option<CellRef>);
    /// Brings a cell into view.
    fn scroll_to(&mut self, cell: CellRef);
    /// Enables or disables the navigate-up / navigate-down controls.
    fn set_controls(&mut self, up_enabled: bool, down_enabled: bool);
    fn notify(&mut self, notice: Notice);
}

/// Which computed sequence a copy action takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Common,
    UniqueToA,
    UniqueToB,
}

impl CopyTarget {
    pub fn label(self) -> &'static str {
        match self {
            CopyTarget::Common => "Copy Common Values",
            CopyTarget::UniqueToA => "Copy A-B",
            CopyTarget::UniqueToB => "Copy B-A",
        }
    }
}

/// List comparison component. One instance per container.
#[derive(Debug, Default)]
pub struct ListComparison {
    input_a: TextInput,
    input_b: TextInput,
    result: Option<Comparison>,
    tables: Tables,
    navigator: Navigator,
}

impl ListComparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, table: TableId) -> &TextInput {
        match table {
            TableId::A => &self.input_a,
            TableId::B => &self.input_b,
        }
    }

    pub fn input_mut(&mut self, table: TableId) -> &mut TextInput {
        match table {
            TableId::A => &mut self.input_a,
            TableId::B => &mut self.input_b,
        }
    }

    pub fn result(&self) -> Option<&Comparison> {
        self.result.as_ref()
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Parses both inputs, compares them and renders both tables.
    ///
    /// On a validation failure the previous render is left untouched and a
    /// blocking notice is raised. On success all navigation state is reset.
    pub fn process(&mut self, view: &mut dyn ComparisonView) -> Result<(), CompareError> {
        let list_a = parse_list(self.input_a.text());
        let list_b = parse_list(self.input_b.text());

        let result = match compare(&list_a, &list_b) {
            Ok(result) => result,
            Err(e) => {
                debug!(a = list_a.len(), b = list_b.len(), "comparison rejected");
                view.notify(Notice::blocking(e.to_string()));
                return Err(e);
            }
        };

        self.tables = Tables {
            a: render_rows(&list_a, &result.common),
            b: render_rows(&list_b, &result.common),
        };
        view.render_table(TableId::A, &self.tables.a);
        view.render_table(TableId::B, &self.tables.b);

        self.navigator.reset();
        view.highlight(None);
        view.set_controls(false, false);

        info!(
            a = list_a.len(),
            b = list_b.len(),
            common = result.common.len(),
            "lists processed"
        );
        self.result = Some(result);
        Ok(())
    }

    pub fn click_index(&mut self, cell: CellRef, view: &mut dyn ComparisonView) {
        if let Some(h) = self.navigator.click_index(&self.tables, cell) {
            self.publish(h, view);
        }
    }

    pub fn click_value(&mut self, cell: CellRef, view: &mut dyn ComparisonView) {
        if let Some(h) = self.navigator.click_value(&self.tables, cell) {
            self.publish(h, view);
        }
    }

    pub fn navigate(&mut self, direction: Direction, view: &mut dyn ComparisonView) {
        if let Some(h) = self.navigator.navigate(&self.tables, direction) {
            self.publish(h, view);
        }
    }

    /// Newline-joins the chosen sequence and writes it to the clipboard.
    /// Failures are reported to the user only.
    pub fn copy(
        &self,
        target: CopyTarget,
        clipboard: &mut dyn Clipboard,
        view: &mut dyn ComparisonView,
    ) {
        let items: &[String] = match (&self.result, target) {
            (None, _) => &[],
            (Some(r), CopyTarget::Common) => &r.common,
            (Some(r), CopyTarget::UniqueToA) => &r.unique_to_a,
            (Some(r), CopyTarget::UniqueToB) => &r.unique_to_b,
        };

        if items.is_empty() {
            view.notify(Notice::transient("No items to copy."));
            return;
        }

        let notice = match clipboard.write_text(&items.join("\n")) {
            Ok(()) => Notice::transient(format!("Copied {} items to clipboard!", items.len())),
            Err(e) => {
                warn!(error = %e, ?target, "copy failed");
                Notice::transient("Failed to copy to clipboard. Please try again.")
            }
        };
        view.notify(notice);
    }

    fn publish(&self, highlight: Highlight, view: &mut dyn ComparisonView) {
        let cell = highlight.cursor.cell;
        view.highlight(Some(cell));
        if highlight.scroll {
            view.scroll_to(cell);
        }
        view.set_controls(
            self.navigator.can_navigate(Direction::Up),
            self.navigator.can_navigate(Direction::Down),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[derive(Default)]
    struct RecordingView {
        tables: Vec<(TableId, Vec<TableRow>)>,
        highlighted: Option<CellRef>,
        scrolled: Vec<CellRef>,
        controls: (bool, bool),
        notices: Vec<Notice>,
    }

    impl ComparisonView for RecordingView {
        fn render_table(&mut self, table: TableId, rows: &[TableRow]) {
            self.tables.push((table, rows.to_vec()));
        }

        fn highlight(&mut self, cell: Option<CellRef>) {
            self.highlighted = cell;
        }

        fn scroll_to(&mut self, cell: CellRef) {
            self.scrolled.push(cell);
        }

        fn set_controls(&mut self, up_enabled: bool, down_enabled: bool) {
            self.controls = (up_enabled, down_enabled);
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    fn component(a: &str, b: &str) -> ListComparison {
        let mut c = ListComparison::new();
        c.input_mut(TableId::A).set_text(a);
        c.input_mut(TableId::B).set_text(b);
        c
    }

    #[test]
    fn process_renders_both_tables() {
        let mut c = component("a\nb", "b, c");
        let mut view = RecordingView::default();
        c.process(&mut view).unwrap();

        assert_eq!(view.tables.len(), 2);
        let (id, rows) = &view.tables[1];
        assert_eq!(*id, TableId::B);
        assert_eq!(rows[0].value, "b");
        assert!(rows[0].is_common);
        assert!(!rows[1].is_common);

        let result = c.result().unwrap();
        assert_eq!(result.common, vec!["b"]);
        assert_eq!(result.unique_to_a, vec!["a"]);
        assert_eq!(result.unique_to_b, vec!["c"]);
    }

    #[test]
    fn empty_list_blocks_and_keeps_previous_render() {
        let mut c = component("a", "a");
        let mut view = RecordingView::default();
        c.process(&mut view).unwrap();

        c.input_mut(TableId::B).clear();
        assert_eq!(c.process(&mut view), Err(CompareError::EmptyList));
        assert_eq!(view.tables.len(), 2);
        assert_eq!(c.tables().b.len(), 1);
        assert_eq!(
            view.notices.last(),
            Some(&Notice::blocking("Please enter values for both lists."))
        );
    }

    #[test]
    fn duplicate_navigation_scenario() {
        let mut c = component("p\nq\np", "z");
        let mut view = RecordingView::default();
        c.process(&mut view).unwrap();

        c.click_value(CellRef::new(TableId::A, 0), &mut view);
        assert_eq!(view.highlighted, Some(CellRef::new(TableId::A, 0)));
        assert_eq!(view.controls, (false, true));
        assert!(view.scrolled.is_empty());

        c.navigate(Direction::Down, &mut view);
        assert_eq!(view.highlighted, Some(CellRef::new(TableId::A, 2)));
        assert_eq!(view.scrolled, vec![CellRef::new(TableId::A, 2)]);
        assert_eq!(view.controls, (true, false));
        let cursor = c.navigator().cursor().unwrap();
        assert_eq!(cursor.prev, Some(0));
        assert_eq!(cursor.next, None);
    }

    #[test]
    fn reprocess_clears_highlight_and_controls() {
        let mut c = component("p\np", "p");
        let mut view = RecordingView::default();
        c.process(&mut view).unwrap();
        c.click_index(CellRef::new(TableId::A, 0), &mut view);
        assert_eq!(view.controls, (false, true));

        c.process(&mut view).unwrap();
        assert_eq!(view.highlighted, None);
        assert_eq!(view.controls, (false, false));
        assert_eq!(c.navigator().state(), NavState::Idle);
    }

    #[test]
    fn copy_reports_count_and_failures() {
        let mut c = component("x\ny\nx", "x");
        let mut view = RecordingView::default();
        let mut clipboard = MemoryClipboard::new();

        c.copy(CopyTarget::Common, &mut clipboard, &mut view);
        assert_eq!(view.notices[0].message, "No items to copy.");

        c.process(&mut view).unwrap();
        c.copy(CopyTarget::Common, &mut clipboard, &mut view);
        assert_eq!(clipboard.contents.as_deref(), Some("x\nx"));
        assert_eq!(
            view.notices.last().unwrap().message,
            "Copied 2 items to clipboard!"
        );

        c.copy(CopyTarget::UniqueToB, &mut clipboard, &mut view);
        assert_eq!(view.notices.last().unwrap().message, "No items to copy.");

        let mut broken = MemoryClipboard::failing();
        c.copy(CopyTarget::UniqueToA, &mut broken, &mut view);
        assert_eq!(
            view.notices.last().unwrap(),
            &Notice::transient("Failed to copy to clipboard. Please try again.")
        );
        assert!(c.result().is_some());
    }
}
