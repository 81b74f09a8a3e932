//! Duplicate navigation across the two comparison tables.
//!
//! At most one cell is highlighted at a time. The cursor caches the nearest
//! equal-valued rows above and below it in its own table; those drive the
//! up/down controls.

use super::table::{CellRef, TableId, Tables};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Highlighted cell plus its nearest same-value neighbours (row indices in
/// the cell's own table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub cell: CellRef,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Cursor {
    pub fn prev_cell(&self) -> Option<CellRef> {
        self.prev.map(|row| CellRef::new(self.cell.table, row))
    }

    pub fn next_cell(&self) -> Option<CellRef> {
        self.next.map(|row| CellRef::new(self.cell.table, row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Idle,
    Highlighted(Cursor),
}

/// Outcome of an interaction that moved the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub cursor: Cursor,
    /// Whether the host should scroll the cell into view.
    pub scroll: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        match &self.state {
            NavState::Idle => None,
            NavState::Highlighted(cursor) => Some(cursor),
        }
    }

    pub fn highlighted(&self) -> Option<CellRef> {
        self.cursor().map(|c| c.cell)
    }

    /// Up is enabled iff a previous duplicate exists, down iff a next one does.
    pub fn can_navigate(&self, direction: Direction) -> bool {
        self.cursor().is_some_and(|c| match direction {
            Direction::Up => c.prev.is_some(),
            Direction::Down => c.next.is_some(),
        })
    }

    /// Back to idle. Called whenever the lists are reprocessed.
    pub fn reset(&mut self) {
        self.state = NavState::Idle;
    }

    /// Index cell click: highlights the value cell of the same row.
    pub fn click_index(&mut self, tables: &Tables, cell: CellRef) -> Option<Highlight> {
        tables.value(cell)?;
        Some(Highlight {
            cursor: self.highlight(tables, cell),
            scroll: false,
        })
    }

    /// Value cell click: jumps to the first equal value in the other table,
    /// or highlights the clicked cell when the other table has none.
    pub fn click_value(&mut self, tables: &Tables, cell: CellRef) -> Option<Highlight> {
        let value = tables.value(cell)?;
        let target = cell.table.other();

        let found = tables
            .rows(target)
            .iter()
            .position(|row| row.value == value)
            .map(|row| CellRef::new(target, row));

        let highlight = match found {
            Some(matched) => Highlight {
                cursor: self.highlight(tables, matched),
                scroll: true,
            },
            None => Highlight {
                cursor: self.highlight(tables, cell),
                scroll: false,
            },
        };
        Some(highlight)
    }

    /// Moves to the cached previous/next duplicate. No-op when disabled.
    pub fn navigate(&mut self, tables: &Tables, direction: Direction) -> Option<Highlight> {
        let cursor = *self.cursor()?;
        let target = match direction {
            Direction::Up => cursor.prev_cell(),
            Direction::Down => cursor.next_cell(),
        }?;
        Some(Highlight {
            cursor: self.highlight(tables, target),
            scroll: true,
        })
    }

    fn highlight(&mut self, tables: &Tables, cell: CellRef) -> Cursor {
        let cursor = Cursor {
            cell,
            prev: find_duplicate(tables, cell, Direction::Up),
            next: find_duplicate(tables, cell, Direction::Down),
        };
        self.state = NavState::Highlighted(cursor);
        cursor
    }
}

/// Nearest row strictly before/after `cell` in its own table with an equal value.
fn find_duplicate(tables: &Tables, cell: CellRef, direction: Direction) -> Option<usize> {
    let rows = tables.rows(cell.table);
    let value = &rows.get(cell.row)?.value;
    match direction {
        Direction::Up => rows[..cell.row].iter().rposition(|r| &r.value == value),
        Direction::Down => rows[cell.row + 1..]
            .iter()
            .position(|r| &r.value == value)
            .map(|i| cell.row + 1 + i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::table::render_rows;

    fn tables(a: &[&str], b: &[&str]) -> Tables {
        let a: Vec<String> = a.iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = b.iter().map(|s| s.to_string()).collect();
        let common: Vec<String> = a.iter().filter(|v| b.contains(v)).cloned().collect();
        Tables {
            a: render_rows(&a, &common),
            b: render_rows(&b, &common),
        }
    }

    #[test]
    fn test_self_fallback_then_navigate_down() {
        let t = tables(&["p", "q", "p"], &["z"]);
        let mut nav = Navigator::new();

        let h = nav.click_value(&t, CellRef::new(TableId::A, 0)).unwrap();
        assert_eq!(h.cursor.cell, CellRef::new(TableId::A, 0));
        assert!(!h.scroll);
        assert_eq!(h.cursor.prev, None);
        assert_eq!(h.cursor.next, Some(2));
        assert!(!nav.can_navigate(Direction::Up));
        assert!(nav.can_navigate(Direction::Down));

        let h = nav.navigate(&t, Direction::Down).unwrap();
        assert_eq!(h.cursor.cell, CellRef::new(TableId::A, 2));
        assert!(h.scroll);
        assert_eq!(h.cursor.prev, Some(0));
        assert_eq!(h.cursor.next, None);
        assert!(nav.can_navigate(Direction::Up));
        assert!(!nav.can_navigate(Direction::Down));
    }

    #[test]
    fn test_value_click_jumps_to_first_match_in_other_table() {
        let t = tables(&["k", "m"], &["x", "k", "y", "k"]);
        let mut nav = Navigator::new();

        let h = nav.click_value(&t, CellRef::new(TableId::A, 0)).unwrap();
        assert_eq!(h.cursor.cell, CellRef::new(TableId::B, 1));
        assert!(h.scroll);
        assert_eq!(h.cursor.prev, None);
        assert_eq!(h.cursor.next, Some(3));

        // Clicking in B jumps back into A.
        let h = nav.click_value(&t, CellRef::new(TableId::B, 3)).unwrap();
        assert_eq!(h.cursor.cell, CellRef::new(TableId::A, 0));
        assert_eq!(nav.highlighted(), Some(CellRef::new(TableId::A, 0)));
    }

    #[test]
    fn test_index_click_highlights_same_row_without_searching() {
        let t = tables(&["k"], &["k"]);
        let mut nav = Navigator::new();

        let h = nav.click_index(&t, CellRef::new(TableId::A, 0)).unwrap();
        assert_eq!(h.cursor.cell, CellRef::new(TableId::A, 0));
        assert!(!h.scroll);
    }

    #[test]
    fn test_navigate_when_disabled_is_noop() {
        let t = tables(&["a", "b"], &["c"]);
        let mut nav = Navigator::new();
        assert!(nav.navigate(&t, Direction::Down).is_none());

        nav.click_value(&t, CellRef::new(TableId::A, 1));
        assert!(nav.navigate(&t, Direction::Up).is_none());
        assert!(nav.navigate(&t, Direction::Down).is_none());
        assert_eq!(nav.highlighted(), Some(CellRef::new(TableId::A, 1)));
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let t = tables(&["a"], &["b"]);
        let mut nav = Navigator::new();
        assert!(nav.click_value(&t, CellRef::new(TableId::B, 5)).is_none());
        assert!(nav.click_index(&t, CellRef::new(TableId::A, 9)).is_none());
        assert_eq!(nav.state(), NavState::Idle);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let t = tables(&["a", "a"], &["b"]);
        let mut nav = Navigator::new();
        nav.click_value(&t, CellRef::new(TableId::A, 0));
        assert!(nav.can_navigate(Direction::Down));

        nav.reset();
        assert_eq!(nav.state(), NavState::Idle);
        assert!(!nav.can_navigate(Direction::Up));
        assert!(!nav.can_navigate(Direction::Down));
    }

    #[test]
    fn test_middle_duplicate_has_both_neighbours() {
        let t = tables(&["d", "x", "d", "y", "d"], &["q"]);
        let mut nav = Navigator::new();
        let h = nav.click_index(&t, CellRef::new(TableId::A, 2)).unwrap();
        assert_eq!(h.cursor.prev, Some(0));
        assert_eq!(h.cursor.next, Some(4));
    }
}
