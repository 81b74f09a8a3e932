//! Rendered comparison tables.

use serde::Serialize;

/// Identity of a rendered table. Value cells carry it so the navigator can
/// find "the other table".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableId {
    A,
    B,
}

impl TableId {
    pub fn other(self) -> TableId {
        match self {
            TableId::A => TableId::B,
            TableId::B => TableId::A,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TableId::A => "List A",
            TableId::B => "List B",
        }
    }
}

/// One table row: 1-based index, value, and whether it is a common value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub value: String,
    pub is_common: bool,
}

/// Position of a value cell: table plus zero-based row (header excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub table: TableId,
    pub row: usize,
}

impl CellRef {
    pub fn new(table: TableId, row: usize) -> Self {
        Self { table, row }
    }
}

/// Builds the rows for one list. `common` decides the bold/coloured flag.
pub fn render_rows(list: &[String], common: &[String]) -> Vec<TableRow> {
    list.iter()
        .enumerate()
        .map(|(i, value)| TableRow {
            index: i + 1,
            value: value.clone(),
            is_common: common.contains(value),
        })
        .collect()
}

/// Both rendered tables, as last produced by a successful process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub a: Vec<TableRow>,
    pub b: Vec<TableRow>,
}

impl Tables {
    pub fn rows(&self, table: TableId) -> &[TableRow] {
        match table {
            TableId::A => &self.a,
            TableId::B => &self.b,
        }
    }

    pub fn value(&self, cell: CellRef) -> Option<&str> {
        self.rows(cell.table)
            .get(cell.row)
            .map(|row| row.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }
}
