//! A thin table engine: column schema in, header group and row models out.
//!
//! Deliberately small. Cell content is produced through a [`CellRenderer`]
//! variant keyed by the column, so new rendering modes (formatted, computed)
//! can be added without touching callers; today every column is an identity
//! passthrough. No sorting, filtering, or pagination.

// ---------------------------------------------------------------------------
// CellRenderer
// ---------------------------------------------------------------------------

/// How a column turns a row into cell text.
pub enum CellRenderer<R> {
    /// Pass the accessed value through unchanged.
    Identity(fn(&R) -> String),
}

impl<R> CellRenderer<R> {
    /// Render one cell for the given row.
    pub fn render(&self, row: &R) -> String {
        match self {
            CellRenderer::Identity(accessor) => accessor(row),
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// A column definition: identifier, header label, and cell renderer.
pub struct Column<R> {
    pub id: &'static str,
    pub header: &'static str,
    pub renderer: CellRenderer<R>,
}

impl<R> Column<R> {
    /// An identity-passthrough column.
    pub fn identity(id: &'static str, header: &'static str, accessor: fn(&R) -> String) -> Self {
        Self {
            id,
            header,
            renderer: CellRenderer::Identity(accessor),
        }
    }
}

// ---------------------------------------------------------------------------
// Header and row models
// ---------------------------------------------------------------------------

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
}

/// One rendered row: cell text in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A table view over borrowed data and columns.
pub struct Table<'a, R> {
    data: &'a [R],
    columns: &'a [Column<R>],
}

impl<'a, R> Table<'a, R> {
    /// Create a table over the given rows and columns.
    pub fn new(data: &'a [R], columns: &'a [Column<R>]) -> Self {
        Self { data, columns }
    }

    /// The header group: one cell per column, in column order.
    pub fn header_group(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|col| HeaderCell {
                id: col.id,
                label: col.header,
            })
            .collect()
    }

    /// The row models: one per data row, cells in column order.
    pub fn rows(&self) -> Vec<RowModel> {
        self.data
            .iter()
            .map(|row| RowModel {
                cells: self
                    .columns
                    .iter()
                    .map(|col| col.renderer.render(row))
                    .collect(),
            })
            .collect()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
