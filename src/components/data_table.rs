//! DataTable: the fixed Person dataset rendered as a bordered table.
//!
//! Owns the two-row seed dataset and the five-column schema and feeds both
//! to the table engine on every render. Purely presentational: no sorting,
//! filtering, or pagination is wired up.

use crossterm::style::Color;

use crate::render::strip::{CellStyle, Strip};
use crate::table::{Column, HeaderCell, RowModel, Table};

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A display-only table row. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub visits: i64,
    pub status: String,
}

/// The fixed seed dataset.
fn default_data() -> Vec<Person> {
    vec![
        Person {
            first_name: "John".into(),
            last_name: "Doe".into(),
            age: 30,
            visits: 5,
            status: "Active".into(),
        },
        Person {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            age: 25,
            visits: 3,
            status: "Inactive".into(),
        },
    ]
}

/// The five-column schema, in display order. Every cell renderer passes the
/// raw value through unchanged.
fn default_columns() -> Vec<Column<Person>> {
    vec![
        Column::identity("firstName", "First Name", |p| p.first_name.clone()),
        Column::identity("lastName", "Last Name", |p| p.last_name.clone()),
        Column::identity("age", "Age", |p| p.age.to_string()),
        Column::identity("visits", "Visits", |p| p.visits.to_string()),
        Column::identity("status", "Status", |p| p.status.clone()),
    ]
}

// ---------------------------------------------------------------------------
// DataTable
// ---------------------------------------------------------------------------

/// The users table component.
pub struct DataTable {
    data: Vec<Person>,
    columns: Vec<Column<Person>>,
}

impl DataTable {
    /// Create the table with the seed dataset and default columns.
    pub fn new() -> Self {
        Self {
            data: default_data(),
            columns: default_columns(),
        }
    }

    /// The header cells, in column order.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        Table::new(&self.data, &self.columns).header_group()
    }

    /// The body rows, cells in column order.
    pub fn body_rows(&self) -> Vec<RowModel> {
        Table::new(&self.data, &self.columns).rows()
    }

    /// Render the table as strips starting at row `y`. Returns the strips
    /// and the number of rows consumed.
    pub fn render(&self, y: i32) -> Vec<Strip> {
        let table = Table::new(&self.data, &self.columns);
        let headers = table.header_group();
        let rows = table.rows();

        // Column widths: max of header and all cells.
        let mut widths: Vec<usize> = headers.iter().map(|h| h.label.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border_style = CellStyle::new().dim();
        let header_style = CellStyle::new().fg(Color::White).bold();
        let cell_style = CellStyle::new();

        let separator = {
            let mut text = String::from("+");
            for w in &widths {
                text.push_str(&"-".repeat(w + 2));
                text.push('+');
            }
            text
        };

        let mut strips = Vec::new();
        let mut row_y = y;

        strips.push(Strip::line(row_y, &separator, border_style));
        row_y += 1;

        let mut header_strip = Strip::new(row_y, 0);
        for (header, w) in headers.iter().zip(&widths) {
            header_strip.push_str("| ", border_style);
            header_strip.push_str(header.label, header_style);
            let pad = w - header.label.chars().count() + 1;
            header_strip.push_str(&" ".repeat(pad), cell_style);
        }
        header_strip.push_str("|", border_style);
        strips.push(header_strip);
        row_y += 1;

        strips.push(Strip::line(row_y, &separator, border_style));
        row_y += 1;

        for row in &rows {
            let mut strip = Strip::new(row_y, 0);
            for (cell, w) in row.cells.iter().zip(&widths) {
                strip.push_str("| ", border_style);
                strip.push_str(cell, cell_style);
                let pad = w - cell.chars().count() + 1;
                strip.push_str(&" ".repeat(pad), cell_style);
            }
            strip.push_str("|", border_style);
            strips.push(strip);
            row_y += 1;
        }

        strips.push(Strip::line(row_y, &separator, border_style));
        strips
    }

    /// Number of terminal rows the rendered table occupies.
    pub fn rendered_height(&self) -> i32 {
        // Top border, header, header border, one row per person, bottom border.
        3 + self.data.len() as i32 + 1
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
