//! Screen buffer: the frame grid pages render into.
//!
//! [`ScreenBuffer`] holds a `width` x `height` grid of [`StyledCell`]s.
//! Strips are overlaid onto the grid, two buffers can be diffed into a batch
//! of [`CellUpdate`]s for the driver, and the grid can be dumped to plain
//! text for assertions. Blankness of the grid doubles as the mount guard:
//! a buffer that already holds content is considered mounted.

use super::strip::{Strip, StyledCell};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell change to apply to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

// ---------------------------------------------------------------------------
// ScreenBuffer
// ---------------------------------------------------------------------------

/// A rectangular grid of styled cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    pub width: u16,
    pub height: u16,
    cells: Vec<StyledCell>,
}

impl ScreenBuffer {
    /// Create a blank buffer of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![StyledCell::blank(); width as usize * height as usize],
        }
    }

    /// Resize the buffer, clearing all content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![StyledCell::blank(); width as usize * height as usize];
    }

    /// Reset every cell to blank without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(StyledCell::blank());
    }

    /// Whether every cell is still the blank default.
    ///
    /// This is the mount-idempotency check: a buffer with any rendered
    /// content is treated as already mounted.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == StyledCell::blank())
    }

    /// The cell at (x, y), if in bounds.
    pub fn cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Overlay a strip onto the grid. Cells outside the bounds are dropped.
    pub fn place_strip(&mut self, strip: &Strip) {
        if strip.y < 0 || strip.y >= self.height as i32 {
            return;
        }
        let row = strip.y as usize * self.width as usize;
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 || x >= self.width as i32 {
                continue;
            }
            self.cells[row + x as usize] = *cell;
        }
    }

    /// Overlay every strip in order.
    pub fn place_strips(&mut self, strips: &[Strip]) {
        for strip in strips {
            self.place_strip(strip);
        }
    }

    /// Diff against a previous frame, producing the updates that turn
    /// `prev` into `self`. Buffers of different dimensions produce a full
    /// repaint of `self`.
    pub fn diff(&self, prev: &ScreenBuffer) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        let full = self.width != prev.width || self.height != prev.height;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let cell = self.cells[idx];
                if full || prev.cells[idx] != cell {
                    updates.push(CellUpdate { x, y, cell });
                }
            }
        }
        updates
    }

    /// Dump the grid to plain text: one line per row, trailing spaces
    /// trimmed, rows joined with `'\n'`.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.height as usize);
        for y in 0..self.height {
            let row = y as usize * self.width as usize;
            let line: String = self.cells[row..row + self.width as usize]
                .iter()
                .map(|c| c.ch)
                .collect();
            lines.push(line.trim_end().to_owned());
        }
        lines.join("\n")
    }
}

// ===========================================================================
// Tests
// ===========================================================================
