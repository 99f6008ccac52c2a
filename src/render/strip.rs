//! Strip: a horizontal line of styled terminal cells.
//!
//! A `Strip` is the fundamental rendering primitive in pinboard. It represents
//! a single horizontal row of `StyledCell`s that pages and components produce
//! and the screen buffer places into the frame grid.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are crossterm [`Color`] values; attributes are plain flags. The
/// default style is "no color, no attributes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color (builder).
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the bold attribute (builder).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the dim attribute (builder).
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Set the underline attribute (builder).
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set the reverse-video attribute (builder).
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells.
///
/// Each Strip represents one row (at a given y position) starting at
/// `x_offset`. Pages produce strips; the screen buffer places them into the
/// frame grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// The row this strip occupies (0-based from top of frame).
    pub y: i32,
    /// Starting x position for this strip's cells.
    pub x_offset: i32,
    /// The cells in left-to-right order.
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// Build a strip at row `y` containing `text` in the given style.
    pub fn line(y: i32, text: &str, style: CellStyle) -> Self {
        let mut strip = Strip::new(y, 0);
        strip.push_str(text, style);
        strip
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style));
        }
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Pad the strip to exactly `width` cells using spaces with the given
    /// style. If the strip is already wider than `width`, it is truncated.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell { ch: ' ', style });
        } else if self.cells.len() > w {
            self.cells.truncate(w);
        }
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
