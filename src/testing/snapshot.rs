//! Snapshot rendering helpers.
//!
//! Converts rendered strips into plain-text strings suitable for assertions.

use crate::render::strip::Strip;

/// Convert strips to a plain text string.
///
/// Builds a grid just large enough for the strips, overlays each strip's
/// cells at its (x, y) position, right-trims each row, and joins rows with
/// `'\n'`.
pub fn strips_to_string(strips: &[Strip]) -> String {
    let height = strips.iter().map(|s| s.y + 1).max().unwrap_or(0).max(0) as usize;
    let width = strips.iter().map(Strip::right).max().unwrap_or(0).max(0) as usize;
    if width == 0 || height == 0 {
        return String::new();
    }

    let mut grid: Vec<Vec<char>> = vec![vec![' '; width]; height];
    for strip in strips {
        if strip.y < 0 {
            continue;
        }
        let row = strip.y as usize;
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 {
                continue;
            }
            grid[row][x as usize] = cell.ch;
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(strips_to_string(&[]), "");
    }

    #[test]
    fn strips_land_on_their_rows() {
        let strips = vec![
            Strip::line(0, "top", CellStyle::default()),
            Strip::line(2, "bottom", CellStyle::default()),
        ];
        assert_eq!(strips_to_string(&strips), "top\n\nbottom");
    }

    #[test]
    fn respects_x_offset() {
        let mut strip = Strip::new(0, 3);
        strip.push_str("hi", CellStyle::default());
        assert_eq!(strips_to_string(&[strip]), "   hi");
    }
}
