//! Text rendering of a grid.
//!
//! Each cell is drawn as a block of its value character. Blocks are
//! separated by one-character gutters which are filled in only where the
//! neighbouring cells hold the same value, so regions read as solid areas.
//!
//! ```text
//!  ---------------
//! |               |
//! |  11111 22222  |
//! |  11111 22222  |
//! |  11111 22222  |
//! |  11111        |
//! |  11111111111  |
//! |  11111111111  |
//! |  11111111111  |
//! |               |
//!  ---------------
//! ```

use crate::grid::{Cell, Grid};
use std::fmt;

const BLOCK_WIDTH: usize = 5;
const BLOCK_HEIGHT: usize = 3;

/// Character used to draw a cell value: digits, then lowercase letters.
fn cell_char(value: Cell) -> char {
    char::from_digit(value, 36).unwrap_or('#')
}

impl Grid {
    fn render_line(&self, row: usize) -> String {
        let out_width = (BLOCK_WIDTH + 1) * self.width() - 1;
        let (y, inner_y) = (row / (BLOCK_HEIGHT + 1), row % (BLOCK_HEIGHT + 1));
        let is_gutter_row = inner_y == BLOCK_HEIGHT;

        (0..out_width)
            .map(|col| {
                let (x, inner_x) = (col / (BLOCK_WIDTH + 1), col % (BLOCK_WIDTH + 1));
                let is_gutter_col = inner_x == BLOCK_WIDTH;
                let value = self.get(x, y);

                let right = || x + 1 < self.width() && self.get(x + 1, y) == value;
                let below = || y + 1 < self.height() && self.get(x, y + 1) == value;

                let connected = match (is_gutter_col, is_gutter_row) {
                    (false, false) => true,
                    (true, false) => right(),
                    (false, true) => below(),
                    (true, true) => right() && below() && self.get(x + 1, y + 1) == value,
                };

                if connected {
                    cell_char(value)
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out_width = (BLOCK_WIDTH + 1) * self.width() - 1;
        let out_height = (BLOCK_HEIGHT + 1) * self.height() - 1;

        let border = "-".repeat(out_width + 4);
        let padding = " ".repeat(out_width + 4);

        writeln!(f, " {border} ")?;
        writeln!(f, "|{padding}|")?;
        for row in 0..out_height {
            writeln!(f, "|  {}  |", self.render_line(row))?;
        }
        writeln!(f, "|{padding}|")?;
        writeln!(f, " {border} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_free_cell() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(
            grid.to_string(),
            concat!(
                " --------- \n",
                "|         |\n",
                "|  00000  |\n",
                "|  00000  |\n",
                "|  00000  |\n",
                "|         |\n",
                " --------- \n",
            )
        );
    }

    #[test]
    fn regions_merge_across_gutters() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.region_write(1, [(0, 0), (0, 1), (1, 1)]);
        grid.region_write(2, [(1, 0)]);

        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[2], "|  11111 22222  |");
        assert_eq!(lines[5], "|  11111        |");
        assert_eq!(lines[6], "|  11111111111  |");
    }

    #[test]
    fn full_corner_merges() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.region_write(3, [(0, 0), (1, 0), (0, 1), (1, 1)]);
        let rendered = grid.to_string();
        assert!(rendered.lines().skip(2).take(7).all(|line| line == "|  33333333333  |"));
    }

    #[test]
    fn large_labels_use_letters() {
        assert_eq!(cell_char(9), '9');
        assert_eq!(cell_char(10), 'a');
        assert_eq!(cell_char(35), 'z');
        assert_eq!(cell_char(36), '#');
    }
}
