use super::board::Cell;

/// Number of consecutive identical tokens needed to win.
pub const WIN_LENGTH: usize = 4;

/// The four directions a winning line can run through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The full row
    Horizontal,
    /// The full column
    Vertical,
    /// Bottom-left to top-right, cells with a constant `row + col`
    Slash,
    /// Top-left to bottom-right, cells with a constant `col - row`
    Backslash,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Slash,
        Orientation::Backslash,
    ];

    /// Column reached by this line at `r`, for the line through `(row, col)`.
    /// `None` for horizontal lines, which stay on a single row.
    pub(crate) fn column_at(self, row: usize, col: usize, r: usize) -> Option<isize> {
        let (row, col, r) = (row as isize, col as isize, r as isize);
        match self {
            Orientation::Horizontal => None,
            Orientation::Vertical => Some(col),
            Orientation::Slash => Some(row + col - r),
            Orientation::Backslash => Some(col - row + r),
        }
    }
}

/// An ordered run of cells along one orientation, top row first.
///
/// Positions that fall off the board are skipped rather than padded, so a
/// diagonal near a corner may hold fewer cells than the board is tall.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    pub fn new(cells: Vec<Cell>) -> Self {
        Line { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if the line holds `len` consecutive cells equal to `token`.
    /// An empty token never forms a run.
    pub fn has_run(&self, token: Cell, len: usize) -> bool {
        if token == Cell::Empty || len == 0 {
            return false;
        }
        self.cells
            .windows(len)
            .any(|window| window.iter().all(|&cell| cell == token))
    }

    /// True if the line holds a four-in-a-row of `token`.
    pub fn has_four(&self, token: Cell) -> bool {
        self.has_run(token, WIN_LENGTH)
    }
}

impl FromIterator<Cell> for Line {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Line::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell::{Empty, Red, Yellow};

    #[test]
    fn test_empty_line_has_no_run() {
        let line = Line::default();
        assert!(line.is_empty());
        assert!(!line.has_four(Red));
    }

    #[test]
    fn test_short_lines_never_win() {
        for len in 1..WIN_LENGTH {
            let line: Line = std::iter::repeat(Red).take(len).collect();
            assert!(!line.has_four(Red), "length {} should not win", len);
        }
    }

    #[test]
    fn test_exact_four() {
        let line = Line::new(vec![Red, Red, Red, Red]);
        assert!(line.has_four(Red));
        assert!(!line.has_four(Yellow));
    }

    #[test]
    fn test_run_must_be_consecutive() {
        let line = Line::new(vec![Red, Red, Yellow, Red, Red, Empty, Red]);
        assert!(!line.has_four(Red));
        assert!(line.has_run(Red, 2));
    }

    #[test]
    fn test_run_at_end_of_line() {
        let line = Line::new(vec![Empty, Yellow, Red, Red, Red, Red]);
        assert!(line.has_four(Red));
    }

    #[test]
    fn test_empty_token_never_matches() {
        let line = Line::new(vec![Empty; 6]);
        assert!(!line.has_four(Empty));
    }

    #[test]
    fn test_diagonal_columns() {
        // Through (2, 3): slash keeps row + col = 5, backslash keeps col - row = 1
        assert_eq!(Orientation::Slash.column_at(2, 3, 0), Some(5));
        assert_eq!(Orientation::Slash.column_at(2, 3, 5), Some(0));
        assert_eq!(Orientation::Backslash.column_at(2, 3, 0), Some(1));
        assert_eq!(Orientation::Backslash.column_at(2, 3, 5), Some(6));
        assert_eq!(Orientation::Vertical.column_at(2, 3, 4), Some(3));
        assert_eq!(Orientation::Horizontal.column_at(2, 3, 4), None);
    }
}
