use std::fmt;

use super::line::{Line, Orientation};
use super::player::Player;
use crate::error::BoardError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Smallest width or height on which a four-in-a-row fits.
pub const MIN_SIZE: usize = 4;

/// Largest width or height accepted for a board.
pub const MAX_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Character used for this cell when rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, row 0 at the top
    cells: Vec<Cell>,
    last_move: Option<(usize, usize)>,
    moves: usize,
}

impl Board {
    /// Create a new empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let size_ok = |n: usize| (MIN_SIZE..=MAX_SIZE).contains(&n);
        let cell_count = width
            .checked_mul(height)
            .filter(|_| size_ok(width) && size_ok(height))
            .ok_or(BoardError::InvalidDimensions { width, height })?;

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
            last_move: None,
            moves: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Position `(row, col)` of the most recently placed token
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Number of tokens placed so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.moves == self.width * self.height
    }

    /// Columns that can still take a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= self.width {
            return Err(BoardError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        // Find the lowest empty row in this column
        let row = (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(BoardError::ColumnFull(col))?;

        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        self.last_move = Some((row, col));
        self.moves += 1;
        Ok(row)
    }

    /// Check if the most recent move completed a four-in-a-row
    pub fn is_winning_move(&self) -> Result<bool, BoardError> {
        let (row, col) = self.last_move.ok_or(BoardError::NoMoveYet)?;
        let token = self.get(row, col);

        Ok(Orientation::ALL
            .iter()
            .any(|&orientation| self.line_through(row, col, orientation).has_four(token)))
    }

    /// The line in `orientation` through the most recent move
    pub fn line(&self, orientation: Orientation) -> Result<Line, BoardError> {
        let (row, col) = self.last_move.ok_or(BoardError::NoMoveYet)?;
        Ok(self.line_through(row, col, orientation))
    }

    /// Collect the cells of the line through `(row, col)`, top row first,
    /// skipping positions that fall outside the board.
    pub fn line_through(&self, row: usize, col: usize, orientation: Orientation) -> Line {
        if orientation == Orientation::Horizontal {
            return (0..self.width).map(|c| self.get(row, c)).collect();
        }

        (0..self.height)
            .filter_map(|r| {
                let c = orientation.column_at(row, col, r)?;
                (0..self.width as isize)
                    .contains(&c)
                    .then(|| self.get(r, c as usize))
            })
            .collect()
    }

    /// Column index header followed by one line per row, top to bottom
    pub fn render(&self) -> String {
        let cell_width = (self.width - 1).to_string().len();
        let sep = if cell_width == 1 { "" } else { " " };

        let header = (0..self.width)
            .map(|col| format!("{:>w$}", col, w = cell_width))
            .collect::<Vec<_>>()
            .join(sep);

        let rows = (0..self.height).map(|row| {
            (0..self.width)
                .map(|col| format!("{:>w$}", self.get(row, col).symbol(), w = cell_width))
                .collect::<Vec<_>>()
                .join(sep)
        });

        std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            cells: vec![Cell::Empty; DEFAULT_COLS * DEFAULT_ROWS],
            last_move: None,
            moves: 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
