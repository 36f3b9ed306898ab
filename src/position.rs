//! Board positions addressed by row and column.

use serde::{Deserialize, Serialize};

/// A position on the 3x3 board.
///
/// Constructed only through [`Position::new`], so a `Position` in hand
/// is always in range. Rows and columns are counted from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    column: u8,
}

/// Error returned for coordinates outside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// Row or column is outside `0..3`.
    #[display("position ({row}, {column}) is outside the 3x3 board")]
    InvalidPosition {
        /// The requested row.
        row: usize,
        /// The requested column.
        column: usize,
    },
}

impl Position {
    /// Creates a position from row and column indices.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::InvalidPosition`] if either index is
    /// outside `0..3`.
    pub fn new(row: usize, column: usize) -> Result<Self, PositionError> {
        if row >= 3 || column >= 3 {
            return Err(PositionError::InvalidPosition { row, column });
        }
        Ok(Self {
            row: row as u8,
            column: column as u8,
        })
    }

    const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns the row index (0-2).
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Returns the column index (0-2).
    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// Converts the position to a row-major board index (0-8).
    pub fn index(&self) -> usize {
        self.row() * 3 + self.column()
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_positions() {
        for row in 0..3 {
            for column in 0..3 {
                let pos = Position::new(row, column).unwrap();
                assert_eq!(pos.row(), row);
                assert_eq!(pos.column(), column);
            }
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(3, 0),
            Err(PositionError::InvalidPosition { row: 3, column: 0 })
        );
        assert_eq!(
            Position::new(0, 7),
            Err(PositionError::InvalidPosition { row: 0, column: 7 })
        );
    }

    #[test]
    fn test_row_major_index() {
        assert_eq!(Position::new(0, 0).unwrap().index(), 0);
        assert_eq!(Position::new(1, 1).unwrap().index(), 4);
        assert_eq!(Position::new(2, 2).unwrap().index(), 8);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }
}
