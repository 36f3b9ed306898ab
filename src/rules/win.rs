//! Win detection.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines as row-major board indices. The only data that
/// defines "win".
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks the board for a completed line.
///
/// Scans all 8 lines; a later complete line overwrites an earlier one,
/// so under simultaneously complete lines (unreachable through
/// alternating play) the last line in table order decides the winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    let mut winner = None;

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            winner = match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn occupy(board: &mut Board, mark: Mark, cells: &[(usize, usize)]) {
        for &(row, column) in cells {
            board.set(
                Position::new(row, column).unwrap(),
                Square::Occupied(mark),
            );
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        occupy(&mut board, Mark::O, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        occupy(&mut board, Mark::O, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[(0, 0), (0, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_last_complete_line_wins() {
        // Injected state with two complete lines: X on the top row,
        // O on the bottom row. The bottom row comes later in the table.
        let mut board = Board::new();
        occupy(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        occupy(&mut board, Mark::O, &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
