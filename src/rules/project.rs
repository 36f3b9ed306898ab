//! Board projection from the turn history.

use crate::turn::TurnHistory;
use crate::types::{Board, Square};
use tracing::instrument;

/// Projects the turn history onto a fresh board.
///
/// Every call starts from a new empty board, so the result is an
/// independent value. Positions in a valid history are unique, so the
/// order of application does not matter.
#[instrument(skip(history))]
pub fn project(history: &TurnHistory) -> Board {
    let mut board = Board::new();
    for turn in history.iter() {
        board.set(turn.position(), Square::Occupied(turn.player()));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::turn::Turn;
    use crate::types::Mark;

    #[test]
    fn test_empty_history_projects_empty_board() {
        assert_eq!(project(&TurnHistory::new()), Board::new());
    }

    #[test]
    fn test_each_turn_lands_on_its_square() {
        let mut history = TurnHistory::new();
        history.record(Turn::new(Mark::X, Position::new(0, 0).unwrap()));
        history.record(Turn::new(Mark::O, Position::new(2, 1).unwrap()));

        let board = project(&history);
        assert_eq!(
            board.get(Position::new(0, 0).unwrap()),
            Square::Occupied(Mark::X)
        );
        assert_eq!(
            board.get(Position::new(2, 1).unwrap()),
            Square::Occupied(Mark::O)
        );
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        assert_eq!(occupied, history.len());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let mut history = TurnHistory::new();
        history.record(Turn::new(Mark::X, Position::new(1, 1).unwrap()));
        assert_eq!(project(&history), project(&history));
    }
}
