//! The turn history: the single source of truth for a session.
//!
//! Turns are domain events, not side effects. They are serializable for
//! the move-log collaborator and replayable into every derived view.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One recorded move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The player who moved.
    pub player: Mark,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Turn {
    /// Creates a new turn.
    #[instrument]
    pub fn new(player: Mark, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player who made this turn.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// Returns the position of this turn.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Append-ordered record of turns, newest first.
///
/// Invariants (checked by [`crate::invariants::HistoryInvariants`]):
/// at most 9 turns, no two turns share a position, and marks strictly
/// alternate with the chronologically first turn always X.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnHistory {
    turns: Vec<Turn>,
}

impl TurnHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a turn at the front of the history.
    ///
    /// The caller binds `turn.player` to the current active player; the
    /// history itself does not validate alternation.
    #[instrument(skip(self))]
    pub fn record(&mut self, turn: Turn) {
        self.turns.insert(0, turn);
    }

    /// Clears the history.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Returns the number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Checks whether no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the recorded turns, newest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Iterates over the recorded turns, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(player: Mark, row: usize, column: usize) -> Turn {
        Turn::new(player, Position::new(row, column).unwrap())
    }

    #[test]
    fn test_record_prepends() {
        let mut history = TurnHistory::new();
        history.record(turn(Mark::X, 0, 0));
        history.record(turn(Mark::O, 1, 1));

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].player(), Mark::O);
        assert_eq!(history.turns()[1].player(), Mark::X);
    }

    #[test]
    fn test_clear_empties() {
        let mut history = TurnHistory::new();
        history.record(turn(Mark::X, 2, 2));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_turn_log_line() {
        let t = turn(Mark::X, 0, 2);
        assert_eq!(t.to_string(), "X -> (0, 2)");
    }
}
