//! First-class invariants over the turn history.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees; the session checks them in debug builds after every
//! mutation.

use crate::turn::TurnHistory;
use crate::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: marks strictly alternate, starting with X.
///
/// Walking the history in chronological order (oldest last, since the
/// log is newest-first) must yield X, O, X, O, ...
pub struct AlternatingTurns;

impl Invariant<TurnHistory> for AlternatingTurns {
    fn holds(history: &TurnHistory) -> bool {
        let mut expected = Mark::X;
        for turn in history.turns().iter().rev() {
            if turn.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "marks alternate starting with X"
    }
}

/// Invariant: no two turns share a position.
pub struct UniquePositions;

impl Invariant<TurnHistory> for UniquePositions {
    fn holds(history: &TurnHistory) -> bool {
        let mut seen = [false; 9];
        for turn in history.iter() {
            let index = turn.position().index();
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    fn description() -> &'static str {
        "no two turns share a position"
    }
}

/// Invariant: the history never exceeds the 9 squares of the board.
pub struct BoundedHistory;

impl Invariant<TurnHistory> for BoundedHistory {
    fn holds(history: &TurnHistory) -> bool {
        history.len() <= 9
    }

    fn description() -> &'static str {
        "history holds at most 9 turns"
    }
}

/// All turn-history invariants as a composable set.
pub type HistoryInvariants = (AlternatingTurns, UniquePositions, BoundedHistory);
