//! Active player resolution.

use crate::turn::TurnHistory;
use crate::types::Mark;
use tracing::instrument;

/// Resolves whose turn it is from the turn count.
///
/// X moves on even counts (including the empty history), O on odd. This
/// parity rule agrees with inspecting the chronologically first turn on
/// every valid history.
#[instrument(skip(history))]
pub fn active_player(history: &TurnHistory) -> Mark {
    if history.len() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}
