//! Single-session two-player tic-tac-toe core.
//!
//! The turn history is the single source of truth: the board, the active
//! player, the winner, and the draw status are pure projections of it,
//! recomputed on every read so they can never desynchronize. Player
//! display names live in a separate registry that rename events mutate
//! and restart leaves alone.
//!
//! Rendering, name editing, and move-log display are external
//! collaborators; they read the derived views from [`GameSession`] and
//! feed events back into it.
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{GameSession, Mark, PositionError};
//!
//! # fn main() -> Result<(), PositionError> {
//! let mut session = GameSession::new();
//! assert_eq!(session.active_player(), Mark::X);
//!
//! session.select_square(0, 0)?;
//! assert_eq!(session.active_player(), Mark::O);
//! assert_eq!(session.history().len(), 1);
//!
//! session.rename_player(Mark::X, "Alice");
//! assert_eq!(session.player_name(Mark::X), "Alice");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod players;
mod position;
mod rules;
mod session;
mod turn;
mod types;

pub mod invariants;

// Public API surface
pub use players::PlayerRegistry;
pub use position::{Position, PositionError};
pub use rules::{active_player, check_winner, is_full, project};
pub use session::GameSession;
pub use turn::{Turn, TurnHistory};
pub use types::{Board, GameStatus, Mark, Square};
