//! Pure derivations from the turn history.
//!
//! Every view the session exposes is a total function of the history:
//! the board, the active player, the winner, and fullness. None of these
//! functions mutate shared state or cache results.

mod active;
mod draw;
mod project;
mod win;

pub use active::active_player;
pub use draw::is_full;
pub use project::project;
pub use win::check_winner;
