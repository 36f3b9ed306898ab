//! Game session controller.
//!
//! The session owns the turn history and the player registry exclusively.
//! Presentational collaborators (board widgets, name editors, the move
//! log) read the derived views and feed events back through
//! [`GameSession::select_square`], [`GameSession::restart`], and
//! [`GameSession::rename_player`].

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::players::PlayerRegistry;
use crate::position::{Position, PositionError};
use crate::rules;
use crate::turn::{Turn, TurnHistory};
use crate::types::{Board, GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// A single two-player game session.
///
/// Board, active player, winner name, and draw status are all projections
/// of the turn history and registry, recomputed on every read; the stored
/// [`GameStatus`] is kept in step with the history after each mutation and
/// never diverges from what the history derives.
#[derive(Debug, Clone)]
pub struct GameSession {
    history: TurnHistory,
    players: PlayerRegistry,
    status: GameStatus,
}

impl GameSession {
    /// Creates a session with an empty history and default player names.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game session");
        Self {
            history: TurnHistory::new(),
            players: PlayerRegistry::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the current board, projected from the turn history.
    pub fn board(&self) -> Board {
        rules::project(&self.history)
    }

    /// Returns the mark whose turn is next.
    pub fn active_player(&self) -> Mark {
        rules::active_player(&self.history)
    }

    /// Returns the winner's display name, if a line is complete.
    ///
    /// The name is resolved through the registry at read time, so a
    /// rename after the winning move is reflected here.
    pub fn winner_name(&self) -> Option<String> {
        rules::check_winner(&self.board()).map(|mark| self.players.name(mark).to_string())
    }

    /// Checks whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Returns the display name for a mark.
    pub fn player_name(&self, mark: Mark) -> &str {
        self.players.name(mark)
    }

    /// Returns the recorded turns, newest first.
    pub fn history(&self) -> &[Turn] {
        self.history.turns()
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Handles a square selection from the board collaborator.
    ///
    /// Records a turn for the active player and re-evaluates the status.
    /// Selecting an occupied square or selecting after the game has ended
    /// is a silent no-op; the UI disables those controls rather than
    /// raising.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::InvalidPosition`] if the coordinates fall
    /// outside the 3x3 board.
    #[instrument(skip(self))]
    pub fn select_square(&mut self, row: usize, column: usize) -> Result<(), PositionError> {
        let position = Position::new(row, column)?;

        if self.status != GameStatus::InProgress {
            debug!(status = ?self.status, "Selection ignored, game is over");
            return Ok(());
        }
        if !self.board().is_empty(position) {
            debug!(%position, "Selection ignored, square is occupied");
            return Ok(());
        }

        let player = self.active_player();
        self.history.record(Turn::new(player, position));
        self.update_status();
        debug_assert!(HistoryInvariants::check_all(&self.history).is_ok());

        info!(%player, %position, status = ?self.status, "Recorded turn");
        Ok(())
    }

    /// Restarts the game: clears the history, keeps the registry.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.clear();
        self.status = GameStatus::InProgress;
        info!("Session restarted");
    }

    /// Renames the player using the given mark.
    ///
    /// The registry is independent of the history: renaming never touches
    /// the board or the win/draw status. Empty names are accepted and
    /// degrade display only; collaborators enforce non-empty input.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, mark: Mark, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            warn!(%mark, "Registering empty player name");
        }
        info!(%mark, name = %name, "Renaming player");
        self.players.set_name(mark, name);
    }

    /// Re-derives the status from the history after a mutation.
    fn update_status(&mut self) {
        let board = rules::project(&self.history);
        self.status = if let Some(winner) = rules::check_winner(&board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
