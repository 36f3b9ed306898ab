//! Player display names, editable independently of the game.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Registry of display names, exactly one per mark.
///
/// Created with defaults at session start and mutated by rename events
/// only. Restarting the game does not reset it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the default names.
    pub fn new() -> Self {
        Self {
            x: "Player 1".to_string(),
            o: "Player 2".to_string(),
        }
    }

    /// Returns the display name for a mark.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Sets the display name for a mark.
    pub fn set_name(&mut self, mark: Mark, name: impl Into<String>) {
        match mark {
            Mark::X => self.x = name.into(),
            Mark::O => self.o = name.into(),
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults_present_for_every_mark() {
        let registry = PlayerRegistry::new();
        for mark in Mark::iter() {
            assert!(!registry.name(mark).is_empty());
        }
        assert_eq!(registry.name(Mark::X), "Player 1");
        assert_eq!(registry.name(Mark::O), "Player 2");
    }

    #[test]
    fn test_rename_one_mark_only() {
        let mut registry = PlayerRegistry::new();
        registry.set_name(Mark::X, "Alice");
        assert_eq!(registry.name(Mark::X), "Alice");
        assert_eq!(registry.name(Mark::O), "Player 2");
    }
}
