//! Action representation: everything a tap on the table can do.
//!
//! The UI translates input into a `LifeAction` and hands it to the
//! dispatcher. Actions are plain data so they can be logged and replayed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Direction of a custom ±N delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    /// Apply the sign to a magnitude.
    ///
    /// ```
    /// use life_counter::core::Sign;
    ///
    /// assert_eq!(Sign::Minus.apply(3), -3);
    /// assert_eq!(Sign::Plus.apply(3), 3);
    /// ```
    #[must_use]
    pub const fn apply(self, amount: i64) -> i64 {
        match self {
            Sign::Minus => amount.saturating_neg(),
            Sign::Plus => amount,
        }
    }
}

/// A complete session action.
///
/// ## Example
///
/// ```
/// use life_counter::core::{LifeAction, PlayerId, Sign};
///
/// let hit = LifeAction::ChangeLife { player: PlayerId::new(0), delta: -5 };
/// let custom = LifeAction::CustomDelta {
///     player: PlayerId::new(1),
///     sign: Sign::Plus,
///     input: "3".to_string(),
/// };
/// assert!(hit.is_life_change());
/// assert!(custom.is_life_change());
/// assert!(!LifeAction::Reset.is_life_change());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeAction {
    /// Seat a new player (only before the game starts).
    AddPlayer,

    /// Add a signed delta to a player's life.
    ChangeLife { player: PlayerId, delta: i64 },

    /// Apply ±N where N is read from the custom delta field.
    CustomDelta {
        player: PlayerId,
        sign: Sign,
        input: String,
    },

    /// Overwrite a player's display name.
    Rename { player: PlayerId, name: String },

    /// Discard all state and reseat the default table.
    Reset,

    /// Dismiss the game-over notice, which also resets.
    AcknowledgeGameOver,
}

impl LifeAction {
    /// Check if this action touches a life total.
    #[must_use]
    pub fn is_life_change(&self) -> bool {
        matches!(
            self,
            LifeAction::ChangeLife { .. } | LifeAction::CustomDelta { .. }
        )
    }
}
