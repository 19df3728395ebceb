//! Player identification and per-player life data.
//!
//! ## PlayerId
//!
//! Stable identifier handed out by a [`PlayerIdAllocator`]. Names are mutable
//! and need not be unique, so the id is the only reliable handle on a player.
//!
//! ## Player
//!
//! A display name plus a life total. A player is alive while life is
//! strictly positive.

use serde::{Deserialize, Serialize};

/// Stable, unique player identifier.
///
/// Ids are never reused within a session, even across resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

/// Monotonic source of [`PlayerId`]s.
///
/// ```
/// use life_counter::core::{PlayerId, PlayerIdAllocator};
///
/// let mut ids = PlayerIdAllocator::default();
/// assert_eq!(ids.next_id(), PlayerId::new(0));
/// assert_eq!(ids.next_id(), PlayerId::new(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdAllocator {
    next: u32,
}

impl PlayerIdAllocator {
    /// Allocate the next unused id.
    pub fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,

    /// Display name. Editable at any time.
    pub name: String,

    /// Current life total. No floor or ceiling is enforced.
    pub life: i64,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, name: impl Into<String>, life: i64) -> Self {
        Self {
            id,
            name: name.into(),
            life,
        }
    }

    /// Default display name for the player in the given 1-based seat.
    #[must_use]
    pub fn default_name(seat: usize) -> String {
        format!("Player {seat}")
    }

    /// Check if the player is still in the game.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}
