//! Session configuration types.
//!
//! A session is configured at startup by providing:
//! - `Variant`: Fixed two-player duel or variable multiplayer table
//! - `SessionConfig`: Starting life, seat counts and preset deltas
//!
//! `Session::reset` rebuilds the table from the same config.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Default starting life total.
pub const STARTING_LIFE: i64 = 20;

/// Table layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Exactly two players, no seats added.
    Duel,
    /// Four players by default, up to eight via "Add Player".
    #[default]
    Multiplayer,
}

impl Variant {
    /// Player count a fresh session starts with.
    #[must_use]
    pub const fn default_player_count(self) -> usize {
        match self {
            Variant::Duel => 2,
            Variant::Multiplayer => 4,
        }
    }

    /// Maximum number of seats.
    #[must_use]
    pub const fn max_players(self) -> usize {
        match self {
            Variant::Duel => 2,
            Variant::Multiplayer => 8,
        }
    }

    /// Whether the custom ±N delta field is offered.
    #[must_use]
    pub const fn has_custom_delta(self) -> bool {
        matches!(self, Variant::Multiplayer)
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Table layout.
    pub variant: Variant,

    /// Life each player starts (and is added) with.
    pub starting_life: i64,

    /// Players created at session start and on reset.
    pub default_player_count: usize,

    /// Cap for "Add Player".
    pub max_players: usize,

    /// One-tap deltas, in button order.
    pub presets: SmallVec<[i64; 4]>,
}

impl SessionConfig {
    /// Create the default configuration for a variant.
    pub fn new(variant: Variant) -> Self {
        let presets = match variant {
            Variant::Duel => smallvec![-5, -1, 1, 5],
            Variant::Multiplayer => smallvec![-1, 1],
        };

        Self {
            variant,
            starting_life: STARTING_LIFE,
            default_player_count: variant.default_player_count(),
            max_players: variant.max_players(),
            presets,
        }
    }

    /// Two-player duel table.
    pub fn duel() -> Self {
        Self::new(Variant::Duel)
    }

    /// Four-to-eight player table.
    pub fn multiplayer() -> Self {
        Self::new(Variant::Multiplayer)
    }

    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the number of players created on start and reset.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 player");
        assert!(
            count <= self.max_players,
            "Player count exceeds the maximum of {}",
            self.max_players
        );
        self.default_player_count = count;
        self
    }

    /// Set the one-tap preset deltas.
    #[must_use]
    pub fn with_presets(mut self, presets: &[i64]) -> Self {
        self.presets = SmallVec::from_slice(presets);
        self
    }

    /// Get the preset delta for a 0-based button index.
    #[must_use]
    pub fn preset(&self, index: usize) -> Option<i64> {
        self.presets.get(index).copied()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
