//! Session event types.
//!
//! Events describe what an action did to the session. The dispatcher
//! forwards them, together with the updated session, to every listener.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something that happened to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A player was seated.
    PlayerAdded { player: PlayerId },

    /// A life total moved by `delta` and is now `life`.
    LifeChanged {
        player: PlayerId,
        delta: i64,
        life: i64,
    },

    /// A display name was overwritten.
    PlayerRenamed { player: PlayerId },

    /// The loser annotation changed (`None` once nobody is at or below zero).
    LoserChanged { loser: Option<String> },

    /// Exactly one player remains alive.
    GameOver { winner: String },

    /// All state was discarded and the default table reseated.
    Reset,
}
