//! Core session types: players, configuration, actions, errors, state.
//!
//! Everything here is UI-agnostic. The terminal front end only talks to
//! these types through `LifeAction` and the `Session` accessors.

pub mod player;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, PlayerIdAllocator};
pub use config::{SessionConfig, Variant, STARTING_LIFE};
pub use action::{LifeAction, Sign};
pub use error::{LifeError, LifeResult};
pub use state::{parse_delta, Events, Phase, Session};
