//! # life-counter
//!
//! Life total tracking for tabletop card games.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A single `Session` owns players, history and the
//!    derived loser/winner status. Nothing is computed lazily by the UI.
//!
//! 2. **Dispatch, Then Notify**: The UI never mutates the session directly.
//!    It sends a `LifeAction` through the `Dispatcher`, which applies it,
//!    recomputes status and calls every listener.
//!
//! 3. **Stable Identity**: Players are addressed by `PlayerId`, never by
//!    name or seat, since names are editable and need not be unique.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, actions, errors, session state
//! - `rules`: Elimination status (loser, winner, alive count)
//! - `events`: Session events and the dispatcher
//! - `tui`: Terminal front end
//! - `logging`: Logger setup for the binary

pub mod core;
pub mod rules;
pub mod events;
pub mod tui;
pub mod logging;

/// Crate version, shown in the startup log line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId,
    SessionConfig, Variant,
    LifeAction, Sign,
    LifeError, LifeResult,
    Phase, Session,
};

pub use crate::rules::Status;

pub use crate::events::{Dispatcher, SessionEvent};
