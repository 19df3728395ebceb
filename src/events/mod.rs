//! Event dispatch.
//!
//! Replaces reactive state binding with an explicit loop:
//! 1. The UI builds a `LifeAction`
//! 2. `Dispatcher::dispatch` applies it to the session
//! 3. Derived status (loser/winner) is recomputed
//! 4. Each resulting `SessionEvent` is delivered to every listener

mod dispatcher;
mod event;

pub use dispatcher::{Dispatcher, Listener};
pub use event::SessionEvent;
