//! Table rules.
//!
//! Elimination is the only rule: a player at or below zero life is out,
//! and the last player standing wins. `Status` captures the result of
//! applying that rule to the current table.

pub mod status;

pub use status::Status;
