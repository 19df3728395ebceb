//! Terminal front end.
//!
//! Keys map onto `LifeAction`s; the dispatcher listener flags a redraw.

pub mod app;
pub mod input;
pub mod ui;

pub use app::{App, Mode};
pub use input::TextField;
