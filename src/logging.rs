//! Logger setup for the terminal front end.
//!
//! The TUI draws on the terminal, so `init` never writes there: records are
//! appended to `life-counter.log` in the system temp directory. Nothing
//! below `warn` is recorded unless `RUST_LOG` asks for it, e.g.
//! `RUST_LOG=life_counter=debug life-counter`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Log file name, created in the temp directory.
pub const LOG_FILE: &str = "life-counter.log";

/// Full path of the log file.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Build the logger (filter and format) without installing it.
#[must_use]
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp_millis();
    builder
}

/// Install the global logger writing to the log file. Safe to call more
/// than once. If the file cannot be opened, records are discarded.
pub fn init() {
    let target: Box<dyn io::Write + Send> = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    if builder().target(Target::Pipe(target)).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
