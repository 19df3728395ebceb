//! Logging behavior under the default filter.
//!
//! Kept in its own test binary: the logger is process-global.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use env_logger::Target;

use life_counter::core::{Session, Sign};
use life_counter::logging;

/// Shared in-memory sink for captured log output.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A rejected custom delta stays silent at the default filter.
#[test]
fn test_invalid_delta_logs_nothing_by_default() {
    std::env::remove_var("RUST_LOG");
    let capture = Capture::default();
    logging::builder()
        .target(Target::Pipe(Box::new(capture.clone())))
        .try_init()
        .unwrap();

    let mut session = Session::default();
    let player = session.player_at(0).unwrap();
    assert!(session.apply_custom_delta(player, Sign::Minus, "abc").is_err());
    session.change_life(player, -1).unwrap();

    assert_eq!(capture.contents(), "");

    // The sink itself is live: warnings still come through.
    log::warn!("filter check");
    assert!(capture.contents().contains("filter check"));
}
