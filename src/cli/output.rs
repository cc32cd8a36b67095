/// Output rendering: activity lines to stdout, errors to stderr, debug timers.
use std::io::Write;

use crate::github::FetchError;

/// Output context passed to the command flow.
pub struct OutputCtx {
    /// When true, print request timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write activity lines to stdout, one per event, in order.
pub fn write_activity(lines: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
}

/// Write a user-facing error line to stderr.
///
/// Transport failures get the "Connection Error" prefix; everything else
/// is a plain "Error" line.
pub fn write_error(err: &FetchError) {
    match err {
        FetchError::Network(_) => eprintln!("Connection Error: {err}"),
        _ => eprintln!("Error: {err}"),
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
