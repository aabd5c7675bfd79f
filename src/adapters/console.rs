//! Console presentation adapter.
//!
//! [`ConsoleView`] implements [`EventSink`] by printing each notice as a
//! timestamped log line, and renders the status view (health, score bars,
//! current appearance) on request.
//!
//! ```text
//! [00:01:05] Your pet is hungry! Please feed it.
//!
//!   Health  87/100
//!   Hungry  [||||||||||] (10/10)
//!   Dirty   [|||-------] (3/10)
//!   ...
//!   Status  Your pet is hungry!  (hungry.png)
//! ```

use std::fmt::Write as _;
use std::io::Write;

use log::warn;

use crate::app::events::{PetEvent, PetSnapshot};
use crate::app::ports::{Clock, EventSink};
use crate::need::{MAX_SCORE, NeedKind};

/// Prints notices to a writer, stamped with the clock's uptime.
///
/// A failed write is logged once; later output is still attempted.
pub struct ConsoleView<W: Write, C: Clock> {
    out: W,
    clock: C,
    broken: bool,
}

impl<W: Write, C: Clock> ConsoleView<W, C> {
    pub fn new(out: W, clock: C) -> Self {
        Self {
            out,
            clock,
            broken: false,
        }
    }

    /// Print a line stamped with the current uptime.
    pub fn line(&mut self, text: &str) {
        let stamp = format_uptime(self.clock.now_ms());
        self.put(&format!("[{}] {}\n", stamp, text));
    }

    pub fn print_status(&mut self, snapshot: &PetSnapshot) {
        self.put(&render_status(snapshot));
    }

    /// Whether any write to the console has failed.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn put(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            if !self.broken {
                warn!("console output failed: {}", e);
            }
            self.broken = true;
        }
    }
}

impl<W: Write, C: Clock> EventSink for ConsoleView<W, C> {
    fn emit(&mut self, event: &PetEvent) {
        match event {
            PetEvent::Notice(text) => self.line(text),
            // The status view is re-read on demand.
            PetEvent::StateChanged => {}
        }
    }
}

/// `HH:MM:SS` from milliseconds of uptime.
pub fn format_uptime(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// `[|||-------] (3/10)` for a score of 3.
pub fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(MAX_SCORE));
    let empty = usize::from(MAX_SCORE) - filled;
    format!("[{}{}] ({}/{})", "|".repeat(filled), "-".repeat(empty), filled, MAX_SCORE)
}

/// Multi-line status view of a snapshot.
pub fn render_status(snapshot: &PetSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:<7} {}/100", "Health", snapshot.health);
    for kind in NeedKind::ALL {
        let _ = writeln!(out, "  {:<7} {}", kind, score_bar(snapshot.scores.get(kind)));
    }
    let _ = writeln!(
        out,
        "  {:<7} {}  ({})",
        "Status",
        snapshot.appearance.message(),
        snapshot.appearance.icon()
    );
    out
}
