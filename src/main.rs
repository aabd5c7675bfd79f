//! PocketPet — console entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  ConsoleView     LogEventSink   JsonConfigFile  Monotonic  │
//! │  (EventSink)     (EventSink)    (ConfigPort)    (Clock)    │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │             PetEngine (pure logic)                   │  │
//! │  │  PetService (FSM · needs · health) · Scheduler       │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! │                                                            │
//! │  Ticker thread ──lock──▶ SharedSession ◀──lock── stdin     │
//! └────────────────────────────────────────────────────────────┘
//! ```

use std::io::BufRead;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use pocketpet::adapters::config_file::{CONFIG_ENV, JsonConfigFile};
use pocketpet::adapters::console::ConsoleView;
use pocketpet::adapters::log_sink::LogEventSink;
use pocketpet::adapters::ticker::{self, Session, SharedSession, Ticker, with_session};
use pocketpet::adapters::time::MonotonicClock;
use pocketpet::app::commands::PetCommand;
use pocketpet::app::engine::PetEngine;
use pocketpet::app::ports::{Clock, ConfigPort};
use pocketpet::config::PetConfig;

type Sink = (ConsoleView<std::io::Stdout, MonotonicClock>, LogEventSink);

const HELP: &str = "Commands: feed | clean | play | rest | new | status | help | quit";

/// One line of user input.
enum Input {
    Command(PetCommand),
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "" => Input::Empty,
        "status" | "s" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => match other.parse::<PetCommand>() {
            Ok(cmd) => Input::Command(cmd),
            Err(e) => Input::Unknown(e.to_string()),
        },
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("PocketPet v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config();
    let clock = MonotonicClock::new();

    // ── Session ───────────────────────────────────────────────
    let engine = PetEngine::new(config.clone(), clock.now_ms())?;
    let sink: Sink = (ConsoleView::new(std::io::stdout(), clock), LogEventSink::new());
    let session = ticker::share(Session::new(engine, sink));

    with_session(&session, |s| {
        s.start(clock.now_ms());
        s.sink_mut().0.line(HELP);
        let snap = s.snapshot();
        s.sink_mut().0.print_status(&snap);
    });

    let mut ticker = Ticker::spawn(
        session.clone(),
        clock,
        Duration::from_millis(u64::from(config.tick_ms)),
    )?;

    // ── Command loop ──────────────────────────────────────────
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Command(cmd) => run_command(&session, cmd, clock.now_ms()),
            Input::Status => show_status(&session),
            Input::Help => with_session(&session, |s| s.sink_mut().0.line(HELP)),
            Input::Unknown(msg) => with_session(&session, |s| {
                s.sink_mut().0.line(&msg);
                s.sink_mut().0.line(HELP);
            }),
            Input::Empty => {}
            Input::Quit => break,
        }
        if with_session(&session, |s| s.sink().0.is_broken()) {
            warn!("console output lost, shutting down");
            break;
        }
    }

    // ── Shutdown ──────────────────────────────────────────────
    ticker.stop();
    with_session(&session, Session::shutdown);
    info!("PocketPet stopped");
    Ok(())
}

fn load_config() -> PetConfig {
    let Some(port) = JsonConfigFile::from_env() else {
        info!("{} not set, using default config", CONFIG_ENV);
        return PetConfig::default();
    };
    match port.load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(
                "config {} rejected ({}), using defaults",
                port.path().display(),
                e
            );
            PetConfig::default()
        }
    }
}

fn run_command(session: &SharedSession<Sink>, cmd: PetCommand, now_ms: u64) {
    with_session(session, |s| match s.command(cmd, now_ms) {
        Ok(_) => {
            let snap = s.snapshot();
            s.sink_mut().0.print_status(&snap);
        }
        Err(e) => {
            info!("command {} rejected: {}", cmd, e);
            s.sink_mut().0.line(&e.to_string());
        }
    });
}

fn show_status(session: &SharedSession<Sink>) {
    with_session(session, |s| {
        let snap = s.snapshot();
        s.sink_mut().0.print_status(&snap);
    });
}
