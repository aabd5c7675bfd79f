//! Real-time ticker — drives the engine from wall time.
//!
//! Runs in a dedicated thread using `edge-executor` for the tick task and
//! `async-io-mini` for reactor-driven timers (no busy-spinning).  Each
//! wake measures the elapsed time on the [`Clock`] and feeds it to the
//! engine under the session lock.  The command thread takes the same
//! lock, so a tick and a user action never interleave.
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────┐
//!  │  Ticker thread                                       │
//!  │  ┌────────────────────────────────────────────────┐  │
//!  │  │  futures_lite::block_on(executor.run(stop))    │  │
//!  │  │  ┌──────────────────────────────────────────┐  │  │
//!  │  │  │  tick loop: Timer::after(period).await   │──┼──┼──▶ SharedSession
//!  │  │  └──────────────────────────────────────────┘  │  │
//!  │  └────────────────────────────────────────────────┘  │
//!  └──────────────────────────────────────────────────────┘
//! ```

use core::cell::RefCell;
use core::time::Duration;
use std::sync::Arc;
use std::thread::JoinHandle;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use log::{info, warn};

use crate::app::commands::PetCommand;
use crate::app::engine::PetEngine;
use crate::app::events::PetSnapshot;
use crate::app::ports::{Clock, EventSink};
use crate::app::service::ActionOutcome;
use crate::error::{ActionError, Error, Result};

// ── Session ──────────────────────────────────────────────────

/// One pet engine and the sink its events go to.
pub struct Session<S> {
    engine: PetEngine,
    sink: S,
    last_tick_ms: u64,
}

impl<S: EventSink> Session<S> {
    pub fn new(engine: PetEngine, sink: S) -> Self {
        Self {
            engine,
            sink,
            last_tick_ms: 0,
        }
    }

    /// Enter the initial state and start measuring from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
        self.engine.start(&mut self.sink);
    }

    /// Advance the timers to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;
        self.engine.advance(elapsed, now_ms, &mut self.sink);
    }

    pub fn command(&mut self, cmd: PetCommand, now_ms: u64) -> core::result::Result<ActionOutcome, ActionError> {
        self.engine.handle_command(cmd, now_ms, &mut self.sink)
    }

    /// Cancel every timer.
    pub fn shutdown(&mut self) {
        self.engine.stop_timers();
    }

    pub fn snapshot(&self) -> PetSnapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &PetEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/// A session shared between the ticker thread and the command thread.
pub type SharedSession<S> = Arc<Mutex<CriticalSectionRawMutex, RefCell<Session<S>>>>;

pub fn share<S>(session: Session<S>) -> SharedSession<S> {
    Arc::new(Mutex::new(RefCell::new(session)))
}

/// Run `f` with exclusive access to the session.
pub fn with_session<S, R>(shared: &SharedSession<S>, f: impl FnOnce(&mut Session<S>) -> R) -> R {
    shared.lock(|cell| f(&mut cell.borrow_mut()))
}

// ── Ticker ───────────────────────────────────────────────────

type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// Handle to the running ticker thread.  Dropping it stops the thread.
pub struct Ticker {
    stop: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the ticker thread, waking every `period`.
    pub fn spawn<S, C>(session: SharedSession<S>, clock: C, period: Duration) -> Result<Self>
    where
        S: EventSink + Send + 'static,
        C: Clock + Send + 'static,
    {
        let stop = Arc::new(StopSignal::new());
        let stop_rx = stop.clone();

        let handle = std::thread::Builder::new()
            .name("pet-ticker".into())
            .spawn(move || run_tick_loop(session, clock, period, &stop_rx))
            .map_err(|_| Error::Runtime("failed to spawn ticker thread"))?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the thread and wait for it to exit.  Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.signal(());
            if handle.join().is_err() {
                warn!("Ticker: thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick_loop<S: EventSink, C: Clock>(session: SharedSession<S>, clock: C, period: Duration) {
    loop {
        async_io_mini::Timer::after(period).await;
        let now = clock.now_ms();
        with_session(&session, |s| s.tick(now));
    }
}

fn run_tick_loop<S: EventSink, C: Clock>(
    session: SharedSession<S>,
    clock: C,
    period: Duration,
    stop: &StopSignal,
) {
    let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();
    executor.spawn(tick_loop(session, clock, period)).detach();

    info!("Ticker started (period {}ms)", period.as_millis());
    futures_lite::future::block_on(executor.run(stop.wait()));
    info!("Ticker stopped");
}
