//! PocketPet library.
//!
//! Exposes the game core for the console binary and for integration
//! testing.  Everything under [`app`], [`fsm`] and [`scheduler`] is pure
//! and clock-free; [`adapters`] connects it to the terminal, the log and
//! wall time.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod need;
pub mod scheduler;

pub use error::{ActionError, Error, Result};
