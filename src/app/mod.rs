//! Application core — pure game logic, zero I/O.
//!
//! This module contains the rules of the pet: the service that applies
//! need ticks, health drift and user commands, and the engine that pairs
//! it with its timers.  All interaction with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real clocks or terminals.

pub mod commands;
pub mod engine;
pub mod events;
pub mod ports;
pub mod service;
