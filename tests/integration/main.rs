//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against the recording sink.  All tests run on a simulated clock except
//! the ticker tests, which use real time with short intervals.

mod action_tests;
mod engine_tests;
mod harness;
