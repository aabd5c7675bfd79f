//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements   | Connects to                  |
//! |---------------|--------------|------------------------------|
//! | `console`     | EventSink    | Terminal (stdout)            |
//! | `log_sink`    | EventSink    | `log` facade                 |
//! | `config_file` | ConfigPort   | JSON file on disk            |
//! | `time`        | Clock        | `std::time::Instant`         |
//! | `ticker`      | -            | Real-time thread driving the engine |

pub mod config_file;
pub mod console;
pub mod log_sink;
pub mod ticker;
pub mod time;
