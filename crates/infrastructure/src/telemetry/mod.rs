//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stdout in text or JSON form.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_logging};
