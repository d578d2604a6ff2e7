//! Logging utilities.
//!
//! Import diagnostics go through the `log` facade; this module only wires up
//! the `env_logger` backend for binaries and tests.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
