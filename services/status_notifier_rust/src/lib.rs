//! Homework Status Notifier Library
//!
//! Exposes the configuration, message formatting and poll loop so the
//! binary and the integration tests share them.

pub mod config;
pub mod formatters;
pub mod poller;
pub mod shutdown;

pub use config::{Config, ConfigError};
pub use poller::{CycleOutcome, PollLoop, PollState, RETRY_PERIOD};
pub use shutdown::shutdown_signal;
