/* src/signal/mod.rs */

//!
//! Async fan-in of raw signals from many producers into one publisher.

mod relay;
mod worker;

pub use relay::{SignalRelay, SignalSender};

/// Default relay queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Errors returned when handing a signal to the relay.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
	#[error("signal relay is closed")]
	Closed,

	#[error("signal relay queue is full")]
	Full,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Configuration for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Max queued signals before producers are made to wait.
	pub capacity: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_QUEUE_CAPACITY,
		}
	}
}
