/* src/signal/relay.rs */

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use super::worker::forward_signals;
use super::{Config, Result, SignalError};
use crate::entity::{FeatureKey, StatusString};
use crate::publisher::{ChangePublisher, RawSignal};

/// Serializes raw signals from any number of producers onto one publisher.
///
/// Signals are applied in the order they reach the queue; none are coalesced.
/// The worker task is aborted when the relay is stopped or dropped.
pub struct SignalRelay {
	sender: SignalSender,
	task_handle: JoinHandle<()>,
}

/// Cloneable producer handle for a [`SignalRelay`].
#[derive(Debug, Clone)]
pub struct SignalSender {
	tx: mpsc::Sender<RawSignal>,
}

impl SignalRelay {
	/// Spawns the relay worker on the current tokio runtime.
	#[must_use = "SignalRelay must be kept alive"]
	pub fn spawn(publisher: Arc<ChangePublisher>, config: Config) -> Self {
		let (tx, rx) = mpsc::channel(config.capacity.max(1));
		let task_handle = tokio::spawn(forward_signals(rx, publisher));

		Self {
			sender: SignalSender { tx },
			task_handle,
		}
	}

	pub fn sender(&self) -> SignalSender {
		self.sender.clone()
	}

	/// Queues a signal, waiting for room if the queue is full.
	pub async fn post(&self, feature: impl Into<FeatureKey>, status: impl Into<StatusString>) -> Result<()> {
		self.sender.post(feature, status).await
	}

	pub fn stop(&self) {
		self.warn_pending();
		self.task_handle.abort();
	}

	/// Signals accepted but not yet applied.
	pub fn pending(&self) -> usize {
		self.sender.tx.max_capacity() - self.sender.tx.capacity()
	}

	fn warn_pending(&self) {
		let pending = self.pending();
		if pending > 0 && !self.task_handle.is_finished() {
			tracing::warn!(pending, "stopping signal relay with queued signals");
		}
	}

	pub fn is_running(&self) -> bool {
		!self.task_handle.is_finished()
	}
}

impl Drop for SignalRelay {
	fn drop(&mut self) {
		self.warn_pending();
		self.task_handle.abort();
	}
}

impl std::fmt::Debug for SignalRelay {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignalRelay")
			.field("running", &self.is_running())
			.finish_non_exhaustive()
	}
}

impl SignalSender {
	/// Queues a signal, waiting for room if the queue is full.
	pub async fn post(&self, feature: impl Into<FeatureKey>, status: impl Into<StatusString>) -> Result<()> {
		self.tx
			.send(RawSignal::new(feature, status))
			.await
			.map_err(|_| SignalError::Closed)
	}

	/// Queues a signal without waiting.
	pub fn try_post(&self, feature: impl Into<FeatureKey>, status: impl Into<StatusString>) -> Result<()> {
		match self.tx.try_send(RawSignal::new(feature, status)) {
			Ok(()) => Ok(()),
			Err(TrySendError::Full(_)) => Err(SignalError::Full),
			Err(TrySendError::Closed(_)) => Err(SignalError::Closed),
		}
	}

	pub fn is_closed(&self) -> bool {
		self.tx.is_closed()
	}
}
