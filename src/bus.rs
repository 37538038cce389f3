/* src/bus.rs */

//!
//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use crate::publisher::ChangeEvent;
use crate::traits::EventBus;

/// Default event channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Fans change events out to every current subscriber.
///
/// Emitting with no subscribers is not an error; the event is dropped.
/// Subscribers that fall more than `capacity` events behind observe a lag.
#[derive(Debug, Clone)]
pub struct BroadcastBus {
	events: broadcast::Sender<ChangeEvent>,
}

impl BroadcastBus {
	/// Creates a bus with the default event channel capacity.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_EVENT_CAPACITY)
	}

	/// Creates a bus with a custom event channel capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			events: broadcast::channel(capacity.max(1)).0,
		}
	}

	/// Subscribes to change events emitted after this call.
	pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
		self.events.subscribe()
	}

	pub fn receiver_count(&self) -> usize {
		self.events.receiver_count()
	}
}

impl Default for BroadcastBus {
	fn default() -> Self {
		Self::new()
	}
}

impl EventBus for BroadcastBus {
	fn emit(&self, event: ChangeEvent) {
		let _ = self.events.send(event);
	}
}

#[cfg(feature = "stream")]
pub use stream::ChangeStream;

#[cfg(feature = "stream")]
mod stream {
	use std::pin::Pin;
	use std::task::{Context, Poll};

	use futures_util::Stream;
	use tokio_stream::wrappers::BroadcastStream;
	use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

	use super::BroadcastBus;
	use crate::publisher::ChangeEvent;

	/// A `Stream` of change events from a [`BroadcastBus`].
	pub struct ChangeStream {
		inner: BroadcastStream<ChangeEvent>,
	}

	impl Stream for ChangeStream {
		type Item = Result<ChangeEvent, BroadcastStreamRecvError>;

		fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
			Pin::new(&mut self.inner).poll_next(cx)
		}
	}

	impl BroadcastBus {
		pub fn stream(&self) -> ChangeStream {
			ChangeStream {
				inner: BroadcastStream::new(self.subscribe()),
			}
		}
	}
}
