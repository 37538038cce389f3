/* src/publisher/mod.rs */

//!
//! Diffs raw feature signals against per-entity status and emits one event
//! per transition.

mod error;
mod event;

pub use error::PublishError;
pub use event::{ChangeEvent, RawSignal};

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::entity::{Entity, FeatureKey, StatusString, feature_union};
use crate::memo::{Entry, StatusMemo};
use crate::traits::{EnablementRegistry, EventBus, StatusQuery};

/// Publishes a [`ChangeEvent`] each time an entity's status transitions.
///
/// One lock (`outbox`) covers compare, commit and enqueue for an entity.
/// Events leave the queue in commit order and are emitted with the lock
/// released, so a listener may call back into the publisher from any thread.
pub struct ChangePublisher {
	entities: Vec<Arc<Entity>>,
	observed: Vec<FeatureKey>,
	memo: StatusMemo,
	query: Arc<dyn StatusQuery>,
	bus: Arc<dyn EventBus>,
	outbox: Mutex<Outbox>,
}

#[derive(Default)]
struct Outbox {
	queue: VecDeque<ChangeEvent>,
	draining: bool,
}

/// Clears the draining flag if a listener panics mid-drain.
struct DrainGuard<'a>(&'a Mutex<Outbox>);

impl Drop for DrainGuard<'_> {
	fn drop(&mut self) {
		self.0.lock().draining = false;
	}
}

impl ChangePublisher {
	/// Snapshots every entity's status, then enables the union of their
	/// feature keys on `registry`.
	pub fn new<I>(
		entities: I,
		query: Arc<dyn StatusQuery>,
		bus: Arc<dyn EventBus>,
		registry: &dyn EnablementRegistry,
	) -> Result<Self, PublishError>
	where
		I: IntoIterator<Item = Entity>,
	{
		let mut names = HashSet::new();
		let mut list = Vec::new();
		for entity in entities {
			if !names.insert(entity.name().to_string()) {
				return Err(PublishError::DuplicateEntity {
					name: entity.name().to_string(),
				});
			}
			list.push(Arc::new(entity));
		}

		let memo = StatusMemo::initialize(list.iter().map(|e| e.as_ref()), query.as_ref());
		let observed = feature_union(list.iter().map(|e| e.as_ref()));

		registry.enable_features(&observed)?;
		tracing::debug!(
			entities = list.len(),
			features = observed.len(),
			"change publisher ready"
		);

		Ok(Self {
			entities: list,
			observed,
			memo,
			query,
			bus,
			outbox: Mutex::new(Outbox::default()),
		})
	}

	/// Handles a (re)computed status for `feature`.
	///
	/// Every entity observing `feature` is re-checked in list order. Each one
	/// whose status differs from its recorded value is committed and queued for
	/// the bus. Events reach the bus in commit order; while another thread is
	/// emitting, that thread delivers them. Returns the number of transitions
	/// committed.
	pub fn post_notification(&self, feature: &FeatureKey, status: impl Into<StatusString>) -> usize {
		let cause = RawSignal {
			feature: feature.clone(),
			status: status.into(),
		};

		let mut committed = 0;
		for entity in self.entities.iter().filter(|e| e.observes(feature)) {
			if self.diff_and_emit(entity, Some(&cause)) {
				committed += 1;
			}
		}

		if committed == 0 {
			tracing::trace!(feature = %cause.feature, status = %cause.status, "no status transition");
		}
		committed
	}

	/// Re-checks every entity regardless of feature and emits for any whose
	/// status drifted since it was last recorded.
	///
	/// Signals are push-only, so a status that changes without a matching
	/// post goes unnoticed until this is called.
	pub fn reconcile(&self) -> usize {
		let mut committed = 0;
		for entity in &self.entities {
			if self.diff_and_emit(entity, None) {
				committed += 1;
			}
		}

		tracing::debug!(committed, "reconciled entity statuses");
		committed
	}

	fn diff_and_emit(&self, entity: &Arc<Entity>, cause: Option<&RawSignal>) -> bool {
		{
			let mut outbox = self.outbox.lock();
			let Some(status) = self.memo.changed_status(entity, self.query.as_ref()) else {
				return false;
			};
			let version = self.memo.commit(entity.name(), status.clone());

			match cause {
				Some(cause) => tracing::info!(
					entity = entity.name(),
					%status,
					feature = %cause.feature,
					"posted status change"
				),
				None => tracing::info!(entity = entity.name(), %status, "posted reconciled status change"),
			}

			outbox.queue.push_back(ChangeEvent {
				entity: Arc::clone(entity),
				status,
				cause: cause.cloned(),
				version,
			});
		}

		self.drain();
		true
	}

	/// Emits queued events in commit order, without holding the lock.
	///
	/// Only one thread drains at a time. A post made while another thread is
	/// draining (including from inside a listener, on any thread) only
	/// enqueues; the active drainer delivers it after the current event.
	fn drain(&self) {
		{
			let mut outbox = self.outbox.lock();
			if outbox.draining {
				return;
			}
			outbox.draining = true;
		}
		let release = DrainGuard(&self.outbox);

		loop {
			let event = {
				let mut outbox = self.outbox.lock();
				match outbox.queue.pop_front() {
					Some(event) => event,
					None => {
						// Cleared with the empty check so a concurrent enqueue
						// either sees the flag down or gets popped here.
						outbox.draining = false;
						break;
					}
				}
			};
			self.bus.emit(event);
		}
		std::mem::forget(release);
	}

	pub fn entities(&self) -> &[Arc<Entity>] {
		&self.entities
	}

	pub fn entity(&self, name: &str) -> Option<&Arc<Entity>> {
		self.entities.iter().find(|e| e.name() == name)
	}

	/// Feature keys enabled at construction, deduplicated, in first-seen order.
	pub fn observed_features(&self) -> &[FeatureKey] {
		&self.observed
	}

	/// Last recorded status of the named entity.
	pub fn status(&self, name: &str) -> Option<StatusString> {
		self.memo.get(name)
	}

	pub fn snapshot(&self) -> Arc<HashMap<String, Entry>> {
		self.memo.snapshot()
	}
}

impl std::fmt::Debug for ChangePublisher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ChangePublisher")
			.field("entities", &self.entities)
			.field("observed", &self.observed)
			.field("memo", &self.memo)
			.finish_non_exhaustive()
	}
}
