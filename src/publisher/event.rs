/* src/publisher/event.rs */

use std::sync::Arc;

use crate::entity::{Entity, FeatureKey, StatusString};

/// A raw status update for one feature, as produced by a signal source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSignal {
	pub feature: FeatureKey,
	pub status: StatusString,
}

impl RawSignal {
	pub fn new(feature: impl Into<FeatureKey>, status: impl Into<StatusString>) -> Self {
		Self {
			feature: feature.into(),
			status: status.into(),
		}
	}
}

/// Emitted once per detected transition of an entity's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
	/// The entity whose status changed.
	pub entity: Arc<Entity>,
	/// The entity's new status.
	pub status: StatusString,
	/// The raw signal that led to the re-check, or `None` for a reconcile pass.
	pub cause: Option<RawSignal>,
	/// Memo version assigned when the new status was committed.
	pub version: u64,
}

impl ChangeEvent {
	pub fn name(&self) -> &str {
		self.entity.name()
	}
}
