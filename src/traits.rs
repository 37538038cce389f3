/* src/traits.rs */

//!
//! Collaborator contracts the publisher is wired to at construction.

use crate::entity::{FeatureKey, StatusString};
use crate::publisher::{ChangeEvent, PublishError};

/// Computes the current status of an entity by name.
///
/// Must be free of side effects from the publisher's point of view; it may be
/// called any number of times.
pub trait StatusQuery: Send + Sync {
	fn current_status(&self, entity: &str) -> StatusString;
}

impl<F> StatusQuery for F
where
	F: Fn(&str) -> StatusString + Send + Sync,
{
	fn current_status(&self, entity: &str) -> StatusString {
		self(entity)
	}
}

/// Arranges for raw signals to be delivered for a set of features.
pub trait EnablementRegistry {
	fn enable_features(&self, features: &[FeatureKey]) -> Result<(), PublishError>;
}

/// Delivers change events to whoever is listening.
///
/// Events emitted by one publisher in sequence must be delivered in that order.
pub trait EventBus: Send + Sync {
	fn emit(&self, event: ChangeEvent);
}

impl<F> EventBus for F
where
	F: Fn(ChangeEvent) + Send + Sync,
{
	fn emit(&self, event: ChangeEvent) {
		self(event)
	}
}
