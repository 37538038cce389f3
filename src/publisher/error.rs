/* src/publisher/error.rs */

use thiserror::Error;

use crate::entity::FeatureKey;

/// Errors that can occur while setting up a publisher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
	/// Two entities were declared with the same name.
	#[error("duplicate entity name: {name}")]
	DuplicateEntity { name: String },

	/// The enablement registry refused to deliver signals for a feature.
	#[error("cannot enable feature {feature}: {reason}")]
	Enablement { feature: FeatureKey, reason: String },
}
