/* src/registry.rs */

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::entity::FeatureKey;
use crate::publisher::PublishError;
use crate::traits::EnablementRegistry;

/// An enablement registry that only records what was asked of it.
///
/// Useful when raw signals are fed by hand, and in tests.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
	// feature -> number of times it was requested
	requests: Mutex<BTreeMap<FeatureKey, usize>>,
	order: Mutex<Vec<FeatureKey>>,
}

impl InMemoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_enabled(&self, feature: &FeatureKey) -> bool {
		self.requests.lock().contains_key(feature)
	}

	/// Enabled features in the order they were first requested.
	pub fn enabled(&self) -> Vec<FeatureKey> {
		self.order.lock().clone()
	}

	/// How many times `feature` has been requested.
	pub fn requests(&self, feature: &FeatureKey) -> usize {
		self.requests.lock().get(feature).copied().unwrap_or(0)
	}
}

impl EnablementRegistry for InMemoryRegistry {
	fn enable_features(&self, features: &[FeatureKey]) -> Result<(), PublishError> {
		let mut requests = self.requests.lock();
		let mut order = self.order.lock();

		for feature in features {
			let count = requests.entry(feature.clone()).or_insert(0);
			if *count == 0 {
				order.push(feature.clone());
			}
			*count += 1;
		}

		Ok(())
	}
}
