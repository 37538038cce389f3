/* src/entity.rs */

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a raw signal an entity may depend on.
///
/// Equality is exact-match on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureKey(String);

impl FeatureKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for FeatureKey {
	fn from(key: &str) -> Self {
		Self(key.to_string())
	}
}

impl From<String> for FeatureKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl From<&FeatureKey> for FeatureKey {
	fn from(key: &FeatureKey) -> Self {
		key.clone()
	}
}

impl Borrow<str> for FeatureKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for FeatureKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Stable string encoding of a computed status value.
///
/// The publisher only ever compares these for equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusString(String);

impl StatusString {
	pub const ENABLED: &'static str = "enabled";
	pub const DISABLED: &'static str = "disabled";

	pub fn new(status: impl Into<String>) -> Self {
		Self(status.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for StatusString {
	fn from(status: &str) -> Self {
		Self(status.to_string())
	}
}

impl From<String> for StatusString {
	fn from(status: String) -> Self {
		Self(status)
	}
}

impl From<bool> for StatusString {
	fn from(enabled: bool) -> Self {
		if enabled {
			Self::from(Self::ENABLED)
		} else {
			Self::from(Self::DISABLED)
		}
	}
}

impl PartialEq<str> for StatusString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for StatusString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl AsRef<str> for StatusString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for StatusString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A named item whose status is tracked for transitions.
///
/// Immutable once constructed. The feature set decides which raw signals
/// can trigger a re-check of this entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
	name: String,
	features: BTreeSet<FeatureKey>,
}

impl Entity {
	pub fn new<I, K>(name: impl Into<String>, features: I) -> Self
	where
		I: IntoIterator<Item = K>,
		K: Into<FeatureKey>,
	{
		Self {
			name: name.into(),
			features: features.into_iter().map(Into::into).collect(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn features(&self) -> &BTreeSet<FeatureKey> {
		&self.features
	}

	/// Returns true if a raw signal for `feature` concerns this entity.
	pub fn observes(&self, feature: &FeatureKey) -> bool {
		self.features.contains(feature)
	}
}

/// Union of all feature keys referenced by `entities`, in first-seen order.
pub fn feature_union<'a, I>(entities: I) -> Vec<FeatureKey>
where
	I: IntoIterator<Item = &'a Entity>,
{
	let mut seen = BTreeSet::new();
	let mut union = Vec::new();

	for entity in entities {
		for feature in &entity.features {
			if seen.insert(feature) {
				union.push(feature.clone());
			}
		}
	}

	union
}
