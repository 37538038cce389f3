/* src/memo/mod.rs */

//!
//! Last-known status per entity name.

mod diff;
mod entry;
mod read;
mod write;

pub use entry::Entry;

use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

use arc_swap::ArcSwap;

use crate::entity::Entity;
use crate::traits::StatusQuery;

/// Remembers the last status string observed for each entity.
///
/// Reads are wait-free snapshots of a copy-on-write map. Writes replace the
/// map atomically, so a reader never sees a half-applied commit. Comparing and
/// committing are separate steps; callers that need them to be atomic must
/// serialize around them.
pub struct StatusMemo {
	pub(crate) inner: ArcSwap<HashMap<String, Entry>>,
	pub(crate) version: AtomicU64,
}

impl StatusMemo {
	/// Builds the memo by querying each entity's current status exactly once.
	pub fn initialize<'a, I>(entities: I, query: &dyn StatusQuery) -> Self
	where
		I: IntoIterator<Item = &'a Entity>,
	{
		let mut version = 0;
		let map: HashMap<String, Entry> = entities
			.into_iter()
			.map(|entity| {
				version += 1;
				let entry = Entry {
					value: query.current_status(entity.name()),
					observed_at: Instant::now(),
					version,
				};
				(entity.name().to_string(), entry)
			})
			.collect();

		tracing::debug!(entities = map.len(), "status memo initialized");

		Self {
			inner: ArcSwap::from_pointee(map),
			version: AtomicU64::new(version),
		}
	}
}

impl std::fmt::Debug for StatusMemo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StatusMemo")
			.field("entries", &self.len())
			.field("version", &self.version())
			.finish()
	}
}
