/* src/memo/read.rs */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::{Entry, StatusMemo};
use crate::entity::StatusString;

impl StatusMemo {
	/// Gets the last recorded status for `name`. This is a wait-free operation.
	pub fn get(&self, name: &str) -> Option<StatusString> {
		let snapshot = self.inner.load();
		snapshot.get(name).map(|entry| entry.value.clone())
	}

	/// Gets the full entry (value + metadata) for `name`.
	pub fn get_entry(&self, name: &str) -> Option<Entry> {
		let snapshot = self.inner.load();
		snapshot.get(name).cloned()
	}

	/// Returns an atomic snapshot of all entries.
	pub fn snapshot(&self) -> Arc<HashMap<String, Entry>> {
		self.inner.load_full()
	}

	/// Returns all entity names that have an entry.
	pub fn names(&self) -> Vec<String> {
		let snapshot = self.inner.load();
		snapshot.keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.inner.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.load().is_empty()
	}

	/// Version of the most recent commit (or of initialization).
	pub fn version(&self) -> u64 {
		self.version.load(Ordering::SeqCst)
	}
}
