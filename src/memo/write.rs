/* src/memo/write.rs */

use std::sync::atomic::Ordering;
use std::time::Instant;

use super::{Entry, StatusMemo};
use crate::entity::StatusString;

impl StatusMemo {
	/// Overwrites the recorded status for `name` and returns the new version.
	pub fn commit(&self, name: &str, value: StatusString) -> u64 {
		let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
		let entry = Entry {
			value,
			observed_at: Instant::now(),
			version,
		};

		self.inner.rcu(|map| {
			let mut new_map = (**map).clone();
			new_map.insert(name.to_string(), entry.clone());
			new_map
		});

		version
	}
}
