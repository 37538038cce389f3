/* src/memo/diff.rs */

use super::StatusMemo;
use crate::entity::{Entity, StatusString};
use crate::traits::StatusQuery;

impl StatusMemo {
	/// Re-queries the entity's status and reports whether it differs from the
	/// recorded one. An entity with no entry always counts as changed.
	///
	/// Never mutates the memo.
	pub fn has_changed(&self, entity: &Entity, query: &dyn StatusQuery) -> bool {
		self.changed_status(entity, query).is_some()
	}

	/// Like [`has_changed`](StatusMemo::has_changed), but hands back the
	/// freshly queried status when it differs.
	pub fn changed_status(&self, entity: &Entity, query: &dyn StatusQuery) -> Option<StatusString> {
		let current = query.current_status(entity.name());
		let snapshot = self.inner.load();

		match snapshot.get(entity.name()) {
			Some(last) if last.value == current => None,
			_ => Some(current),
		}
	}
}
