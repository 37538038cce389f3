/* src/memo/entry.rs */

use std::time::Instant;

use crate::entity::StatusString;

/// The last observed status of an entity.
#[derive(Debug, Clone)]
pub struct Entry {
	/// The status string recorded at the last commit.
	pub value: StatusString,
	/// When the value was recorded.
	pub observed_at: Instant,
	/// Memo version assigned to this value, auto-incremented on each commit.
	pub version: u64,
}
