/* tests/common/mod.rs */

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use statuscast::{ChangeEvent, EventBus, StatusQuery, StatusString};

/// A status query backed by a mutable map. Unknown names report "off".
#[derive(Default)]
pub struct Statuses {
	values: Mutex<HashMap<String, String>>,
	calls: AtomicUsize,
}

impl Statuses {
	pub fn new(initial: &[(&str, &str)]) -> Arc<Self> {
		let statuses = Self::default();
		for (name, value) in initial {
			statuses.set(name, value);
		}
		Arc::new(statuses)
	}

	pub fn set(&self, name: &str, value: &str) {
		self.values
			.lock()
			.unwrap()
			.insert(name.to_string(), value.to_string());
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl StatusQuery for Statuses {
	fn current_status(&self, entity: &str) -> StatusString {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let values = self.values.lock().unwrap();
		StatusString::from(values.get(entity).map(String::as_str).unwrap_or("off"))
	}
}

/// Collects every emitted event.
#[derive(Default)]
pub struct Recorder {
	events: Mutex<Vec<ChangeEvent>>,
}

impl Recorder {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn events(&self) -> Vec<ChangeEvent> {
		self.events.lock().unwrap().clone()
	}

	/// `(entity, status)` pairs in emission order.
	pub fn pairs(&self) -> Vec<(String, String)> {
		self.events()
			.iter()
			.map(|e| (e.name().to_string(), e.status.to_string()))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.events.lock().unwrap().len()
	}

	pub fn clear(&self) {
		self.events.lock().unwrap().clear();
	}
}

impl EventBus for Recorder {
	fn emit(&self, event: ChangeEvent) {
		self.events.lock().unwrap().push(event);
	}
}

pub fn pair(name: &str, status: &str) -> (String, String) {
	(name.to_string(), status.to_string())
}
