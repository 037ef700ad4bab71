//! In-memory option store
//!
//! Keeps group documents in a map. Useful for tests and for hosts that load
//! their options from somewhere else at startup.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct MemoryStore {
	groups: parking_lot::RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a group with an arbitrary document
	pub fn with_group(self, group: impl Into<String>, value: serde_json::Value) -> Self {
		self.groups.write().insert(group.into(), value);
		self
	}

	/// Current document of a group
	pub fn snapshot(&self, group: &str) -> Option<serde_json::Value> {
		self.groups.read().get(group).cloned()
	}

	/// Replace a group behind the accessor's back
	pub fn set_raw(&self, group: impl Into<String>, value: serde_json::Value) {
		self.groups.write().insert(group.into(), value);
	}
}

#[async_trait]
impl OptionStore for MemoryStore {
	async fn read_group(&self, group: &str) -> OptResult<Option<serde_json::Value>> {
		Ok(self.snapshot(group))
	}

	async fn write_group(
		&self,
		group: &str,
		value: &serde_json::Map<String, serde_json::Value>,
	) -> OptResult<bool> {
		let value = serde_json::Value::Object(value.clone());
		let mut groups = self.groups.write();
		if groups.get(group) == Some(&value) {
			return Ok(false);
		}
		groups.insert(group.to_string(), value);
		Ok(true)
	}
}


// vim: ts=4
