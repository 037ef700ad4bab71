//! Request-scoped memoization of groups and option values
//!
//! Owned by a single `RequestOptions` and dropped with it, so no locking is
//! involved. Two levels are kept:
//! - group cache: group name -> filtered group document
//! - key cache: group name -> key -> normalized value

use std::collections::HashMap;
use tracing::debug;

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct RequestCache {
	groups: HashMap<Box<str>, serde_json::Value>,
	keys: HashMap<Box<str>, HashMap<Box<str>, OptionValue>>,
}

impl RequestCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get_key(&self, group: &str, key: &str) -> Option<&OptionValue> {
		self.keys.get(group).and_then(|keys| keys.get(key))
	}

	pub fn put_key(&mut self, group: &str, key: &str, value: OptionValue) {
		self.keys.entry(group.into()).or_default().insert(key.into(), value);
	}

	pub fn get_group(&self, group: &str) -> Option<&serde_json::Value> {
		self.groups.get(group)
	}

	pub fn put_group(&mut self, group: &str, value: serde_json::Value) {
		self.groups.insert(group.into(), value);
	}

	/// Drop both cache levels of a group
	pub fn invalidate_group(&mut self, group: &str) {
		let had_group = self.groups.remove(group).is_some();
		let had_keys = self.keys.remove(group).is_some();
		if had_group || had_keys {
			debug!("Request cache invalidated for group '{}'", group);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty() && self.keys.is_empty()
	}
}


// vim: ts=4
