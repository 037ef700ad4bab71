//! Hook registry for option overrides and group filters
//!
//! Two extension points exist:
//! - **Override** (`pre_get_option_{key}`): runs before any lookup. A chain that
//!   ends with `Some(value)` short-circuits resolution.
//! - **Group filter** (`options_filter`): post-processes a whole group
//!   document before a key is extracted from it.
//!
//! Callbacks run in ascending priority; callbacks with equal priority run in
//! registration order. Each callback receives the result of the previous one.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::prelude::*;

pub const DEFAULT_PRIORITY: i32 = 10;

pub const OVERRIDE_HOOK_PREFIX: &str = "pre_get_option_";
pub const GROUP_FILTER_HOOK: &str = "options_filter";

/// Per-key override: `(previous, group) -> value`
pub type OverrideFn = Arc<dyn Fn(Option<OptionValue>, &str) -> Option<OptionValue> + Send + Sync>;

/// Group filter: `(group document, group) -> group document`
pub type GroupFilterFn = Arc<dyn Fn(serde_json::Value, &str) -> serde_json::Value + Send + Sync>;

/// Name of the override hook for a key
pub fn override_hook_name(key: &str) -> String {
	format!("{}{}", OVERRIDE_HOOK_PREFIX, key)
}

struct Prioritized<F> {
	priority: i32,
	function: F,
}

/// Insert keeping ascending priority; equal priorities keep registration order
fn insert_sorted<F>(list: &mut Vec<Prioritized<F>>, priority: i32, function: F) {
	let pos = list.partition_point(|entry| entry.priority <= priority);
	list.insert(pos, Prioritized { priority, function });
}

/// Registry of override hooks and group filters
#[derive(Default)]
pub struct HookRegistry {
	overrides: HashMap<String, Vec<Prioritized<OverrideFn>>>,
	group_filters: Vec<Prioritized<GroupFilterFn>>,
}

impl std::fmt::Debug for HookRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HookRegistry")
			.field("overrides", &self.overrides.iter().map(|(k, v)| (k, v.len())).collect::<Vec<_>>())
			.field("group_filters", &self.group_filters.len())
			.finish()
	}
}

impl HookRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an override for a single key
	pub fn add_override<F>(&mut self, key: &str, priority: i32, function: F)
	where
		F: Fn(Option<OptionValue>, &str) -> Option<OptionValue> + Send + Sync + 'static,
	{
		debug!("Registering hook {} (priority {})", override_hook_name(key), priority);
		let list = self.overrides.entry(key.to_string()).or_default();
		insert_sorted(list, priority, Arc::new(function) as OverrideFn);
	}

	/// Register a filter applied to every group document
	pub fn add_group_filter<F>(&mut self, priority: i32, function: F)
	where
		F: Fn(serde_json::Value, &str) -> serde_json::Value + Send + Sync + 'static,
	{
		debug!("Registering hook {} (priority {})", GROUP_FILTER_HOOK, priority);
		insert_sorted(&mut self.group_filters, priority, Arc::new(function) as GroupFilterFn);
	}

	/// Run the override chain for `key`
	pub fn run_override(&self, key: &str, group: &str) -> Option<OptionValue> {
		let list = self.overrides.get(key)?;
		list.iter().fold(None, |value, entry| (entry.function)(value, group))
	}

	/// Run the group filter chain over a group document
	pub fn run_group_filter(&self, value: serde_json::Value, group: &str) -> serde_json::Value {
		self.group_filters.iter().fold(value, |value, entry| (entry.function)(value, group))
	}

	pub fn has_override(&self, key: &str) -> bool {
		self.overrides.get(key).is_some_and(|list| !list.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_hook_names() {
		assert_eq!(override_hook_name("logo"), "pre_get_option_logo");
	}

	#[test]
	fn test_no_override() {
		let registry = HookRegistry::new();
		assert!(!registry.has_override("logo"));
		assert_eq!(registry.run_override("logo", "theme_options"), None);
	}

	#[test]
	fn test_override_receives_group() {
		let mut registry = HookRegistry::new();
		registry.add_override("logo", DEFAULT_PRIORITY, |_, group| {
			Some(OptionValue::from(format!("{}-logo.png", group)))
		});

		assert!(registry.has_override("logo"));
		assert_eq!(
			registry.run_override("logo", "footer"),
			Some(OptionValue::from("footer-logo.png"))
		);
		assert_eq!(registry.run_override("other", "footer"), None);
	}

	#[test]
	fn test_override_chain_priority() {
		let mut registry = HookRegistry::new();
		registry.add_override("color", 20, |prev, _| {
			prev.map(|v| OptionValue::from(format!("{}+late", v)))
		});
		registry.add_override("color", 5, |_, _| Some(OptionValue::from("early")));
		registry.add_override("color", 20, |prev, _| {
			prev.map(|v| OptionValue::from(format!("{}+later", v)))
		});

		assert_eq!(
			registry.run_override("color", "g"),
			Some(OptionValue::from("early+late+later"))
		);
	}

	#[test]
	fn test_override_can_withdraw() {
		let mut registry = HookRegistry::new();
		registry.add_override("color", 1, |_, _| Some(OptionValue::from("red")));
		registry.add_override("color", 2, |_, _| None);

		assert_eq!(registry.run_override("color", "g"), None);
	}

	#[test]
	fn test_group_filter_chain() {
		let mut registry = HookRegistry::new();
		assert_eq!(registry.run_group_filter(json!({"a": 1}), "g"), json!({"a": 1}));

		registry.add_group_filter(DEFAULT_PRIORITY, |mut value, _| {
			if let Some(obj) = value.as_object_mut() {
				obj.insert("b".into(), json!(2));
			}
			value
		});
		registry.add_group_filter(DEFAULT_PRIORITY + 1, |mut value, group| {
			if let Some(obj) = value.as_object_mut() {
				obj.insert("group".into(), json!(group));
			}
			value
		});

		assert_eq!(
			registry.run_group_filter(json!({"a": 1}), "header"),
			json!({"a": 1, "b": 2, "group": "header"})
		);
	}
}

// vim: ts=4
