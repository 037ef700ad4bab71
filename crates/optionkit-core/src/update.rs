//! Settings updates and the merge applied before persisting them

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

use crate::prelude::*;

/// Values to merge into a settings group
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsUpdate {
	Map(Map<String, Value>),
	/// URL-encoded `key=value&key2=value2`
	Query(String),
}

impl SettingsUpdate {
	/// Turn the update into a key/value map
	pub fn into_map(self) -> OptResult<Map<String, Value>> {
		match self {
			SettingsUpdate::Map(map) => Ok(map),
			SettingsUpdate::Query(query) => {
				let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&query)
					.inspect_err(|err| warn!("Invalid settings query '{}': {}", query, err))
					.map_err(|_| Error::Parse)?;
				Ok(pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
			}
		}
	}
}

impl From<Map<String, Value>> for SettingsUpdate {
	fn from(map: Map<String, Value>) -> Self {
		SettingsUpdate::Map(map)
	}
}

impl From<HashMap<String, Value>> for SettingsUpdate {
	fn from(map: HashMap<String, Value>) -> Self {
		SettingsUpdate::Map(map.into_iter().collect())
	}
}

impl From<&str> for SettingsUpdate {
	fn from(query: &str) -> Self {
		SettingsUpdate::Query(query.to_string())
	}
}

impl From<String> for SettingsUpdate {
	fn from(query: String) -> Self {
		SettingsUpdate::Query(query)
	}
}

/// Merge `update` over `current` and drop keys set to the unset sentinel
///
/// A current document that is not an object counts as empty.
pub fn merge_settings(
	current: Option<Value>,
	update: Map<String, Value>,
	unset_sentinel: &str,
) -> Map<String, Value> {
	let mut merged = match current {
		Some(Value::Object(map)) => map,
		_ => Map::new(),
	};
	merged.extend(update);
	merged.retain(|_, value| value.as_str() != Some(unset_sentinel));
	merged
}


// vim: ts=4
