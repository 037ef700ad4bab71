//! Adapter trait for the persistent settings store
//!
//! A store keeps one JSON document per settings group. Accessors read whole
//! groups and write back merged groups; individual keys are never stored on
//! their own.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait OptionStore: Debug + Send + Sync {
	/// Read the stored document of a group
	///
	/// Returns `None` if the group was never written. Must not have side effects.
	async fn read_group(&self, group: &str) -> OptResult<Option<serde_json::Value>>;

	/// Replace the stored document of a group
	///
	/// Returns `true` if the stored value changed, `false` if `value` equals
	/// what was already stored.
	async fn write_group(
		&self,
		group: &str,
		value: &serde_json::Map<String, serde_json::Value>,
	) -> OptResult<bool>;
}

// vim: ts=4
