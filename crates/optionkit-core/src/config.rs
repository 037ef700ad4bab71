//! Accessor configuration

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;

pub const DEFAULT_GROUP: &str = "theme_options";
pub const DEFAULT_UNSET_SENTINEL: &str = "unset";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
	/// Group used when a caller passes no group or an empty one
	pub default_group: Box<str>,
	/// Update value that removes a key instead of assigning it
	pub unset_sentinel: Box<str>,
	/// Drop a group from the request cache after it has been updated
	pub invalidate_on_update: bool,
	/// Decode HTML entities in scalar values
	pub decode_entities: bool,
}

impl Default for OptionsConfig {
	fn default() -> Self {
		Self {
			default_group: DEFAULT_GROUP.into(),
			unset_sentinel: DEFAULT_UNSET_SENTINEL.into(),
			invalidate_on_update: true,
			decode_entities: true,
		}
	}
}

impl OptionsConfig {
	/// Build a config from `OPTIONKIT_*` environment variables, falling back to defaults
	pub fn from_env() -> OptResult<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> OptResult<Self> {
		let mut config = Self::default();

		if let Some(group) = lookup("OPTIONKIT_DEFAULT_GROUP") {
			config.default_group = group.into();
		}
		if let Some(sentinel) = lookup("OPTIONKIT_UNSET_SENTINEL") {
			config.unset_sentinel = sentinel.into();
		}
		if let Some(flag) = lookup("OPTIONKIT_INVALIDATE_ON_UPDATE") {
			config.invalidate_on_update = parse_flag("OPTIONKIT_INVALIDATE_ON_UPDATE", &flag)?;
		}
		if let Some(flag) = lookup("OPTIONKIT_DECODE_ENTITIES") {
			config.decode_entities = parse_flag("OPTIONKIT_DECODE_ENTITIES", &flag)?;
		}

		config.validate()?;
		debug!("Options config: {:?}", config);
		Ok(config)
	}

	/// Reject configs that would break lookups or updates
	///
	/// An empty unset sentinel would delete every empty value on each update.
	pub fn validate(&self) -> OptResult<()> {
		if self.default_group.is_empty() {
			return Err(Error::ConfigError("Default group must not be empty".into()));
		}
		if self.unset_sentinel.is_empty() {
			return Err(Error::ConfigError("Unset sentinel must not be empty".into()));
		}
		Ok(())
	}

	/// Resolve the group a call should use
	pub fn group<'a>(&'a self, group: Option<&'a str>) -> &'a str {
		match group {
			Some(g) if !g.is_empty() => g,
			_ => &self.default_group,
		}
	}
}

fn parse_flag(name: &str, value: &str) -> OptResult<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(Error::ConfigError(format!("{} must be a boolean, got '{}'", name, value))),
	}
}


// vim: ts=4
