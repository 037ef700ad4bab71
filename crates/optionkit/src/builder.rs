//! Options builder - wires a store adapter, hooks and configuration together

use std::sync::Arc;
use tracing::info;

use optionkit_core::{HookRegistry, Options, OptionsConfig};
use optionkit_types::prelude::*;
use optionkit_types::store_adapter::OptionStore;

pub struct OptionsBuilder {
	config: OptionsConfig,
	store: Option<Arc<dyn OptionStore>>,
	hooks: HookRegistry,
}

impl OptionsBuilder {
	pub fn new() -> Self {
		OptionsBuilder { config: OptionsConfig::default(), store: None, hooks: HookRegistry::new() }
	}

	/// Start from `OPTIONKIT_*` environment variables
	pub fn from_env() -> OptResult<Self> {
		Ok(OptionsBuilder { config: OptionsConfig::from_env()?, ..Self::new() })
	}

	// Opts
	pub fn config(&mut self, config: OptionsConfig) -> &mut Self {
		self.config = config;
		self
	}
	pub fn default_group(&mut self, group: impl Into<Box<str>>) -> &mut Self {
		self.config.default_group = group.into();
		self
	}
	pub fn unset_sentinel(&mut self, sentinel: impl Into<Box<str>>) -> &mut Self {
		self.config.unset_sentinel = sentinel.into();
		self
	}
	pub fn invalidate_on_update(&mut self, invalidate: bool) -> &mut Self {
		self.config.invalidate_on_update = invalidate;
		self
	}
	pub fn decode_entities(&mut self, decode: bool) -> &mut Self {
		self.config.decode_entities = decode;
		self
	}

	// Adapter
	pub fn store(&mut self, store: Arc<dyn OptionStore>) -> &mut Self {
		self.store = Some(store);
		self
	}

	// Hooks
	pub fn add_override<F>(&mut self, key: &str, priority: i32, function: F) -> &mut Self
	where
		F: Fn(Option<OptionValue>, &str) -> Option<OptionValue> + Send + Sync + 'static,
	{
		self.hooks.add_override(key, priority, function);
		self
	}
	pub fn add_group_filter<F>(&mut self, priority: i32, function: F) -> &mut Self
	where
		F: Fn(serde_json::Value, &str) -> serde_json::Value + Send + Sync + 'static,
	{
		self.hooks.add_group_filter(priority, function);
		self
	}

	/// Build the shared `Options` handle
	///
	/// The builder is left with the same config and store but an empty hook
	/// registry.
	pub fn build(&mut self) -> OptResult<Options> {
		let store =
			self.store.clone().ok_or_else(|| Error::ConfigError("No option store set".into()))?;
		self.config.validate()?;

		let hooks = std::mem::take(&mut self.hooks);
		info!(
			"Options ready: default group '{}', {:?}",
			self.config.default_group, hooks
		);
		Ok(Options::new(store, hooks, self.config.clone()))
	}
}

impl Default for OptionsBuilder {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
