//! Option accessor with request-scoped caching
//!
//! `Options` is created once by the host and cloned freely. Each request
//! calls [`Options::request`] (or [`Options::preview_request`] for live
//! preview sessions) and resolves its options through the returned
//! `RequestOptions`, whose cache is dropped together with it.
//!
//! Reads never fail: a missing group, a group that is not an object, a
//! missing key, and store errors all resolve to the empty scalar `""`.

use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

use crate::cache::RequestCache;
use crate::config::OptionsConfig;
use crate::entity::decode_value;
use crate::hooks::{HookRegistry, override_hook_name};
use crate::prelude::*;
use crate::update::{SettingsUpdate, merge_settings};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct Options {
	store: Arc<dyn OptionStore>,
	hooks: Arc<HookRegistry>,
	config: Arc<OptionsConfig>,
}

impl Options {
	pub fn new(store: Arc<dyn OptionStore>, hooks: HookRegistry, config: OptionsConfig) -> Self {
		Self { store, hooks: Arc::new(hooks), config: Arc::new(config) }
	}

	pub fn config(&self) -> &OptionsConfig {
		&self.config
	}

	pub fn hooks(&self) -> &HookRegistry {
		&self.hooks
	}

	pub fn store(&self) -> &Arc<dyn OptionStore> {
		&self.store
	}

	/// Start a request with an empty cache
	pub fn request(&self) -> RequestOptions {
		RequestOptions::new(self.clone(), false)
	}

	/// Start a live-preview request: every read bypasses the cache
	pub fn preview_request(&self) -> RequestOptions {
		RequestOptions::new(self.clone(), true)
	}
}

/// Option accessor bound to a single request
#[derive(Debug)]
pub struct RequestOptions {
	options: Options,
	cache: RequestCache,
	preview: bool,
}

impl RequestOptions {
	pub fn new(options: Options, preview: bool) -> Self {
		Self { options, cache: RequestCache::new(), preview }
	}

	pub fn is_preview(&self) -> bool {
		self.preview
	}

	pub fn cache(&self) -> &RequestCache {
		&self.cache
	}

	/// Resolve `key` in `group` (default group if `None` or empty)
	///
	/// Resolution order: override hooks, then (unless `use_cache` is false or
	/// this is a preview request) the key cache, the group cache, and finally
	/// the store. Missing values resolve to `""` and are cached like any
	/// other value.
	pub async fn get(&mut self, key: &str, group: Option<&str>, use_cache: bool) -> OptionValue {
		let group: Box<str> = self.options.config.group(group).into();

		if let Some(value) = self.options.hooks.run_override(key, &group) {
			debug!("Option {}.{} short-circuited by {}", group, key, override_hook_name(key));
			return value;
		}

		if !use_cache || self.preview {
			let options = self.read_group(&group).await;
			return self.extract(options.as_ref(), key);
		}

		if let Some(value) = self.cache.get_key(&group, key) {
			debug!("Option cache hit: {}.{}", group, key);
			return value.clone();
		}

		let options = if let Some(cached) = self.cache.get_group(&group) {
			self.options.hooks.run_group_filter(cached.clone(), &group)
		} else {
			debug!("Option group cache miss: {}", group);
			let raw = self.read_group(&group).await.unwrap_or(Value::Null);
			let filtered = self.options.hooks.run_group_filter(raw, &group);
			self.cache.put_group(&group, filtered.clone());
			filtered
		};

		let value = self.extract(Some(&options), key);
		self.cache.put_key(&group, key, value.clone());
		value
	}

	/// Resolve `key` in the default group through the cache
	pub async fn get_option(&mut self, key: &str) -> OptionValue {
		self.get(key, None, true).await
	}

	/// Scalar text of an option, `None` for structured values
	pub async fn get_string(&mut self, key: &str, group: Option<&str>) -> Option<String> {
		match self.get(key, group, true).await {
			OptionValue::Scalar(s) => Some(s),
			OptionValue::Structured(_) => None,
		}
	}

	pub async fn get_bool(&mut self, key: &str, group: Option<&str>) -> bool {
		self.get(key, group, true).await.is_truthy()
	}

	pub async fn get_json(&mut self, key: &str, group: Option<&str>) -> Value {
		self.get(key, group, true).await.into_json()
	}

	/// Write an option to `out` as-is
	///
	/// The value is not escaped. Callers rendering into HTML must escape it
	/// themselves or use [`RequestOptions::echo_option_escaped`].
	pub async fn echo_option<W: Write>(
		&mut self,
		out: &mut W,
		key: &str,
		group: Option<&str>,
		use_cache: bool,
	) -> OptResult<()> {
		let value = self.get(key, group, use_cache).await;
		write!(out, "{}", value)?;
		Ok(())
	}

	/// Write an option to `out` with HTML special characters escaped
	pub async fn echo_option_escaped<W: Write>(
		&mut self,
		out: &mut W,
		key: &str,
		group: Option<&str>,
		use_cache: bool,
	) -> OptResult<()> {
		let value = self.get(key, group, use_cache).await.to_string();
		out.write_all(quick_xml::escape::escape(value.as_str()).as_bytes())?;
		Ok(())
	}

	/// Merge `update` into the stored group and persist it
	///
	/// The current group is always read from the store, never from the cache.
	/// Keys whose merged value is the unset sentinel are removed. Returns
	/// whether the stored value changed. Failures are logged and reported as
	/// `false`; if the current group cannot be read nothing is written.
	pub async fn update_settings(
		&mut self,
		update: impl Into<SettingsUpdate>,
		group: Option<&str>,
	) -> bool {
		let group: Box<str> = self.options.config.group(group).into();
		match self.try_update_settings(update, Some(&group)).await {
			Ok(changed) => changed,
			Err(err) => {
				warn!("Failed to update options group '{}': {}", group, err);
				false
			}
		}
	}

	/// Same as [`RequestOptions::update_settings`], but returns parse and store errors
	pub async fn try_update_settings(
		&mut self,
		update: impl Into<SettingsUpdate>,
		group: Option<&str>,
	) -> OptResult<bool> {
		let group: Box<str> = self.options.config.group(group).into();
		let update = update.into().into_map()?;

		let current = self.options.store.read_group(&group).await?;
		let merged = merge_settings(current, update, &self.options.config.unset_sentinel);
		let changed = self.options.store.write_group(&group, &merged).await?;

		if changed {
			info!("Options group '{}' updated ({} keys)", group, merged.len());
		} else {
			debug!("Options group '{}' unchanged", group);
		}

		if self.options.config.invalidate_on_update {
			self.cache.invalidate_group(&group);
		}

		Ok(changed)
	}

	async fn read_group(&self, group: &str) -> Option<Value> {
		match self.options.store.read_group(group).await {
			Ok(value) => value,
			Err(err) => {
				warn!("Failed to read options group '{}': {}", group, err);
				None
			}
		}
	}

	fn extract(&self, options: Option<&Value>, key: &str) -> OptionValue {
		let Some(value) = options.and_then(Value::as_object).and_then(|map| map.get(key)) else {
			return OptionValue::empty();
		};

		let value = OptionValue::from_json(value.clone());
		if self.options.config.decode_entities { decode_value(value) } else { value }
	}
}


// vim: ts=4
