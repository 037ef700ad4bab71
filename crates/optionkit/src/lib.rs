//! Request-scoped, hook-aware accessor for grouped key/value settings.
//!
//! ```ignore
//! let options = OptionsBuilder::new()
//! 	.store(Arc::new(MemoryStore::new()))
//! 	.build()?;
//!
//! // once per request
//! let mut req = options.request();
//! let color = req.get("color", None, true).await;
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod builder;

pub use optionkit_core::{
	DEFAULT_PRIORITY, GroupFilterFn, HookRegistry, MemoryStore, Options, OptionsConfig,
	OverrideFn, RequestCache, RequestOptions, SettingsUpdate, entity, hooks,
};
pub use optionkit_types::{error, prelude, store_adapter, value};

pub use builder::OptionsBuilder;
pub use optionkit_types::error::{Error, OptResult};
pub use optionkit_types::store_adapter::OptionStore;
pub use optionkit_types::value::OptionValue;

/// Install a fmt subscriber configured from `RUST_LOG`
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init();
}

// vim: ts=4
