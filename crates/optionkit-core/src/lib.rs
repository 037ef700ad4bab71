//! Request-scoped option accessor.
//!
//! `Options` is the long-lived handle that owns the store adapter, the hook
//! registry and the configuration. Every request creates its own
//! `RequestOptions` from it, which carries the request's memoization cache.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod accessor;
pub mod cache;
pub mod config;
pub mod entity;
pub mod hooks;
pub mod memory_store;
pub mod prelude;
pub mod update;

pub use accessor::{Options, RequestOptions};
pub use cache::RequestCache;
pub use config::OptionsConfig;
pub use hooks::{DEFAULT_PRIORITY, GroupFilterFn, HookRegistry, OverrideFn};
pub use memory_store::MemoryStore;
pub use update::SettingsUpdate;

// vim: ts=4
