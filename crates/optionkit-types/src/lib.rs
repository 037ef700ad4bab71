//! Shared types, the store adapter trait, and error types for OptionKit.
//!
//! Store adapters depend only on this crate, so they can be built without
//! pulling in the accessor and hook machinery.

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod value;

// vim: ts=4
