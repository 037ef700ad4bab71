pub use optionkit_types::prelude::*;
pub use optionkit_types::store_adapter::OptionStore;

// vim: ts=4
