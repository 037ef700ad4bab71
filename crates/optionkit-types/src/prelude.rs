pub use crate::error::{Error, OptResult};
pub use crate::value::OptionValue;

// vim: ts=4
