//! Option value type
//!
//! Stored groups are JSON documents. A value read out of a group is either a
//! plain scalar (rendered as text) or a structured value that is handed back
//! untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
	Scalar(String),
	Structured(serde_json::Value),
}

impl OptionValue {
	/// The "not found" value: an empty scalar
	pub fn empty() -> Self {
		OptionValue::Scalar(String::new())
	}

	/// Normalize a raw JSON value read from a group
	///
	/// Strings are kept, numbers use their JSON text, booleans render as
	/// `"1"` / `""`, null becomes `""`. Arrays and objects are structured.
	pub fn from_json(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::String(s) => OptionValue::Scalar(s),
			serde_json::Value::Number(n) => OptionValue::Scalar(n.to_string()),
			serde_json::Value::Bool(true) => OptionValue::Scalar("1".into()),
			serde_json::Value::Bool(false) | serde_json::Value::Null => OptionValue::empty(),
			v @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
				OptionValue::Structured(v)
			}
		}
	}

	pub fn is_structured(&self) -> bool {
		matches!(self, OptionValue::Structured(_))
	}

	/// True for the empty scalar
	pub fn is_empty(&self) -> bool {
		matches!(self, OptionValue::Scalar(s) if s.is_empty())
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			OptionValue::Scalar(s) => Some(s),
			OptionValue::Structured(_) => None,
		}
	}

	/// Loose truthiness of a scalar; structured values are truthy unless empty
	pub fn is_truthy(&self) -> bool {
		match self {
			OptionValue::Scalar(s) => {
				!matches!(s.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "off" | "no")
			}
			OptionValue::Structured(serde_json::Value::Array(a)) => !a.is_empty(),
			OptionValue::Structured(serde_json::Value::Object(o)) => !o.is_empty(),
			OptionValue::Structured(_) => true,
		}
	}

	/// Convert back into JSON
	pub fn into_json(self) -> serde_json::Value {
		match self {
			OptionValue::Scalar(s) => serde_json::Value::String(s),
			OptionValue::Structured(v) => v,
		}
	}
}

impl Default for OptionValue {
	fn default() -> Self {
		Self::empty()
	}
}

impl std::fmt::Display for OptionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OptionValue::Scalar(s) => f.write_str(s),
			OptionValue::Structured(v) => write!(f, "{}", v),
		}
	}
}

impl From<&str> for OptionValue {
	fn from(s: &str) -> Self {
		OptionValue::Scalar(s.to_string())
	}
}

impl From<String> for OptionValue {
	fn from(s: String) -> Self {
		OptionValue::Scalar(s)
	}
}


// vim: ts=4
