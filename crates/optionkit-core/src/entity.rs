//! HTML entity decoding for scalar option values

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use std::borrow::Cow;

use crate::prelude::*;

/// Longest entity reference considered, including the leading '&'
const MAX_ENTITY_LEN: usize = 40;

/// Decode named and numeric character references
///
/// Unknown or malformed references, and bare ampersands, are kept as written.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
	if !raw.contains('&') {
		return Cow::Borrowed(raw);
	}

	let mut out = String::with_capacity(raw.len());
	let mut rest = raw;
	while let Some(amp) = rest.find('&') {
		out.push_str(&rest[..amp]);
		let tail = &rest[amp..];

		let end = tail
			.char_indices()
			.skip(1)
			.take(MAX_ENTITY_LEN)
			.find(|&(_, c)| c == ';' || c == '&' || c.is_whitespace());

		match end {
			Some((pos, ';')) => {
				let reference = &tail[..=pos];
				match unescape_with(reference, resolve_html5_entity) {
					Ok(decoded) => out.push_str(&decoded),
					Err(_) => out.push_str(reference),
				}
				rest = &tail[pos + 1..];
			}
			_ => {
				out.push('&');
				rest = &tail[1..];
			}
		}
	}
	out.push_str(rest);

	Cow::Owned(out)
}

/// Decode a scalar value; structured values pass through unchanged
pub fn decode_value(value: OptionValue) -> OptionValue {
	match value {
		OptionValue::Scalar(s) => match decode_entities(&s) {
			Cow::Borrowed(_) => OptionValue::Scalar(s),
			Cow::Owned(decoded) => OptionValue::Scalar(decoded),
		},
		structured @ OptionValue::Structured(_) => structured,
	}
}


// vim: ts=4
