//! HTML entity encoding for content and attribute values.
//!
//! Body content only needs `&`, `<` and `>` escaped; quotes are left alone
//! because content is never an attribute context. Attribute values additionally
//! escape `"` as `&quot;` and `'` as `&apos;`.
//!
//! With `double_encode` disabled, an `&` that already starts a valid character
//! reference (`&amp;`, `&#39;`, `&#x27;`, ...) is copied through unchanged, which
//! makes encoding idempotent.

use crate::value::AttributeValue;

/// Encodes text used as element content.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::encode_content;
///
/// assert_eq!(encode_content("a < b & \"c\"", true), "a &lt; b &amp; \"c\"");
/// assert_eq!(encode_content("&amp;", false), "&amp;");
/// assert_eq!(encode_content("&amp;", true), "&amp;amp;");
/// ```
pub fn encode_content(text: &str, double_encode: bool) -> String {
	encode(text, double_encode, false)
}

/// Encodes raw bytes used as element content.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before encoding.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::encode_content_bytes;
///
/// assert_eq!(encode_content_bytes(b"<b>\xff</b>", true), "&lt;b&gt;\u{FFFD}&lt;/b&gt;");
/// ```
pub fn encode_content_bytes(bytes: &[u8], double_encode: bool) -> String {
	encode_content(&String::from_utf8_lossy(bytes), double_encode)
}

/// Encodes a value used inside a quoted attribute.
///
/// `Null` becomes the empty string and numbers are stringified first. Values with
/// no scalar form (lists, maps) encode as the empty string.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::encode_value;
///
/// assert_eq!(encode_value("Sam & Dark", false), "Sam &amp; Dark");
/// assert_eq!(encode_value("it's \"quoted\"", true), "it&apos;s &quot;quoted&quot;");
/// assert_eq!(encode_value(42, true), "42");
/// assert_eq!(encode_value(None::<&str>, true), "");
/// ```
pub fn encode_value(value: impl Into<AttributeValue>, double_encode: bool) -> String {
	let text = value.into().resolve().to_scalar_string().unwrap_or_default();
	encode(&text, double_encode, true)
}

fn encode(text: &str, double_encode: bool, quotes: bool) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for (index, ch) in text.char_indices() {
		match ch {
			'&' => {
				if !double_encode && character_reference_len(&text[index..]).is_some() {
					result.push('&');
				} else {
					result.push_str("&amp;");
				}
			}
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' if quotes => result.push_str("&quot;"),
			'\'' if quotes => result.push_str("&apos;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Length of the character reference at the start of `text`, if there is one.
///
/// Named references must be known HTML entities. Numeric references
/// (`&#digits;`, `&#xhex;`) must name a Unicode scalar value other than NUL.
fn character_reference_len(text: &str) -> Option<usize> {
	let bytes = text.as_bytes();
	if bytes.first() != Some(&b'&') {
		return None;
	}

	let (body_start, radix): (usize, Option<u32>) = match bytes.get(1) {
		Some(b'#') => match bytes.get(2) {
			Some(b'x' | b'X') => (3, Some(16)),
			_ => (2, Some(10)),
		},
		Some(b) if b.is_ascii_alphabetic() => (1, None),
		_ => return None,
	};

	let body_len = bytes[body_start..]
		.iter()
		.take_while(|b| match radix {
			Some(16) => b.is_ascii_hexdigit(),
			Some(_) => b.is_ascii_digit(),
			None => b.is_ascii_alphanumeric(),
		})
		.count();
	if body_len == 0 || bytes.get(body_start + body_len) != Some(&b';') {
		return None;
	}

	let body = &text[body_start..body_start + body_len];
	let known = match radix {
		Some(radix) => u32::from_str_radix(body, radix)
			.ok()
			.filter(|&code| code != 0)
			.and_then(char::from_u32)
			.is_some(),
		None => is_named_entity(body),
	};
	known.then_some(body_start + body_len + 1)
}

/// Whether `&name;` is a named character reference.
///
/// Named references decode to one or two characters; anything longer means
/// only a legacy prefix such as `&amp` was decoded.
fn is_named_entity(name: &str) -> bool {
	let reference = format!("&{name};");
	let decoded = html_escape::decode_html_entities(&reference);
	decoded != reference.as_str() && decoded.chars().count() <= 2
}
