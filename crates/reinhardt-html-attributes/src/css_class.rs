//! CSS class token merging.
//!
//! Class values may be a string of whitespace-separated tokens, a list of
//! strings, nulls and enums, or a single enum. Only string values contribute;
//! integer-backed enums and other scalars are ignored. Tokens containing `<`,
//! `>`, `@` or `!` are dropped and the rest are deduplicated in first-seen order.

use indexmap::IndexSet;

use reinhardt_html_core::validate::one_of;
use reinhardt_html_core::{AttributeValue, Attributes, HtmlResult, normalize_value, sprintf};

const REJECTED: &[char] = &['<', '>', '@', '!'];

/// Splits `value` into valid, deduplicated class tokens.
///
/// # Examples
///
/// ```
/// use reinhardt_html_attributes::css_class::normalize;
///
/// assert_eq!(normalize("btn  btn\tprimary"), ["btn", "primary"]);
/// assert_eq!(normalize(vec![Some("a"), None, Some("b<c")]), ["a"]);
/// ```
pub fn normalize(value: impl Into<AttributeValue>) -> Vec<String> {
	let mut tokens = IndexSet::new();
	collect(&value.into(), &mut tokens);
	tokens.into_iter().collect()
}

/// Normalized tokens joined by a single space.
pub fn to_string(value: impl Into<AttributeValue>) -> String {
	normalize(value).join(" ")
}

fn collect(value: &AttributeValue, tokens: &mut IndexSet<String>) {
	match normalize_value(&value.resolve()) {
		AttributeValue::Str(text) => {
			for token in text.split_whitespace() {
				if !token.contains(REJECTED) {
					tokens.insert(token.to_string());
				}
			}
		}
		AttributeValue::List(items) => {
			for item in &items {
				collect(item, tokens);
			}
		}
		_ => {}
	}
}

/// Merges `classes` into the `class` entry of `attributes`.
///
/// With `replace` unset the new tokens are appended after the existing ones,
/// skipping duplicates. With `replace` set they overwrite the existing value.
/// Input that normalizes to no tokens never touches the map, so replacing with
/// an empty value does not clear an existing class.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttributeValue, attributes};
/// use reinhardt_html_attributes::css_class::add;
///
/// let mut attrs = attributes! { "class" => "a b" };
/// add(&mut attrs, "b c", false);
/// assert_eq!(attrs["class"], AttributeValue::from("a b c"));
///
/// add(&mut attrs, "x", true);
/// assert_eq!(attrs["class"], AttributeValue::from("x"));
/// ```
pub fn add(attributes: &mut Attributes, classes: impl Into<AttributeValue>, replace: bool) {
	let incoming = normalize(classes);
	if incoming.is_empty() {
		return;
	}

	let merged = if replace {
		incoming
	} else {
		let mut tokens = IndexSet::new();
		if let Some(existing) = attributes.get("class") {
			collect(existing, &mut tokens);
		}
		tokens.extend(incoming);
		tokens.into_iter().collect()
	};

	attributes.insert("class".to_string(), AttributeValue::Str(merged.join(" ")));
}

/// Validates `value` against `allowed` and substitutes it into `template`.
///
/// # Errors
///
/// - [`reinhardt_html_core::HtmlError::ValueCannotBeEmpty`] if `value` is empty
/// - [`reinhardt_html_core::HtmlError::ValueNotInList`] if `value` is not allowed
///
/// # Examples
///
/// ```
/// use reinhardt_html_attributes::css_class::render;
///
/// assert_eq!(render("blue", "bg-%s", ["blue", "red"]).unwrap(), "bg-blue");
/// assert!(render("indigo", "bg-%s", ["blue", "red"]).is_err());
/// ```
pub fn render<I, T>(value: impl Into<AttributeValue>, template: &str, allowed: I) -> HtmlResult<String>
where
	I: IntoIterator<Item = T>,
	T: Into<AttributeValue>,
{
	let value = one_of("class", &value.into(), allowed)?;
	Ok(sprintf(template, &[value.as_str()]))
}
