//! Strict `data-*` attribute construction.
//!
//! Unlike [`crate::render`], which silently skips entries it cannot render,
//! this entry point rejects malformed input so that typed callers learn about
//! mistakes immediately.

use reinhardt_html_core::{AttributeValue, Attributes, HtmlError, HtmlResult};

/// Builds `data-*` attributes from a map of keys to strings or closures.
///
/// `Null` yields an empty map. Values are stored unevaluated; closures run when
/// the attributes are rendered.
///
/// # Errors
///
/// - [`HtmlError::DataAttributeKeyMustBeString`] if `value` is a list or a
///   scalar, whose entries only have positional keys
/// - [`HtmlError::DataAttributeKeyNotEmpty`] for an empty key
/// - [`HtmlError::DataAttributeValueMustBeStringOrClosure`] for any other value type
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttributeValue, attributes};
/// use reinhardt_html_attributes::data::data_attributes;
///
/// let data = data_attributes(&attributes! { "id" => "42" }.into()).unwrap();
/// assert_eq!(data["data-id"], AttributeValue::from("42"));
///
/// assert!(data_attributes(&attributes! { "id" => 42 }.into()).is_err());
/// ```
pub fn data_attributes(value: &AttributeValue) -> HtmlResult<Attributes> {
	let map = match value {
		AttributeValue::Null => return Ok(Attributes::new()),
		AttributeValue::Map(map) => map,
		AttributeValue::List(items) if items.is_empty() => return Ok(Attributes::new()),
		_ => {
			return Err(HtmlError::DataAttributeKeyMustBeString {
				key: "0".to_string(),
			});
		}
	};

	let mut data = Attributes::with_capacity(map.len());
	for (key, entry) in map {
		if key.is_empty() {
			return Err(HtmlError::DataAttributeKeyNotEmpty);
		}
		match entry {
			AttributeValue::Str(_) | AttributeValue::Closure(_) => {
				data.insert(format!("data-{key}"), entry.clone());
			}
			other => {
				return Err(HtmlError::DataAttributeValueMustBeStringOrClosure {
					key: key.clone(),
					given: other.type_name().to_string(),
				});
			}
		}
	}
	Ok(data)
}
