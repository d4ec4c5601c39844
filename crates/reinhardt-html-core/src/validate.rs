//! Allow-list validation for string-or-enum parameters.

use crate::error::{HtmlError, HtmlResult};
use crate::value::AttributeValue;

/// Checks that `value` normalizes to one of `allowed` and returns the normalized string.
///
/// `allowed` entries are normalized too, so enum cases and plain strings can be
/// mixed. The error message quotes the value as given (enum case names are not
/// normalized) and the allowed values joined by `", "`.
///
/// # Errors
///
/// - [`HtmlError::ValueCannotBeEmpty`] if `value` normalizes to an empty string or `Null`
/// - [`HtmlError::ValueNotInList`] if it is not one of `allowed`
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::validate::one_of;
///
/// assert_eq!(one_of("dir", &"rtl".into(), ["ltr", "rtl", "auto"]).unwrap(), "rtl");
/// assert!(one_of("dir", &"up".into(), ["ltr", "rtl", "auto"]).is_err());
/// ```
pub fn one_of<I, T>(attribute: &str, value: &AttributeValue, allowed: I) -> HtmlResult<String>
where
	I: IntoIterator<Item = T>,
	T: Into<AttributeValue>,
{
	let normalized = value.resolve().to_scalar_string().unwrap_or_default();
	if normalized.is_empty() {
		return Err(HtmlError::ValueCannotBeEmpty {
			attribute: attribute.to_string(),
		});
	}

	let allowed: Vec<String> = allowed
		.into_iter()
		.filter_map(|candidate| candidate.into().to_scalar_string())
		.collect();

	if allowed.contains(&normalized) {
		Ok(normalized)
	} else {
		Err(HtmlError::ValueNotInList {
			value: value.describe(),
			attribute: attribute.to_string(),
			allowed,
		})
	}
}
