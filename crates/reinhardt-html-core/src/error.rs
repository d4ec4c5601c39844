//! Error messages and the error type raised by strict entry points.
//!
//! Every failure in reinhardt-html is an invalid-argument condition detected
//! synchronously at the call site. Each [`HtmlError`] variant is formatted from
//! exactly one [`Message`] template, so callers that want the raw `printf`-style
//! template (for translation catalogs, for instance) can get it from
//! [`HtmlError::kind`].

/// Closed set of parameterized error templates.
///
/// Templates use `%s` placeholders, interpolated in order by [`Message::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
	EmptyTagName,
	InvalidBlockElement,
	InvalidInlineElement,
	InvalidVoidElement,
	VoidElementCannotHaveContent,
	ValueCannotBeEmpty,
	ValueNotInList,
	DataAttributeKeyMustBeString,
	DataAttributeKeyNotEmpty,
	DataAttributeValueMustBeStringOrClosure,
	EndWithoutBegin,
	MismatchedEnd,
}

impl Message {
	/// Returns the `printf`-style template for this message.
	pub const fn template(self) -> &'static str {
		match self {
			Self::EmptyTagName => "Tag name cannot be empty.",
			Self::InvalidBlockElement => "Invalid block element: '%s'.",
			Self::InvalidInlineElement => "Invalid inline element: '%s'.",
			Self::InvalidVoidElement => "Invalid void element: '%s'.",
			Self::VoidElementCannotHaveContent => "Void element '%s' cannot have content.",
			Self::ValueCannotBeEmpty => "The value for the '%s' attribute cannot be empty.",
			Self::ValueNotInList => {
				"The value '%s' for the '%s' attribute is not in the list of allowed values: '%s'."
			}
			Self::DataAttributeKeyMustBeString => "Data attribute key must be a string, '%s' given.",
			Self::DataAttributeKeyNotEmpty => "Data attribute key cannot be empty.",
			Self::DataAttributeValueMustBeStringOrClosure => {
				"Data attribute value for '%s' must be a string or a closure, '%s' given."
			}
			Self::EndWithoutBegin => "Cannot end '%s': no element has been started.",
			Self::MismatchedEnd => "Cannot end '%s': the innermost started element is '%s'.",
		}
	}

	/// Interpolates `args` into the template.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Message;
	///
	/// assert_eq!(
	///     Message::InvalidBlockElement.format(&["span"]),
	///     "Invalid block element: 'span'."
	/// );
	/// ```
	pub fn format(self, args: &[&str]) -> String {
		sprintf(self.template(), args)
	}
}

/// Minimal `sprintf`: `%s` consumes the next argument, `%%` is a literal percent.
///
/// Missing arguments render as an empty string; surplus arguments are ignored.
/// Any other `%` sequence is copied through untouched.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::sprintf;
///
/// assert_eq!(sprintf("bg-%s", &["blue"]), "bg-blue");
/// assert_eq!(sprintf("w-%s%%", &["50"]), "w-50%");
/// ```
pub fn sprintf(template: &str, args: &[&str]) -> String {
	let mut result = String::with_capacity(template.len() + 16);
	let mut args = args.iter();
	let mut chars = template.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch != '%' {
			result.push(ch);
			continue;
		}
		match chars.peek() {
			Some('s') => {
				chars.next();
				if let Some(arg) = args.next() {
					result.push_str(arg);
				}
			}
			Some('%') => {
				chars.next();
				result.push('%');
			}
			_ => result.push('%'),
		}
	}
	result
}

fn join_allowed(allowed: &[String]) -> String {
	allowed.join(", ")
}

/// Errors raised by classifiers, strict entry points and element renderers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
	#[error("Tag name cannot be empty.")]
	EmptyTagName,
	#[error("Invalid block element: '{tag}'.")]
	InvalidBlockElement { tag: String },
	#[error("Invalid inline element: '{tag}'.")]
	InvalidInlineElement { tag: String },
	#[error("Invalid void element: '{tag}'.")]
	InvalidVoidElement { tag: String },
	#[error("Void element '{tag}' cannot have content.")]
	VoidElementCannotHaveContent { tag: String },
	#[error("The value for the '{attribute}' attribute cannot be empty.")]
	ValueCannotBeEmpty { attribute: String },
	#[error(
		"The value '{value}' for the '{attribute}' attribute is not in the list of allowed values: '{}'.",
		join_allowed(.allowed)
	)]
	ValueNotInList {
		value: String,
		attribute: String,
		allowed: Vec<String>,
	},
	#[error("Data attribute key must be a string, '{key}' given.")]
	DataAttributeKeyMustBeString { key: String },
	#[error("Data attribute key cannot be empty.")]
	DataAttributeKeyNotEmpty,
	#[error("Data attribute value for '{key}' must be a string or a closure, '{given}' given.")]
	DataAttributeValueMustBeStringOrClosure { key: String, given: String },
	#[error("Cannot end '{tag}': no element has been started.")]
	EndWithoutBegin { tag: String },
	#[error("Cannot end '{tag}': the innermost started element is '{open}'.")]
	MismatchedEnd { tag: String, open: String },
}

pub type HtmlResult<T> = Result<T, HtmlError>;

impl HtmlError {
	/// Returns the message template this error is formatted from.
	pub fn kind(&self) -> Message {
		match self {
			Self::EmptyTagName => Message::EmptyTagName,
			Self::InvalidBlockElement { .. } => Message::InvalidBlockElement,
			Self::InvalidInlineElement { .. } => Message::InvalidInlineElement,
			Self::InvalidVoidElement { .. } => Message::InvalidVoidElement,
			Self::VoidElementCannotHaveContent { .. } => Message::VoidElementCannotHaveContent,
			Self::ValueCannotBeEmpty { .. } => Message::ValueCannotBeEmpty,
			Self::ValueNotInList { .. } => Message::ValueNotInList,
			Self::DataAttributeKeyMustBeString { .. } => Message::DataAttributeKeyMustBeString,
			Self::DataAttributeKeyNotEmpty => Message::DataAttributeKeyNotEmpty,
			Self::DataAttributeValueMustBeStringOrClosure { .. } => {
				Message::DataAttributeValueMustBeStringOrClosure
			}
			Self::EndWithoutBegin { .. } => Message::EndWithoutBegin,
			Self::MismatchedEnd { .. } => Message::MismatchedEnd,
		}
	}

	/// Returns the arguments interpolated into [`HtmlError::kind`]'s template.
	pub fn args(&self) -> Vec<String> {
		match self {
			Self::EmptyTagName | Self::DataAttributeKeyNotEmpty => Vec::new(),
			Self::InvalidBlockElement { tag }
			| Self::InvalidInlineElement { tag }
			| Self::InvalidVoidElement { tag }
			| Self::VoidElementCannotHaveContent { tag }
			| Self::EndWithoutBegin { tag } => vec![tag.clone()],
			Self::ValueCannotBeEmpty { attribute } => vec![attribute.clone()],
			Self::ValueNotInList {
				value,
				attribute,
				allowed,
			} => vec![value.clone(), attribute.clone(), join_allowed(allowed)],
			Self::DataAttributeKeyMustBeString { key } => vec![key.clone()],
			Self::DataAttributeValueMustBeStringOrClosure { key, given } => {
				vec![key.clone(), given.clone()]
			}
			Self::MismatchedEnd { tag, open } => vec![tag.clone(), open.clone()],
		}
	}
}
