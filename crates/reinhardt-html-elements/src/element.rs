//! Validated element renderers.
//!
//! Each renderer normalizes the tag identifier (strings and tag enums are both
//! accepted), checks it belongs to the required operational class and emits the
//! markup. Content is inserted as given; callers encode it.

use reinhardt_html_attributes::render_attributes;
use reinhardt_html_core::template;
use reinhardt_html_core::{AttributeValue, Attributes, HtmlError, HtmlResult, normalize_value};
use reinhardt_html_tags::{is_block, is_inline, is_void};

use crate::stack::{self, Frame};

/// Resolves a tag identifier to its lowercase name.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] if the identifier normalizes to nothing.
pub fn tag_name(tag: impl Into<AttributeValue>) -> HtmlResult<String> {
	let name = normalize_value(&tag.into())
		.to_scalar_string()
		.unwrap_or_default();
	if name.is_empty() {
		return Err(HtmlError::EmptyTagName);
	}
	Ok(name.to_ascii_lowercase())
}

fn block_name(tag: impl Into<AttributeValue>) -> HtmlResult<String> {
	let name = tag_name(tag)?;
	if !is_block(&name)? {
		return Err(HtmlError::InvalidBlockElement { tag: name });
	}
	Ok(name)
}

/// Renders a block element.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] or [`HtmlError::InvalidBlockElement`].
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attributes;
/// use reinhardt_html_elements::element::block;
///
/// let html = block("div", "Hello", &attributes! { "id" => "greeting" }).unwrap();
/// assert_eq!(html, r#"<div id="greeting">Hello</div>"#);
///
/// assert!(block("span", "", &attributes! {}).is_err());
/// ```
pub fn block(
	tag: impl Into<AttributeValue>,
	content: &str,
	attributes: &Attributes,
) -> HtmlResult<String> {
	let name = block_name(tag)?;
	Ok(format!(
		"<{name}{}>{content}</{name}>",
		render_attributes(attributes)
	))
}

/// Renders the opening half of a block element and records it as open on
/// this thread. Pair with [`end`].
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] or [`HtmlError::InvalidBlockElement`].
pub fn begin(tag: impl Into<AttributeValue>, attributes: &Attributes) -> HtmlResult<String> {
	begin_framed(tag, attributes, "")
}

pub(crate) fn begin_framed(
	tag: impl Into<AttributeValue>,
	attributes: &Attributes,
	suffix: &str,
) -> HtmlResult<String> {
	let name = block_name(tag)?;
	let open = format!("<{name}{}>", render_attributes(attributes));
	stack::push(Frame {
		tag: name,
		suffix: suffix.to_string(),
	});
	Ok(open)
}

/// Renders the closing half of the innermost element opened by [`begin`].
///
/// # Errors
///
/// - [`HtmlError::EmptyTagName`] or [`HtmlError::InvalidBlockElement`]
/// - [`HtmlError::EndWithoutBegin`] if nothing is open on this thread
/// - [`HtmlError::MismatchedEnd`] if the innermost open element is another tag
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attributes;
/// use reinhardt_html_elements::element::{begin, end};
///
/// let mut html = begin("section", &attributes! { "class" => "card" }).unwrap();
/// html.push_str("body");
/// html.push_str(&end("section").unwrap());
/// assert_eq!(html, r#"<section class="card">body</section>"#);
/// ```
pub fn end(tag: impl Into<AttributeValue>) -> HtmlResult<String> {
	let name = block_name(tag)?;
	let frame = stack::pop(&name)?;
	let close = format!("</{name}>");
	Ok(template::render(
		r"{tag}\n{suffix}",
		&[("{tag}", close.as_str()), ("{suffix}", frame.suffix.as_str())],
	))
}

/// Renders an inline element.
///
/// # Errors
///
/// - [`HtmlError::EmptyTagName`]
/// - [`HtmlError::VoidElementCannotHaveContent`] for a void tag with content
/// - [`HtmlError::InvalidInlineElement`] for any other non-inline tag
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{HtmlError, attributes};
/// use reinhardt_html_elements::element::inline;
///
/// assert_eq!(inline("em", "hi", &attributes! {}).unwrap(), "<em>hi</em>");
/// assert_eq!(
///     inline("br", "text", &attributes! {}),
///     Err(HtmlError::VoidElementCannotHaveContent { tag: "br".into() })
/// );
/// ```
pub fn inline(
	tag: impl Into<AttributeValue>,
	content: &str,
	attributes: &Attributes,
) -> HtmlResult<String> {
	let name = tag_name(tag)?;
	if !content.is_empty() && is_void(&name)? {
		return Err(HtmlError::VoidElementCannotHaveContent { tag: name });
	}
	if !is_inline(&name)? {
		return Err(HtmlError::InvalidInlineElement { tag: name });
	}
	Ok(format!(
		"<{name}{}>{content}</{name}>",
		render_attributes(attributes)
	))
}

/// Renders a void element: no content, no closing tag.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] or [`HtmlError::InvalidVoidElement`].
pub fn void(tag: impl Into<AttributeValue>, attributes: &Attributes) -> HtmlResult<String> {
	let name = tag_name(tag)?;
	if !is_void(&name)? {
		return Err(HtmlError::InvalidVoidElement { tag: name });
	}
	Ok(format!("<{name}{}>", render_attributes(attributes)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stack::stack_depth;
	use reinhardt_html_core::attributes;
	use reinhardt_html_tags::{Block, Inline, Void};
	use rstest::rstest;

	#[rstest]
	#[case(AttributeValue::from("div"), "<div>x</div>")]
	#[case(AttributeValue::from("DIV"), "<div>x</div>")]
	#[case(Block::Article.into(), "<article>x</article>")]
	fn test_block(#[case] tag: AttributeValue, #[case] expected: &str) {
		assert_eq!(block(tag, "x", &Attributes::new()).unwrap(), expected);
	}

	#[rstest]
	#[case("span")]
	#[case("br")]
	#[case("table")]
	fn test_block_rejects_non_block(#[case] tag: &str) {
		assert_eq!(
			block(tag, "", &Attributes::new()),
			Err(HtmlError::InvalidBlockElement { tag: tag.into() })
		);
	}

	#[rstest]
	#[case(AttributeValue::from(""))]
	#[case(AttributeValue::Null)]
	fn test_empty_tag_name(#[case] tag: AttributeValue) {
		assert_eq!(
			block(tag.clone(), "", &Attributes::new()),
			Err(HtmlError::EmptyTagName)
		);
		assert_eq!(
			inline(tag.clone(), "", &Attributes::new()),
			Err(HtmlError::EmptyTagName)
		);
		assert_eq!(void(tag, &Attributes::new()), Err(HtmlError::EmptyTagName));
	}

	#[rstest]
	fn test_inline_with_attributes() {
		let attrs = attributes! { "href" => "/a?b=1&c=2", "class" => "link" };
		assert_eq!(
			inline(Inline::A, "go", &attrs).unwrap(),
			r#"<a class="link" href="/a?b=1&amp;c=2">go</a>"#
		);
	}

	#[rstest]
	fn test_inline_void_without_content_is_invalid_inline() {
		assert_eq!(
			inline("hr", "", &Attributes::new()),
			Err(HtmlError::InvalidInlineElement { tag: "hr".into() })
		);
	}

	#[rstest]
	fn test_inline_rejects_block() {
		assert_eq!(
			inline("div", "x", &Attributes::new()),
			Err(HtmlError::InvalidInlineElement { tag: "div".into() })
		);
	}

	#[rstest]
	#[case(AttributeValue::from("br"), attributes! {}, "<br>")]
	#[case(
		Void::Img.into(),
		attributes! { "alt" => "", "src" => "a.png" },
		r#"<img src="a.png">"#
	)]
	#[case(
		AttributeValue::from("INPUT"),
		attributes! { "type" => "checkbox", "checked" => true },
		r#"<input type="checkbox" checked>"#
	)]
	fn test_void(#[case] tag: AttributeValue, #[case] attrs: Attributes, #[case] expected: &str) {
		assert_eq!(void(tag, &attrs).unwrap(), expected);
	}

	#[rstest]
	fn test_void_rejects_non_void() {
		assert_eq!(
			void("p", &Attributes::new()),
			Err(HtmlError::InvalidVoidElement { tag: "p".into() })
		);
	}

	#[rstest]
	fn test_begin_end_nesting() {
		// Act
		let mut html = begin("div", &attributes! { "id" => "outer" }).unwrap();
		html.push_str(&begin(Block::Section, &Attributes::new()).unwrap());
		assert_eq!(stack_depth(), 2);
		html.push_str(&end("section").unwrap());
		html.push_str(&end("div").unwrap());

		// Assert
		assert_eq!(html, r#"<div id="outer"><section></section></div>"#);
		assert_eq!(stack_depth(), 0);
	}

	#[rstest]
	fn test_end_without_begin() {
		assert_eq!(
			end("div"),
			Err(HtmlError::EndWithoutBegin { tag: "div".into() })
		);
	}

	#[rstest]
	fn test_begin_rejects_inline() {
		assert_eq!(
			begin("span", &Attributes::new()),
			Err(HtmlError::InvalidBlockElement { tag: "span".into() })
		);
		assert_eq!(stack_depth(), 0);
	}
}
