//! Tag types.
//!
//! [`Div`], [`P`], [`Span`], [`Hr`], [`Br`] and [`Img`] are fixed-name
//! elements; [`Tag`] renders any tag name of a given [`Kind`]. Void types have
//! no content setters.

use reinhardt_html_core::template;
use reinhardt_html_core::{AttributeValue, HtmlError, HtmlResult, normalize_value};

use crate::capability::{
	Element, ElementParts, HasAttributes, HasClass, HasContent, HasData, HasDir, HasPrefixAndSuffix,
};
use crate::defaults::Defaults;
use crate::element;

/// Operational class an element is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Block,
	Inline,
	Void,
}

fn render_parts(
	kind: Kind,
	tag: &str,
	parts: &ElementParts,
	defaults: &Defaults,
) -> HtmlResult<String> {
	let attributes = defaults.apply(tag, &parts.attributes);
	let markup = match kind {
		Kind::Block => element::block(tag, &parts.content, &attributes)?,
		Kind::Inline => element::inline(tag, &parts.content, &attributes)?,
		Kind::Void if !parts.content.is_empty() => {
			return Err(HtmlError::VoidElementCannotHaveContent {
				tag: element::tag_name(tag)?,
			});
		}
		Kind::Void => element::void(tag, &attributes)?,
	};
	Ok(parts.wrap(&markup))
}

macro_rules! element_type {
	(
		$(#[$meta:meta])*
		$name:ident, $tag:literal, $kind:ident $(, $extra:ident)*
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq)]
		pub struct $name {
			parts: ElementParts,
		}

		impl $name {
			pub const TAG: &'static str = $tag;

			pub fn new() -> Self {
				Self::default()
			}

			/// Renders the element without registered defaults.
			pub fn render(&self) -> HtmlResult<String> {
				self.render_with(&Defaults::new())
			}

			/// Renders the element with the defaults registered for its tag.
			pub fn render_with(&self, defaults: &Defaults) -> HtmlResult<String> {
				render_parts(Kind::$kind, Self::TAG, &self.parts, defaults)
			}
		}

		impl Element for $name {
			fn tag_name(&self) -> &str {
				Self::TAG
			}

			fn parts(&self) -> &ElementParts {
				&self.parts
			}

			fn parts_mut(&mut self) -> &mut ElementParts {
				&mut self.parts
			}
		}

		impl HasAttributes for $name {}
		impl HasClass for $name {}
		impl HasData for $name {}
		impl HasDir for $name {}
		impl HasPrefixAndSuffix for $name {}
		$(impl $extra for $name {})*
	};
}

element_type! {
	/// `<div>`; also renders in two halves with [`Div::begin`] and [`Div::end`].
	Div, "div", Block, HasContent
}

element_type! {
	/// `<p>`
	P, "p", Block, HasContent
}

element_type! {
	/// `<span>`
	Span, "span", Inline, HasContent
}

element_type! {
	/// `<hr>`
	Hr, "hr", Void
}

element_type! {
	/// `<br>`
	Br, "br", Void
}

element_type! {
	/// `<img>`
	Img, "img", Void
}

impl Img {
	pub fn src(&self, src: impl Into<AttributeValue>) -> Self {
		self.attribute("src", src)
	}

	pub fn alt(&self, alt: impl Into<AttributeValue>) -> Self {
		self.attribute("alt", alt)
	}
}

impl Div {
	/// Renders the prefix, the opening tag and any content, leaving the
	/// element open on this thread until [`Div::end`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_elements::{Div, HasClass};
	///
	/// let mut html = Div::new().class("row", false).begin().unwrap();
	/// html.push_str("cells");
	/// html.push_str(&Div::end().unwrap());
	/// assert_eq!(html, r#"<div class="row">cells</div>"#);
	/// ```
	pub fn begin(&self) -> HtmlResult<String> {
		self.begin_with(&Defaults::new())
	}

	pub fn begin_with(&self, defaults: &Defaults) -> HtmlResult<String> {
		let attributes = defaults.apply(Self::TAG, &self.parts.attributes);
		let open = element::begin_framed(Self::TAG, &attributes, &self.parts.suffix)?;
		let open = format!("{open}{}", self.parts.content);
		Ok(template::render(
			r"{prefix}\n{tag}",
			&[("{prefix}", self.parts.prefix.as_str()), ("{tag}", open.as_str())],
		))
	}

	/// Closes the innermost `div` opened with [`Div::begin`], followed by its suffix.
	///
	/// # Errors
	///
	/// [`HtmlError::EndWithoutBegin`] or [`HtmlError::MismatchedEnd`].
	pub fn end() -> HtmlResult<String> {
		element::end(Self::TAG)
	}
}

/// An element with a caller-chosen tag name.
///
/// The name is validated against its [`Kind`] when rendered.
///
/// ```
/// use reinhardt_html_core::HtmlError;
/// use reinhardt_html_elements::{HasContent, Tag};
///
/// assert_eq!(Tag::inline("strong").content("!").render().unwrap(), "<strong>!</strong>");
/// assert_eq!(
///     Tag::block("span").render(),
///     Err(HtmlError::InvalidBlockElement { tag: "span".into() })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
	kind: Kind,
	name: String,
	parts: ElementParts,
}

impl Tag {
	/// Accepts strings and tag enums; the name is lowercased.
	pub fn new(kind: Kind, tag: impl Into<AttributeValue>) -> Self {
		let name = normalize_value(&tag.into())
			.to_scalar_string()
			.unwrap_or_default()
			.to_ascii_lowercase();
		Self {
			kind,
			name,
			parts: ElementParts::default(),
		}
	}

	pub fn block(tag: impl Into<AttributeValue>) -> Self {
		Self::new(Kind::Block, tag)
	}

	pub fn inline(tag: impl Into<AttributeValue>) -> Self {
		Self::new(Kind::Inline, tag)
	}

	pub fn void(tag: impl Into<AttributeValue>) -> Self {
		Self::new(Kind::Void, tag)
	}

	pub fn kind(&self) -> Kind {
		self.kind
	}

	pub fn render(&self) -> HtmlResult<String> {
		self.render_with(&Defaults::new())
	}

	pub fn render_with(&self, defaults: &Defaults) -> HtmlResult<String> {
		render_parts(self.kind, &self.name, &self.parts, defaults)
	}
}

impl Element for Tag {
	fn tag_name(&self) -> &str {
		&self.name
	}

	fn parts(&self) -> &ElementParts {
		&self.parts
	}

	fn parts_mut(&mut self) -> &mut ElementParts {
		&mut self.parts
	}
}

impl HasAttributes for Tag {}
impl HasClass for Tag {}
impl HasContent for Tag {}
impl HasData for Tag {}
impl HasDir for Tag {}
impl HasPrefixAndSuffix for Tag {}
