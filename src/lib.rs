//! # Reinhardt HTML
//!
//! HTML markup generation helpers: a tag taxonomy with block/inline/void
//! classification, a lenient attribute renderer, CSS class merging, content
//! encoding and small copy-on-write element builders.
//!
//! ## Crates
//!
//! - [`core`] - error messages, [`AttributeValue`] normalization, encoding
//! - [`tags`] - content categories, classifier, tag enums
//! - [`attributes`] - [`render_attributes`], [`data_attributes`], [`css_class`]
//! - [`elements`] - element renderers, builder traits, [`Div`], [`Span`], [`Tag`], ...
//!
//! ## Feature Flags
//!
//! - `elements` (default) - element renderers, builder traits and tag types
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_html::prelude::*;
//!
//! let link = Tag::inline(Inline::A)
//!     .attribute("href", "/docs?page=1&lang=en")
//!     .class(["nav-link", "active"], false)
//!     .content("Docs & guides")
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(
//!     link,
//!     r#"<a class="nav-link active" href="/docs?page=1&amp;lang=en">Docs &amp; guides</a>"#
//! );
//! ```

pub mod attributes;
pub mod core;
#[cfg(feature = "elements")]
pub mod elements;
pub mod tags;

pub use reinhardt_html_core::{
	AttributeValue, Attributes, Closure, EnumValue, HtmlError, HtmlResult, Message, attributes,
	encode_content, encode_content_bytes, encode_value, normalize_array, normalize_value,
};

pub use reinhardt_html_tags::{
	Block, Classification, ContentCategory, Inline, Void, block_tags, classify, inline_tags,
	is_block, is_inline, is_void, is_void_tag, void_tags,
};

pub use reinhardt_html_attributes::{
	RenderOptions, css_class, data_attributes, render_attributes,
};

#[cfg(feature = "elements")]
pub use reinhardt_html_elements::{
	Br, DefaultOp, Defaults, Direction, Div, Element, HasAttributes, HasClass, HasContent,
	HasData, HasDir, HasPrefixAndSuffix, Hr, Img, Kind, P, Span, Tag, stack_depth,
};

/// Commonly used types and traits.
pub mod prelude {
	pub use crate::{
		AttributeValue, Attributes, Block, EnumValue, HtmlError, HtmlResult, Inline, Void,
		attributes, css_class, encode_content, encode_value, render_attributes,
	};

	#[cfg(feature = "elements")]
	pub use crate::{
		Br, Defaults, Direction, Div, HasAttributes, HasClass, HasContent, HasData, HasDir,
		HasPrefixAndSuffix, Hr, Img, P, Span, Tag,
	};
}
