//! Element rendering for reinhardt-html.
//!
//! - [`element`] - validated `block`/`inline`/`void` renderers and `begin`/`end`
//! - [`capability`] - copy-on-write builder traits ([`HasAttributes`], [`HasClass`], ...)
//! - [`tags`] - [`Div`], [`P`], [`Span`], [`Hr`], [`Br`], [`Img`] and the generic [`Tag`]
//! - [`defaults`] - the [`Defaults`] registry applied at render time
//!
//! # Examples
//!
//! ```
//! use reinhardt_html_elements::{Div, HasAttributes, HasClass, HasContent};
//!
//! let card = Div::new().id("card").class("card shadow", false).content("1 < 2");
//! assert_eq!(
//!     card.render().unwrap(),
//!     r#"<div class="card shadow" id="card">1 &lt; 2</div>"#
//! );
//! ```

pub mod capability;
pub mod defaults;
pub mod element;
mod stack;
pub mod tags;

pub use capability::{
	Direction, Element, ElementParts, HasAttributes, HasClass, HasContent, HasData, HasDir,
	HasPrefixAndSuffix,
};
pub use defaults::{DefaultOp, Defaults};
pub use stack::stack_depth;
pub use tags::{Br, Div, Hr, Img, Kind, P, Span, Tag};
