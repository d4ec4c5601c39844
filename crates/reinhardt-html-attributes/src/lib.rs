//! Attribute rendering for reinhardt-html.
//!
//! - [`render`] - the lenient renderer ([`render_attributes`], [`RenderOptions`])
//! - [`data`] - the strict `data-*` entry point ([`data_attributes`])
//! - [`css_class`] - class token merging and templated class rendering
//!
//! # Examples
//!
//! ```
//! use reinhardt_html_core::attributes;
//! use reinhardt_html_attributes::{css_class, render_attributes};
//!
//! let mut attrs = attributes! { "id" => "save", "disabled" => true };
//! css_class::add(&mut attrs, "btn btn-primary", false);
//!
//! assert_eq!(
//!     render_attributes(&attrs),
//!     r#" class="btn btn-primary" id="save" disabled"#
//! );
//! ```

pub mod css_class;
pub mod data;
pub mod render;

pub use data::data_attributes;
pub use render::{ATTRIBUTE_ORDER, EXPANDABLE_PREFIXES, RenderOptions, render_attributes};
