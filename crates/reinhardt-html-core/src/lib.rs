//! Core building blocks for reinhardt-html.
//!
//! This crate holds the pieces every other reinhardt-html crate leans on:
//!
//! - [`error`] - the closed set of [`Message`] templates and the [`HtmlError`] type
//! - [`value`] - [`AttributeValue`], enum-like values and their normalization
//! - [`encode`] - HTML entity encoding for body content and attribute values
//! - [`template`] - line-based token substitution used to stitch fragments
//! - [`validate`] - allow-list checks shared by class and `dir` helpers

pub mod encode;
pub mod error;
pub mod template;
pub mod validate;
pub mod value;

pub use encode::{encode_content, encode_content_bytes, encode_value};
pub use error::{HtmlError, HtmlResult, Message, sprintf};
pub use value::{
	AttributeValue, Attributes, Backing, Closure, EnumValue, normalize_array, normalize_value,
};
