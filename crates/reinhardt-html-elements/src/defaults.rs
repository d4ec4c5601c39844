//! Registry of default attributes applied to elements at render time.
//!
//! Defaults are registered per tag name and applied late, when an element is
//! rendered with [`crate::Div::render_with`] and friends. Operations run in
//! registration order so the last write wins, and the element's own attributes
//! are layered on top: its scalar attributes replace defaults and its classes
//! are appended after the default classes.
//!
//! ```
//! use reinhardt_html_elements::{Defaults, DefaultOp, Div, HasClass};
//!
//! let mut defaults = Defaults::new();
//! defaults.set("div", [DefaultOp::class("container"), DefaultOp::attribute("role", "region")]);
//!
//! let html = Div::new().class("wide", false).render_with(&defaults).unwrap();
//! assert_eq!(html, r#"<div class="container wide" role="region"></div>"#);
//! ```

use indexmap::IndexMap;

use reinhardt_html_attributes::css_class;
use reinhardt_html_core::{AttributeValue, Attributes};

/// A single default applied to an element's attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultOp {
	/// Sets an attribute, overwriting any earlier value.
	Attribute { name: String, value: AttributeValue },
	/// Adds CSS classes, see [`css_class::add`].
	Class {
		value: AttributeValue,
		replace: bool,
	},
}

impl DefaultOp {
	pub fn attribute(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		Self::Attribute {
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn class(value: impl Into<AttributeValue>) -> Self {
		Self::Class {
			value: value.into(),
			replace: false,
		}
	}

	fn apply(&self, attributes: &mut Attributes) {
		match self {
			Self::Attribute { name, value } => {
				attributes.insert(name.clone(), value.clone());
			}
			Self::Class { value, replace } => css_class::add(attributes, value.clone(), *replace),
		}
	}
}

/// Per-tag default operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
	entries: IndexMap<String, Vec<DefaultOp>>,
}

impl Defaults {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the defaults registered for `tag`.
	pub fn set(&mut self, tag: &str, ops: impl IntoIterator<Item = DefaultOp>) {
		self.entries
			.insert(tag.to_ascii_lowercase(), ops.into_iter().collect());
	}

	/// Appends to the defaults registered for `tag`.
	pub fn extend(&mut self, tag: &str, ops: impl IntoIterator<Item = DefaultOp>) {
		self.entries
			.entry(tag.to_ascii_lowercase())
			.or_default()
			.extend(ops);
	}

	/// Defaults registered for `tag`, in application order.
	pub fn get(&self, tag: &str) -> &[DefaultOp] {
		self.entries
			.get(tag.to_ascii_lowercase().as_str())
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn remove(&mut self, tag: &str) -> Option<Vec<DefaultOp>> {
		self.entries.shift_remove(tag.to_ascii_lowercase().as_str())
	}

	/// Drops every registration.
	pub fn reset(&mut self) {
		self.entries.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns `attributes` with the defaults for `tag` underneath.
	///
	/// The element's `class` is always appended to the default classes, even
	/// when it was set with `replace`.
	pub fn apply(&self, tag: &str, attributes: &Attributes) -> Attributes {
		let ops = self.get(tag);
		if ops.is_empty() {
			return attributes.clone();
		}

		let mut merged = Attributes::new();
		for op in ops {
			op.apply(&mut merged);
		}
		for (name, value) in attributes {
			if name == "class" {
				css_class::add(&mut merged, value.clone(), false);
			} else {
				merged.insert(name.clone(), value.clone());
			}
		}
		merged
	}
}

/// Builds a registry from a JSON object of tag names to attribute objects.
///
/// `class` entries become class operations and every other key an attribute
/// operation. Entries that are not objects are skipped.
///
/// ```
/// use reinhardt_html_elements::{Defaults, DefaultOp};
///
/// let defaults = Defaults::from(serde_json::json!({
///     "img": { "loading": "lazy", "class": "responsive" },
/// }));
/// assert_eq!(
///     defaults.get("img"),
///     [DefaultOp::attribute("loading", "lazy"), DefaultOp::class("responsive")]
/// );
/// ```
impl From<serde_json::Value> for Defaults {
	fn from(value: serde_json::Value) -> Self {
		let mut defaults = Self::new();
		let serde_json::Value::Object(tags) = value else {
			tracing::debug!("ignoring defaults that are not a JSON object");
			return defaults;
		};

		for (tag, attributes) in tags {
			let serde_json::Value::Object(attributes) = attributes else {
				tracing::debug!(tag = %tag, "ignoring defaults entry that is not a JSON object");
				continue;
			};
			let ops = attributes.into_iter().map(|(name, value)| {
				if name == "class" {
					DefaultOp::class(value)
				} else {
					DefaultOp::attribute(name, value)
				}
			});
			defaults.set(&tag, ops);
		}
		defaults
	}
}
