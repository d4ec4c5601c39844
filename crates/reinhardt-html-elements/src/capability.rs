//! Builder capabilities shared by tag types.
//!
//! Every setter clones the receiver and returns the modified copy; the
//! receiver itself is never changed, so a configured element can be used as a
//! template for any number of variations.
//!
//! ```
//! use reinhardt_html_elements::{Div, HasClass};
//!
//! let base = Div::new().class("card", false);
//! let primary = base.class("card-primary", false);
//!
//! assert_eq!(base.render().unwrap(), r#"<div class="card"></div>"#);
//! assert_eq!(primary.render().unwrap(), r#"<div class="card card-primary"></div>"#);
//! ```

use serde::{Deserialize, Serialize};

use reinhardt_html_attributes::{css_class, data_attributes};
use reinhardt_html_core::template;
use reinhardt_html_core::validate::one_of;
use reinhardt_html_core::{AttributeValue, Attributes, EnumValue, HtmlResult, encode_content};

/// Mutable state behind every tag type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementParts {
	pub attributes: Attributes,
	pub content: String,
	pub prefix: String,
	pub suffix: String,
}

impl ElementParts {
	/// Places `markup` between the prefix and suffix, one per line.
	///
	/// Empty fragments leave no blank line behind.
	pub fn wrap(&self, markup: &str) -> String {
		template::render(
			r"{prefix}\n{tag}\n{suffix}",
			&[
				("{prefix}", self.prefix.as_str()),
				("{tag}", markup),
				("{suffix}", self.suffix.as_str()),
			],
		)
	}
}

/// A renderable element with copy-on-write state.
pub trait Element: Clone {
	/// Lowercase tag name; also the key for registered defaults.
	fn tag_name(&self) -> &str;

	fn parts(&self) -> &ElementParts;

	fn parts_mut(&mut self) -> &mut ElementParts;

	/// Returns a copy with `update` applied to its state.
	fn with_parts(&self, update: impl FnOnce(&mut ElementParts)) -> Self {
		let mut next = self.clone();
		update(next.parts_mut());
		next
	}
}

pub trait HasAttributes: Element {
	/// Current attributes.
	fn get_attributes(&self) -> &Attributes {
		&self.parts().attributes
	}

	/// Merges `attributes` into the existing ones; later keys win.
	fn attributes(&self, attributes: Attributes) -> Self {
		self.with_parts(|parts| parts.attributes.extend(attributes))
	}

	fn attribute(&self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		let (name, value) = (name.into(), value.into());
		self.with_parts(|parts| {
			parts.attributes.insert(name, value);
		})
	}

	fn remove_attribute(&self, name: &str) -> Self {
		self.with_parts(|parts| {
			parts.attributes.shift_remove(name);
		})
	}

	fn id(&self, id: impl Into<AttributeValue>) -> Self {
		self.attribute("id", id)
	}

	fn title(&self, title: impl Into<AttributeValue>) -> Self {
		self.attribute("title", title)
	}
}

pub trait HasClass: Element {
	/// Adds CSS classes; with `replace` set they overwrite the current ones.
	///
	/// `replace` only affects the element's own classes. Classes registered in
	/// [`crate::Defaults`] are applied at render time and the element's classes
	/// are always appended after them.
	///
	/// See [`css_class::add`] for the merge rules.
	fn class(&self, classes: impl Into<AttributeValue>, replace: bool) -> Self {
		let classes = classes.into();
		self.with_parts(|parts| css_class::add(&mut parts.attributes, classes, replace))
	}
}

/// Text direction for the `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
	Auto,
}

impl Direction {
	pub const ALL: [Direction; 3] = [Self::Ltr, Self::Rtl, Self::Auto];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
			Self::Auto => "auto",
		}
	}

	const fn case_name(self) -> &'static str {
		match self {
			Self::Ltr => "Ltr",
			Self::Rtl => "Rtl",
			Self::Auto => "Auto",
		}
	}
}

impl From<Direction> for EnumValue {
	fn from(direction: Direction) -> Self {
		EnumValue::backed(direction.case_name(), direction.as_str())
	}
}

impl From<Direction> for AttributeValue {
	fn from(direction: Direction) -> Self {
		AttributeValue::Enum(direction.into())
	}
}

pub trait HasDir: Element {
	/// Sets the `dir` attribute from a [`Direction`] or its string form.
	///
	/// # Errors
	///
	/// [`reinhardt_html_core::HtmlError::ValueCannotBeEmpty`] or
	/// [`reinhardt_html_core::HtmlError::ValueNotInList`] for anything other than
	/// `ltr`, `rtl` or `auto`.
	fn dir(&self, dir: impl Into<AttributeValue>) -> HtmlResult<Self> {
		let dir = one_of("dir", &dir.into(), Direction::ALL)?;
		Ok(self.with_parts(|parts| {
			parts.attributes.insert("dir".to_string(), dir.into());
		}))
	}
}

pub trait HasContent: Element {
	/// Appends text, HTML-encoded.
	fn content(&self, text: impl AsRef<str>) -> Self {
		let encoded = encode_content(text.as_ref(), true);
		self.with_parts(|parts| parts.content.push_str(&encoded))
	}

	/// Appends markup verbatim. The caller guarantees it is safe.
	fn html(&self, markup: impl AsRef<str>) -> Self {
		let markup = markup.as_ref().to_string();
		self.with_parts(|parts| parts.content.push_str(&markup))
	}

	fn get_content(&self) -> &str {
		&self.parts().content
	}
}

pub trait HasData: Element {
	/// Adds `data-*` attributes from a map of strings or closures.
	///
	/// # Errors
	///
	/// The strict data-attribute errors of [`data_attributes`].
	fn data(&self, data: impl Into<AttributeValue>) -> HtmlResult<Self> {
		let data = data_attributes(&data.into())?;
		Ok(self.with_parts(|parts| parts.attributes.extend(data)))
	}
}

pub trait HasPrefixAndSuffix: Element {
	/// Markup rendered on its own line before the element.
	fn prefix(&self, prefix: impl Into<String>) -> Self {
		let prefix = prefix.into();
		self.with_parts(|parts| parts.prefix = prefix)
	}

	/// Markup rendered on its own line after the element.
	fn suffix(&self, suffix: impl Into<String>) -> Self {
		let suffix = suffix.into();
		self.with_parts(|parts| parts.suffix = suffix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_html_core::{HtmlError, attributes};
	use rstest::rstest;

	#[derive(Debug, Clone, Default)]
	struct Widget {
		parts: ElementParts,
	}

	impl Element for Widget {
		fn tag_name(&self) -> &str {
			"widget"
		}

		fn parts(&self) -> &ElementParts {
			&self.parts
		}

		fn parts_mut(&mut self) -> &mut ElementParts {
			&mut self.parts
		}
	}

	impl HasAttributes for Widget {}
	impl HasClass for Widget {}
	impl HasContent for Widget {}
	impl HasData for Widget {}
	impl HasDir for Widget {}
	impl HasPrefixAndSuffix for Widget {}

	#[rstest]
	fn test_setters_leave_receiver_untouched() {
		// Arrange
		let base = Widget::default().id("a");

		// Act
		let changed = base.id("b").class("x", false).content("text").prefix("p");

		// Assert
		assert_eq!(base.get_attributes(), &attributes! { "id" => "a" });
		assert_eq!(base.get_content(), "");
		assert_eq!(changed.get_attributes(), &attributes! { "id" => "b", "class" => "x" });
		assert_eq!(changed.parts().prefix, "p");
	}

	#[rstest]
	fn test_attributes_merge_and_remove() {
		// Arrange & Act
		let widget = Widget::default()
			.attributes(attributes! { "id" => "a", "title" => "t" })
			.attributes(attributes! { "id" => "b" })
			.remove_attribute("title");

		// Act & Assert
		assert_eq!(widget.get_attributes(), &attributes! { "id" => "b" });
	}

	#[rstest]
	fn test_class_replace() {
		let widget = Widget::default().class("a b", false).class("c", true);
		assert_eq!(widget.get_attributes()["class"], AttributeValue::from("c"));
	}

	#[rstest]
	#[case(AttributeValue::from(Direction::Rtl), "rtl")]
	#[case(AttributeValue::from("auto"), "auto")]
	fn test_dir(#[case] dir: AttributeValue, #[case] expected: &str) {
		let widget = Widget::default().dir(dir).unwrap();
		assert_eq!(widget.get_attributes()["dir"], AttributeValue::from(expected));
	}

	#[rstest]
	fn test_dir_rejects_unknown() {
		let error = Widget::default().dir("up").unwrap_err();
		assert_eq!(
			error.to_string(),
			"The value 'up' for the 'dir' attribute is not in the list of allowed values: 'ltr, rtl, auto'."
		);
	}

	#[rstest]
	fn test_dir_rejects_empty() {
		assert_eq!(
			Widget::default().dir("").unwrap_err(),
			HtmlError::ValueCannotBeEmpty {
				attribute: "dir".into()
			}
		);
	}

	#[rstest]
	fn test_content_is_encoded_and_html_is_not() {
		let widget = Widget::default().content("a < b").html("<b>c</b>");
		assert_eq!(widget.get_content(), "a &lt; b<b>c</b>");
	}

	#[rstest]
	fn test_data() {
		let widget = Widget::default()
			.data(attributes! { "toggle" => "modal" })
			.unwrap();
		assert_eq!(
			widget.get_attributes(),
			&attributes! { "data-toggle" => "modal" }
		);
	}

	#[rstest]
	fn test_data_is_strict() {
		assert_eq!(
			Widget::default().data(attributes! { "n" => 1 }).unwrap_err(),
			HtmlError::DataAttributeValueMustBeStringOrClosure {
				key: "n".into(),
				given: "int".into()
			}
		);
	}

	#[rstest]
	fn test_wrap_drops_empty_fragments() {
		// Assert - no prefix or suffix
		let parts = ElementParts::default();
		assert_eq!(parts.wrap("<hr>"), "<hr>");

		// Assert - prefix only
		let parts = ElementParts {
			prefix: "before".into(),
			..ElementParts::default()
		};
		assert_eq!(
			parts.wrap("<hr>"),
			format!("before{}<hr>", template::LINE_ENDING)
		);
	}

	#[rstest]
	fn test_direction_serde() {
		assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
		let parsed: Direction = serde_json::from_str("\"auto\"").unwrap();
		assert_eq!(parsed, Direction::Auto);
	}
}
