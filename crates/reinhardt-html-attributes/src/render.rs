//! Lenient attribute rendering.
//!
//! [`render_attributes`] turns an [`Attributes`] map into the fragment placed
//! after a tag name: `' class="a" id="b" hidden'`. Malformed entries are
//! skipped rather than reported, so one bad attribute from loosely-typed input
//! never aborts rendering of a whole element.
//!
//! Emission rules:
//!
//! - keys listed in the precedence order come first, then the remaining keys in
//!   insertion order
//! - names must match `^[A-Za-z_:][A-Za-z0-9_:-]*$`
//! - `Null`, `""`, `false` and empty lists or maps are omitted; `true` emits the
//!   bare name
//! - closures are invoked and enums normalized before anything else
//! - `class` always goes through [`crate::css_class`]
//! - `style` lists are space-joined and `style` maps render as `key: value;`
//! - lists or maps under an expandable prefix (`data`, `aria`, ...) expand to
//!   one `prefix-key` attribute per entry
//! - any other nested value is serialized as JSON with `<`, `>`, `&` and `'`
//!   escaped; a value containing `"` is wrapped in single quotes

use std::sync::OnceLock;

use regex::Regex;

use reinhardt_html_core::value::to_json;
use reinhardt_html_core::{AttributeValue, Attributes, encode_value, normalize_value};

use crate::css_class;

/// Attributes emitted before all others, in this order.
pub const ATTRIBUTE_ORDER: &[&str] = &[
	"class",
	"id",
	"name",
	"type",
	"http-equiv",
	"value",
	"href",
	"loop",
	"src",
	"srcset",
	"form",
	"action",
	"method",
	"selected",
	"checked",
	"readonly",
	"disabled",
	"multiple",
	"size",
	"maxlength",
	"minlength",
	"width",
	"height",
	"rows",
	"cols",
	"alt",
	"title",
	"rel",
	"media",
];

/// Keys whose list or map values expand into `key-subkey` attributes.
pub const EXPANDABLE_PREFIXES: &[&str] = &["data", "data-ng", "ng", "aria"];

const NAME_PATTERN: &str = r"^[A-Za-z_:][A-Za-z0-9_:\-]*$";

/// Whether `name` is acceptable as an attribute name.
///
/// # Examples
///
/// ```
/// use reinhardt_html_attributes::render::is_valid_name;
///
/// assert!(is_valid_name("data-id"));
/// assert!(is_valid_name("xlink:href"));
/// assert!(!is_valid_name("1st"));
/// assert!(!is_valid_name("onclick=\"x\""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
	static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
	PATTERN
		.get_or_init(|| Regex::new(NAME_PATTERN))
		.as_ref()
		.is_ok_and(|pattern| pattern.is_match(name))
}

/// Attribute renderer configuration.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attributes;
/// use reinhardt_html_attributes::RenderOptions;
///
/// let options = RenderOptions::new().with_order(["id"]).with_prefixes(["hx"]);
/// let attrs = attributes! {
///     "hx" => attributes! { "get" => "/items" },
///     "id" => "list",
/// };
/// assert_eq!(options.render(&attrs), r#" id="list" hx-get="/items""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
	order: Vec<String>,
	prefixes: Vec<String>,
	double_encode: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			order: ATTRIBUTE_ORDER.iter().map(|name| name.to_string()).collect(),
			prefixes: EXPANDABLE_PREFIXES.iter().map(|name| name.to_string()).collect(),
			double_encode: true,
		}
	}
}

impl RenderOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the precedence order.
	pub fn with_order<I, S>(mut self, order: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.order = order.into_iter().map(Into::into).collect();
		self
	}

	/// Replaces the set of expandable prefixes.
	pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.prefixes = prefixes.into_iter().map(Into::into).collect();
		self
	}

	/// Whether existing character references in values are encoded again.
	pub fn with_double_encode(mut self, double_encode: bool) -> Self {
		self.double_encode = double_encode;
		self
	}

	pub fn order(&self) -> &[String] {
		&self.order
	}

	pub fn prefixes(&self) -> &[String] {
		&self.prefixes
	}

	pub fn double_encode(&self) -> bool {
		self.double_encode
	}

	/// Renders `attributes` with this configuration.
	///
	/// Returns the empty string when nothing is emitted, otherwise the
	/// fragments joined by spaces with one leading space.
	pub fn render(&self, attributes: &Attributes) -> String {
		let mut fragments = Vec::with_capacity(attributes.len());
		for (name, value) in self.ordered(attributes) {
			self.render_entry(name, value, &mut fragments);
		}

		if fragments.is_empty() {
			String::new()
		} else {
			format!(" {}", fragments.join(" "))
		}
	}

	fn ordered<'a>(&self, attributes: &'a Attributes) -> Vec<(&'a str, &'a AttributeValue)> {
		let mut entries: Vec<(&str, &AttributeValue)> = Vec::with_capacity(attributes.len());
		let mut push = |name: &'a str, value: &'a AttributeValue| {
			if !entries.iter().any(|(seen, _)| *seen == name) {
				entries.push((name, value));
			}
		};

		for name in &self.order {
			if let Some((name, value)) = attributes.get_key_value(name.as_str()) {
				push(name.as_str(), value);
			}
		}
		for (name, value) in attributes {
			push(name.as_str(), value);
		}
		entries
	}

	fn is_prefix(&self, name: &str) -> bool {
		self.prefixes.iter().any(|prefix| prefix == name)
	}

	fn render_entry(&self, name: &str, value: &AttributeValue, out: &mut Vec<String>) {
		if !is_valid_name(name) {
			tracing::debug!(attribute = name, "skipping attribute with invalid name");
			return;
		}

		if name == "class" {
			let class = css_class::to_string(value.clone());
			if !class.is_empty() {
				out.push(format!("class=\"{}\"", encode_value(class, self.double_encode)));
			}
			return;
		}

		match normalize_value(&value.resolve()) {
			nested @ (AttributeValue::List(_) | AttributeValue::Map(_)) => {
				if nested.is_empty() {
					return;
				}
				if name == "style" {
					self.render_style(&nested, out);
				} else if self.is_prefix(name) {
					self.expand(name, &nested, out);
				} else {
					out.push(quoted(name, &json(&nested)));
				}
			}
			scalar => self.render_scalar(name, &scalar, out),
		}
	}

	fn render_scalar(&self, name: &str, value: &AttributeValue, out: &mut Vec<String>) {
		match value {
			AttributeValue::Bool(true) => out.push(name.to_string()),
			AttributeValue::Bool(false) | AttributeValue::Null => {}
			AttributeValue::Str(text) if text.is_empty() => {}
			other => out.push(format!(
				"{name}=\"{}\"",
				encode_value(other.clone(), self.double_encode)
			)),
		}
	}

	fn expand(&self, prefix: &str, nested: &AttributeValue, out: &mut Vec<String>) {
		for (key, value) in entries(nested) {
			let name = format!("{prefix}-{key}");
			if key.is_empty() || !is_valid_name(&name) {
				tracing::debug!(attribute = %name, "skipping expanded attribute with invalid name");
				continue;
			}
			match normalize_value(&value.resolve()) {
				inner @ (AttributeValue::List(_) | AttributeValue::Map(_)) => {
					if !inner.is_empty() {
						out.push(quoted(&name, &json(&inner)));
					}
				}
				scalar => self.render_scalar(&name, &scalar, out),
			}
		}
	}

	fn render_style(&self, nested: &AttributeValue, out: &mut Vec<String>) {
		let parts: Vec<String> = match nested {
			AttributeValue::Map(map) => map
				.iter()
				.filter(|(property, _)| {
					if property.is_empty() {
						tracing::debug!("skipping style entry with an empty property name");
					}
					!property.is_empty()
				})
				.filter_map(|(property, value)| {
					let value = self.style_value(value)?;
					Some(format!(
						"{}: {value};",
						encode_value(property.as_str(), self.double_encode)
					))
				})
				.collect(),
			AttributeValue::List(items) => items
				.iter()
				.filter_map(|value| self.style_value(value))
				.collect(),
			_ => Vec::new(),
		};

		if !parts.is_empty() {
			out.push(quoted("style", &parts.join(" ")));
		}
	}

	fn style_value(&self, value: &AttributeValue) -> Option<String> {
		match normalize_value(&value.resolve()) {
			AttributeValue::Bool(false) => None,
			value if value.is_empty() => None,
			nested @ (AttributeValue::List(_) | AttributeValue::Map(_)) => Some(json(&nested)),
			scalar => Some(encode_value(scalar, self.double_encode)),
		}
	}
}

/// Renders `attributes` with the default [`RenderOptions`].
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attributes;
/// use reinhardt_html_attributes::render_attributes;
///
/// let attrs = attributes! {
///     "id" => "id",
///     "class" => "c",
///     "data-tests" => "x",
///     "name" => "n",
///     "height" => "h",
/// };
/// assert_eq!(
///     render_attributes(&attrs),
///     r#" class="c" id="id" name="n" height="h" data-tests="x""#
/// );
/// ```
pub fn render_attributes(attributes: &Attributes) -> String {
	static DEFAULT: OnceLock<RenderOptions> = OnceLock::new();
	DEFAULT.get_or_init(RenderOptions::default).render(attributes)
}

/// Keyed entries of a list or map; list entries are keyed by position.
fn entries(nested: &AttributeValue) -> Vec<(String, &AttributeValue)> {
	match nested {
		AttributeValue::Map(map) => map.iter().map(|(key, value)| (key.clone(), value)).collect(),
		AttributeValue::List(items) => items
			.iter()
			.enumerate()
			.map(|(index, value)| (index.to_string(), value))
			.collect(),
		_ => Vec::new(),
	}
}

/// Serializes a nested value as JSON safe to embed in a quoted attribute.
fn json(value: &AttributeValue) -> String {
	let mut escaped = String::new();
	for ch in to_json(value).to_string().chars() {
		match ch {
			'<' => escaped.push_str("\\u003C"),
			'>' => escaped.push_str("\\u003E"),
			'&' => escaped.push_str("\\u0026"),
			'\'' => escaped.push_str("\\u0027"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

fn quoted(name: &str, body: &str) -> String {
	if body.contains('"') {
		format!("{name}='{body}'")
	} else {
		format!("{name}=\"{body}\"")
	}
}
