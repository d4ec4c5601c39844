//! Loosely-typed attribute values and their normalization.
//!
//! Attribute maps accept strings, numbers, booleans, enum-like values, lazily
//! evaluated closures and nested lists or maps. [`AttributeValue`] models that
//! bag of shapes; [`normalize_value`] collapses enum-like values to the scalar
//! they stand for so that comparisons and rendering only ever see scalars.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Ordered attribute map. Insertion order of keys is preserved.
pub type Attributes = IndexMap<String, AttributeValue>;

/// Backing scalar of an enum-like value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Backing {
	Str(String),
	Int(i64),
}

/// An enum-like value: either backed by a scalar or identified only by name.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttributeValue, EnumValue, normalize_value};
///
/// let backed = EnumValue::backed("Primary", "btn-primary");
/// assert_eq!(normalize_value(&backed.into()), AttributeValue::from("btn-primary"));
///
/// let unit = EnumValue::unit("Hidden");
/// assert_eq!(normalize_value(&unit.into()), AttributeValue::from("Hidden"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumValue {
	Backed { name: String, value: Backing },
	Unit { name: String },
}

impl EnumValue {
	/// Creates a string-backed enum value.
	pub fn backed(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Backed {
			name: name.into(),
			value: Backing::Str(value.into()),
		}
	}

	/// Creates an integer-backed enum value.
	pub fn backed_int(name: impl Into<String>, value: i64) -> Self {
		Self::Backed {
			name: name.into(),
			value: Backing::Int(value),
		}
	}

	/// Creates a name-only enum value.
	pub fn unit(name: impl Into<String>) -> Self {
		Self::Unit { name: name.into() }
	}

	/// Case name, regardless of backing.
	pub fn name(&self) -> &str {
		match self {
			Self::Backed { name, .. } | Self::Unit { name } => name,
		}
	}
}

/// Lazily evaluated attribute value.
///
/// The producer runs every time the value is resolved.
#[derive(Clone)]
pub struct Closure(Arc<dyn Fn() -> AttributeValue + Send + Sync>);

impl Closure {
	pub fn new<F>(producer: F) -> Self
	where
		F: Fn() -> AttributeValue + Send + Sync + 'static,
	{
		Self(Arc::new(producer))
	}

	/// Invokes the producer.
	pub fn call(&self) -> AttributeValue {
		(self.0)()
	}
}

impl fmt::Debug for Closure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Closure")
	}
}

impl PartialEq for Closure {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// A loosely-typed attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	Enum(EnumValue),
	Closure(Closure),
	List(Vec<AttributeValue>),
	Map(Attributes),
}

impl AttributeValue {
	/// Wraps `producer` into a lazily evaluated value.
	pub fn closure<F>(producer: F) -> Self
	where
		F: Fn() -> AttributeValue + Send + Sync + 'static,
	{
		Self::Closure(Closure::new(producer))
	}

	/// Returns `true` for `Null`, the empty string, and empty lists or maps.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Null => true,
			Self::Str(s) => s.is_empty(),
			Self::List(items) => items.is_empty(),
			Self::Map(map) => map.is_empty(),
			_ => false,
		}
	}

	/// Returns `true` for strings, numbers and booleans.
	pub fn is_scalar(&self) -> bool {
		matches!(
			self,
			Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_)
		)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Invokes closures until a non-closure value is produced.
	pub fn resolve(&self) -> AttributeValue {
		let mut value = self.clone();
		while let Self::Closure(closure) = &value {
			value = closure.call();
		}
		value
	}

	/// Stringifies scalar values the way they appear in markup.
	///
	/// `true` becomes `"1"`, `false` and `Null` become `""`. Enums render their
	/// normalized form. Lists, maps and closures have no scalar form and return `None`.
	pub fn to_scalar_string(&self) -> Option<String> {
		match normalize_value(self) {
			Self::Null => Some(String::new()),
			Self::Bool(true) => Some("1".to_string()),
			Self::Bool(false) => Some(String::new()),
			Self::Int(n) => Some(n.to_string()),
			Self::Float(n) => Some(n.to_string()),
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Human-readable form used in error messages; enums show their case name.
	pub fn describe(&self) -> String {
		match self {
			Self::Enum(value) => value.name().to_string(),
			Self::Closure(_) => "Closure".to_string(),
			Self::List(_) | Self::Map(_) => "array".to_string(),
			other => other.to_scalar_string().unwrap_or_default(),
		}
	}

	/// Short type name used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Str(_) => "string",
			Self::Enum(_) => "enum",
			Self::Closure(_) => "Closure",
			Self::List(_) | Self::Map(_) => "array",
		}
	}
}

/// Returns the scalar an enum-like value stands for, or `value` unchanged.
///
/// Backed enums yield their backing scalar, name-only enums yield their name.
pub fn normalize_value(value: &AttributeValue) -> AttributeValue {
	match value {
		AttributeValue::Enum(EnumValue::Backed { value, .. }) => match value {
			Backing::Str(s) => AttributeValue::Str(s.clone()),
			Backing::Int(n) => AttributeValue::Int(*n),
		},
		AttributeValue::Enum(EnumValue::Unit { name }) => AttributeValue::Str(name.clone()),
		other => other.clone(),
	}
}

/// Element-wise [`normalize_value`], preserving order and length.
pub fn normalize_array(values: &[AttributeValue]) -> Vec<AttributeValue> {
	values.iter().map(normalize_value).collect()
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for AttributeValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for AttributeValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for AttributeValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<EnumValue> for AttributeValue {
	fn from(value: EnumValue) -> Self {
		Self::Enum(value)
	}
}

impl From<Closure> for AttributeValue {
	fn from(value: Closure) -> Self {
		Self::Closure(value)
	}
}

impl From<Attributes> for AttributeValue {
	fn from(value: Attributes) -> Self {
		Self::Map(value)
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<AttributeValue>, const N: usize> From<[T; N]> for AttributeValue {
	fn from(values: [T; N]) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

impl From<serde_json::Value> for AttributeValue {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Int(i),
				None => n.as_f64().map_or(Self::Null, Self::Float),
			},
			Value::String(s) => Self::Str(s),
			Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
			Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
		}
	}
}

/// Converts a resolved value into JSON. Closures are invoked and enums normalized.
///
/// Non-finite floats have no JSON form and become `null`.
pub fn to_json(value: &AttributeValue) -> serde_json::Value {
	use serde_json::Value;

	match normalize_value(&value.resolve()) {
		AttributeValue::Null => Value::Null,
		AttributeValue::Bool(b) => Value::Bool(b),
		AttributeValue::Int(n) => Value::from(n),
		AttributeValue::Float(n) => serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number),
		AttributeValue::Str(s) => Value::String(s),
		AttributeValue::List(items) => Value::Array(items.iter().map(to_json).collect()),
		AttributeValue::Map(map) => Value::Object(
			map.iter()
				.map(|(k, v)| (k.clone(), to_json(v)))
				.collect(),
		),
		// resolve() never returns a closure and normalize_value() never returns an enum
		AttributeValue::Enum(_) | AttributeValue::Closure(_) => Value::Null,
	}
}

/// Builds an [`Attributes`] map from `name => value` pairs.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttributeValue, attributes};
///
/// let attrs = attributes! { "id" => "main", "hidden" => true };
/// assert_eq!(attrs.get("id"), Some(&AttributeValue::from("main")));
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut map = $crate::Attributes::new();
		$(
			map.insert(
				::std::string::String::from($name),
				$crate::AttributeValue::from($value),
			);
		)+
		map
	}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(EnumValue::backed("Primary", "primary").into(), AttributeValue::from("primary"))]
	#[case(EnumValue::backed_int("Two", 2).into(), AttributeValue::Int(2))]
	#[case(EnumValue::unit("Hidden").into(), AttributeValue::from("Hidden"))]
	#[case(AttributeValue::from("plain"), AttributeValue::from("plain"))]
	#[case(AttributeValue::Int(7), AttributeValue::Int(7))]
	#[case(AttributeValue::Null, AttributeValue::Null)]
	fn test_normalize_value(#[case] input: AttributeValue, #[case] expected: AttributeValue) {
		assert_eq!(normalize_value(&input), expected);
	}

	#[rstest]
	fn test_normalize_array_preserves_order_and_length() {
		// Arrange
		let values = vec![
			AttributeValue::from(EnumValue::backed("A", "a")),
			AttributeValue::Null,
			AttributeValue::from(EnumValue::unit("B")),
			AttributeValue::Int(3),
		];

		// Act
		let normalized = normalize_array(&values);

		// Assert
		assert_eq!(
			normalized,
			vec![
				AttributeValue::from("a"),
				AttributeValue::Null,
				AttributeValue::from("B"),
				AttributeValue::Int(3),
			]
		);
	}

	#[rstest]
	fn test_normalize_value_leaves_closures_untouched() {
		let closure = AttributeValue::closure(|| "lazy".into());
		assert_eq!(normalize_value(&closure), closure);
	}

	#[rstest]
	fn test_resolve_invokes_nested_closures() {
		let value = AttributeValue::closure(|| AttributeValue::closure(|| "deep".into()));
		assert_eq!(value.resolve(), AttributeValue::from("deep"));
	}

	#[rstest]
	#[case(AttributeValue::Null, true)]
	#[case(AttributeValue::from(""), true)]
	#[case(AttributeValue::List(vec![]), true)]
	#[case(AttributeValue::Map(Attributes::new()), true)]
	#[case(AttributeValue::from("x"), false)]
	#[case(AttributeValue::Bool(false), false)]
	#[case(AttributeValue::Int(0), false)]
	fn test_is_empty(#[case] value: AttributeValue, #[case] expected: bool) {
		assert_eq!(value.is_empty(), expected);
	}

	#[rstest]
	#[case(AttributeValue::Bool(true), Some("1"))]
	#[case(AttributeValue::Bool(false), Some(""))]
	#[case(AttributeValue::Float(1.5), Some("1.5"))]
	#[case(AttributeValue::Float(2.0), Some("2"))]
	#[case(AttributeValue::Int(-4), Some("-4"))]
	#[case(EnumValue::backed_int("One", 1).into(), Some("1"))]
	#[case(AttributeValue::List(vec![]), None)]
	fn test_to_scalar_string(#[case] value: AttributeValue, #[case] expected: Option<&str>) {
		assert_eq!(value.to_scalar_string().as_deref(), expected);
	}

	#[rstest]
	fn test_from_json_preserves_key_order() {
		// Arrange & Act
		let value = AttributeValue::from(json!({"z": 1, "a": [true, null], "m": 1.5}));

		// Assert
		let AttributeValue::Map(map) = value else {
			panic!("expected a map");
		};
		let keys: Vec<&str> = map.keys().map(String::as_str).collect();
		assert_eq!(keys, ["z", "a", "m"]);
		assert_eq!(
			map["a"],
			AttributeValue::List(vec![AttributeValue::Bool(true), AttributeValue::Null])
		);
		assert_eq!(map["m"], AttributeValue::Float(1.5));
	}

	#[rstest]
	fn test_to_json_resolves_closures_and_enums() {
		// Arrange
		let value = AttributeValue::Map(attributes! {
			"size" => EnumValue::backed("Large", "lg"),
			"label" => AttributeValue::closure(|| "Save".into()),
			"nan" => f64::NAN,
		});

		// Act & Assert
		assert_eq!(
			to_json(&value),
			json!({"size": "lg", "label": "Save", "nan": null})
		);
	}

	#[rstest]
	fn test_describe_uses_enum_case_name() {
		assert_eq!(AttributeValue::from(EnumValue::backed("Indigo", "indigo")).describe(), "Indigo");
		assert_eq!(AttributeValue::from("indigo").describe(), "indigo");
	}
}
