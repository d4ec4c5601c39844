//! Error messages, value normalization, encoding and token templates.
//!
//! # Examples
//!
//! ```
//! use reinhardt_html::core::{AttributeValue, EnumValue, normalize_value};
//!
//! let value = normalize_value(&EnumValue::backed("Primary", "primary").into());
//! assert_eq!(value, AttributeValue::from("primary"));
//! ```

pub use reinhardt_html_core::*;
