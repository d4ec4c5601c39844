//! Element renderers, builder traits, tag types and the defaults registry.
//!
//! Available with the `elements` feature (enabled by default).

#[cfg(feature = "elements")]
pub use reinhardt_html_elements::*;
