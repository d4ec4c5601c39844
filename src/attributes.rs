//! Attribute rendering, strict data attributes and CSS class merging.

pub use reinhardt_html_attributes::*;
