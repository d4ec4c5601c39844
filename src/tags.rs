//! Content categories and block/inline/void classification.

pub use reinhardt_html_tags::*;
