//! HTML tag taxonomy and classification for reinhardt-html.
//!
//! - [`taxonomy`] - fixed content-category tables ([`ContentCategory`])
//! - [`classifier`] - derived block/inline/void classes and membership tests
//! - [`tag`] - [`Block`], [`Inline`] and [`Void`] tag enumerations

pub mod classifier;
pub mod tag;
pub mod taxonomy;

pub use classifier::{
	Classification, block_tags, classify, inline_tags, is_block, is_inline, is_void, is_void_tag,
	void_tags,
};
pub use tag::{Block, Inline, Void};
pub use taxonomy::ContentCategory;
