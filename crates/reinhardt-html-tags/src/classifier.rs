//! Block, inline and void tag classification.
//!
//! The operational classes are derived from the content categories in
//! [`crate::taxonomy`] by set arithmetic:
//!
//! - inline = (phrasing ∪ {optgroup, option}) − (embedded ∪ listing ∪ script-supporting ∪ table ∪ void)
//! - block = (flow ∪ {figcaption, legend, summary}) − (listing ∪ script-supporting ∪ table ∪ inline ∪ void)
//! - void = the fixed void element list
//!
//! The classes are not a partition: a tag missing from every list (`li`, `html`,
//! unknown names) belongs to none of them.

use std::collections::HashSet;
use std::sync::OnceLock;

use reinhardt_html_core::{HtmlError, HtmlResult};

use crate::taxonomy::{EMBEDDED, FLOW, LISTING, PHRASING, SCRIPT_SUPPORTING, TABLE, VOID};

const BLOCK_EXTRA: &[&str] = &["figcaption", "legend", "summary"];
const INLINE_EXTRA: &[&str] = &["optgroup", "option"];

/// Ordered tag set with constant-time lookup.
struct TagSet {
	ordered: Vec<&'static str>,
	index: HashSet<&'static str>,
}

impl TagSet {
	fn derive(include: &[&[&'static str]], exclude: &[&[&'static str]]) -> Self {
		let excluded: HashSet<&str> = exclude.iter().flat_map(|tags| tags.iter().copied()).collect();
		let mut ordered = Vec::new();
		let mut index = HashSet::new();
		for tag in include.iter().flat_map(|tags| tags.iter().copied()) {
			if !excluded.contains(tag) && index.insert(tag) {
				ordered.push(tag);
			}
		}
		Self { ordered, index }
	}

	fn contains(&self, tag: &str) -> bool {
		self.index.contains(tag)
	}
}

fn inline_set() -> &'static TagSet {
	static SET: OnceLock<TagSet> = OnceLock::new();
	SET.get_or_init(|| {
		TagSet::derive(
			&[PHRASING, INLINE_EXTRA],
			&[EMBEDDED, LISTING, SCRIPT_SUPPORTING, TABLE, VOID],
		)
	})
}

fn block_set() -> &'static TagSet {
	static SET: OnceLock<TagSet> = OnceLock::new();
	SET.get_or_init(|| {
		let inline = inline_set().ordered.as_slice();
		TagSet::derive(
			&[FLOW, BLOCK_EXTRA],
			&[LISTING, SCRIPT_SUPPORTING, TABLE, inline, VOID],
		)
	})
}

fn void_set() -> &'static TagSet {
	static SET: OnceLock<TagSet> = OnceLock::new();
	SET.get_or_init(|| TagSet::derive(&[VOID], &[]))
}

/// Lowercases a tag name, failing on the empty string.
fn normalize(tag: &str) -> HtmlResult<String> {
	if tag.is_empty() {
		return Err(HtmlError::EmptyTagName);
	}
	Ok(tag.to_ascii_lowercase())
}

/// Block tags, in derivation order.
pub fn block_tags() -> &'static [&'static str] {
	&block_set().ordered
}

/// Inline tags, in derivation order.
pub fn inline_tags() -> &'static [&'static str] {
	&inline_set().ordered
}

/// Void tags.
pub fn void_tags() -> &'static [&'static str] {
	&void_set().ordered
}

/// Whether `tag` is a block element. Case-insensitive.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] if `tag` is empty.
///
/// # Examples
///
/// ```
/// use reinhardt_html_tags::classifier::is_block;
///
/// assert!(is_block("DIV").unwrap());
/// assert!(!is_block("span").unwrap());
/// assert!(is_block("").is_err());
/// ```
pub fn is_block(tag: &str) -> HtmlResult<bool> {
	Ok(block_set().contains(&normalize(tag)?))
}

/// Whether `tag` is an inline element. Case-insensitive.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] if `tag` is empty.
pub fn is_inline(tag: &str) -> HtmlResult<bool> {
	Ok(inline_set().contains(&normalize(tag)?))
}

/// Whether `tag` is a void element. Case-insensitive.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] if `tag` is empty.
pub fn is_void(tag: &str) -> HtmlResult<bool> {
	Ok(void_set().contains(&normalize(tag)?))
}

/// Direct, non-failing membership test against the void element list.
pub fn is_void_tag(tag: &str) -> bool {
	void_set().contains(&tag.to_ascii_lowercase())
}

/// Membership of a tag in each operational class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
	pub block: bool,
	pub inline: bool,
	pub void: bool,
}

/// Classifies `tag` in one call.
///
/// # Errors
///
/// [`HtmlError::EmptyTagName`] if `tag` is empty.
pub fn classify(tag: &str) -> HtmlResult<Classification> {
	let tag = normalize(tag)?;
	Ok(Classification {
		block: block_set().contains(&tag),
		inline: inline_set().contains(&tag),
		void: void_set().contains(&tag),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("div", true, false, false)]
	#[case("DIV", true, false, false)]
	#[case("p", true, false, false)]
	#[case("section", true, false, false)]
	#[case("figcaption", true, false, false)]
	#[case("legend", true, false, false)]
	#[case("summary", true, false, false)]
	#[case("span", false, true, false)]
	#[case("a", false, true, false)]
	#[case("option", false, true, false)]
	#[case("optgroup", false, true, false)]
	#[case("br", false, false, true)]
	#[case("hr", false, false, true)]
	#[case("Img", false, false, true)]
	#[case("table", false, false, false)]
	#[case("td", false, false, false)]
	#[case("button", false, false, false)]
	#[case("script", false, false, false)]
	#[case("li", false, false, false)]
	#[case("param", false, false, false)]
	#[case("custom-element", false, false, false)]
	fn test_classify(
		#[case] tag: &str,
		#[case] block: bool,
		#[case] inline: bool,
		#[case] void: bool,
	) {
		assert_eq!(is_block(tag).unwrap(), block);
		assert_eq!(is_inline(tag).unwrap(), inline);
		assert_eq!(is_void(tag).unwrap(), void);
		assert_eq!(
			classify(tag).unwrap(),
			Classification {
				block,
				inline,
				void
			}
		);
	}

	#[rstest]
	fn test_empty_tag_name_fails() {
		assert_eq!(is_block(""), Err(HtmlError::EmptyTagName));
		assert_eq!(is_inline(""), Err(HtmlError::EmptyTagName));
		assert_eq!(is_void(""), Err(HtmlError::EmptyTagName));
		assert_eq!(classify(""), Err(HtmlError::EmptyTagName));
	}

	#[rstest]
	fn test_is_void_tag_never_fails() {
		assert!(is_void_tag("WBR"));
		assert!(!is_void_tag(""));
		assert!(!is_void_tag("div"));
	}

	#[rstest]
	fn test_inline_tags_order() {
		assert_eq!(
			inline_tags(),
			[
				"a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "datalist", "del", "dfn",
				"em", "i", "ins", "kbd", "label", "map", "mark", "meter", "noscript", "progress",
				"q", "ruby", "s", "samp", "slot", "small", "span", "strong", "sub", "sup", "time",
				"u", "var", "optgroup", "option",
			]
		);
	}

	#[rstest]
	fn test_block_tags_order() {
		assert_eq!(
			block_tags(),
			[
				"address",
				"article",
				"aside",
				"audio",
				"blockquote",
				"canvas",
				"details",
				"dialog",
				"div",
				"dl",
				"figure",
				"footer",
				"form",
				"h1",
				"h2",
				"h3",
				"h4",
				"h5",
				"h6",
				"header",
				"hgroup",
				"iframe",
				"main",
				"math",
				"menu",
				"nav",
				"ol",
				"p",
				"picture",
				"pre",
				"search",
				"section",
				"svg",
				"ul",
				"video",
				"figcaption",
				"legend",
				"summary",
			]
		);
	}

	#[rstest]
	fn test_operational_classes_do_not_overlap() {
		for tag in block_tags() {
			assert!(!inline_tags().contains(tag), "{tag} is block and inline");
			assert!(!void_tags().contains(tag), "{tag} is block and void");
		}
		for tag in inline_tags() {
			assert!(!void_tags().contains(tag), "{tag} is inline and void");
		}
	}
}
