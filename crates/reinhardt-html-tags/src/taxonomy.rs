//! HTML content categories.
//!
//! Fixed tables based on the WHATWG HTML Standard's content models:
//! <https://html.spec.whatwg.org/multipage/dom.html#kinds-of-content>
//!
//! Lists are ordered alphabetically within each category; the order only matters
//! for reproducible output of the derived sets in [`crate::classifier`].
//! No input is validated here.

use serde::{Deserialize, Serialize};

/// Named content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentCategory {
	Flow,
	Phrasing,
	Metadata,
	Embedded,
	Interactive,
	Palpable,
	Listing,
	Table,
	FormAssociated,
	Sectioning,
	Heading,
	ScriptSupporting,
	Root,
	Void,
}

impl ContentCategory {
	/// Every category, in declaration order.
	pub const ALL: [ContentCategory; 14] = [
		Self::Flow,
		Self::Phrasing,
		Self::Metadata,
		Self::Embedded,
		Self::Interactive,
		Self::Palpable,
		Self::Listing,
		Self::Table,
		Self::FormAssociated,
		Self::Sectioning,
		Self::Heading,
		Self::ScriptSupporting,
		Self::Root,
		Self::Void,
	];

	pub fn all() -> &'static [ContentCategory] {
		&Self::ALL
	}

	/// Tags belonging to this category.
	pub fn tags(self) -> &'static [&'static str] {
		match self {
			Self::Flow => FLOW,
			Self::Phrasing => PHRASING,
			Self::Metadata => METADATA,
			Self::Embedded => EMBEDDED,
			Self::Interactive => INTERACTIVE,
			Self::Palpable => PALPABLE,
			Self::Listing => LISTING,
			Self::Table => TABLE,
			Self::FormAssociated => FORM_ASSOCIATED,
			Self::Sectioning => SECTIONING,
			Self::Heading => HEADING,
			Self::ScriptSupporting => SCRIPT_SUPPORTING,
			Self::Root => ROOT,
			Self::Void => VOID,
		}
	}

	/// Case-sensitive membership test; callers lowercase first.
	pub fn contains(self, tag: &str) -> bool {
		self.tags().contains(&tag)
	}
}

/// Flow content.
pub static FLOW: &[&str] = &[
	"a",
	"abbr",
	"address",
	"area",
	"article",
	"aside",
	"audio",
	"b",
	"bdi",
	"bdo",
	"blockquote",
	"br",
	"button",
	"canvas",
	"cite",
	"code",
	"data",
	"datalist",
	"del",
	"details",
	"dfn",
	"dialog",
	"div",
	"dl",
	"em",
	"embed",
	"fieldset",
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
	"hr",
	"i",
	"iframe",
	"img",
	"input",
	"ins",
	"kbd",
	"label",
	"link",
	"main",
	"map",
	"mark",
	"math",
	"menu",
	"meta",
	"meter",
	"nav",
	"noscript",
	"object",
	"ol",
	"output",
	"p",
	"picture",
	"pre",
	"progress",
	"q",
	"ruby",
	"s",
	"samp",
	"script",
	"search",
	"section",
	"select",
	"slot",
	"small",
	"span",
	"strong",
	"sub",
	"sup",
	"svg",
	"table",
	"template",
	"textarea",
	"time",
	"u",
	"ul",
	"var",
	"video",
	"wbr",
];

/// Phrasing content.
pub static PHRASING: &[&str] = &[
	"a",
	"abbr",
	"area",
	"audio",
	"b",
	"bdi",
	"bdo",
	"br",
	"button",
	"canvas",
	"cite",
	"code",
	"data",
	"datalist",
	"del",
	"dfn",
	"em",
	"embed",
	"i",
	"iframe",
	"img",
	"input",
	"ins",
	"kbd",
	"label",
	"link",
	"map",
	"mark",
	"math",
	"meta",
	"meter",
	"noscript",
	"object",
	"output",
	"picture",
	"progress",
	"q",
	"ruby",
	"s",
	"samp",
	"script",
	"select",
	"slot",
	"small",
	"span",
	"strong",
	"sub",
	"sup",
	"svg",
	"template",
	"textarea",
	"time",
	"u",
	"var",
	"video",
	"wbr",
];

/// Metadata content.
pub static METADATA: &[&str] = &[
	"base", "link", "meta", "noscript", "script", "style", "template", "title",
];

/// Embedded content.
pub static EMBEDDED: &[&str] = &[
	"audio", "canvas", "embed", "iframe", "img", "math", "object", "picture", "svg", "video",
];

/// Interactive content.
pub static INTERACTIVE: &[&str] = &[
	"a", "audio", "button", "details", "embed", "iframe", "img", "input", "label", "select",
	"textarea", "video",
];

/// Palpable content.
pub static PALPABLE: &[&str] = &[
	"a",
	"abbr",
	"address",
	"article",
	"aside",
	"audio",
	"b",
	"bdi",
	"bdo",
	"blockquote",
	"button",
	"canvas",
	"cite",
	"code",
	"data",
	"del",
	"details",
	"dfn",
	"div",
	"dl",
	"em",
	"embed",
	"fieldset",
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
	"i",
	"iframe",
	"img",
	"input",
	"ins",
	"kbd",
	"label",
	"main",
	"map",
	"mark",
	"math",
	"menu",
	"meter",
	"nav",
	"object",
	"ol",
	"output",
	"p",
	"picture",
	"pre",
	"progress",
	"q",
	"ruby",
	"s",
	"samp",
	"search",
	"section",
	"select",
	"small",
	"span",
	"strong",
	"sub",
	"sup",
	"svg",
	"table",
	"textarea",
	"time",
	"u",
	"ul",
	"var",
	"video",
];

/// Listed form-associated elements.
pub static LISTING: &[&str] = &[
	"button", "fieldset", "input", "object", "output", "select", "textarea",
];

/// Table structure elements.
pub static TABLE: &[&str] = &[
	"caption", "col", "colgroup", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Form-associated elements.
pub static FORM_ASSOCIATED: &[&str] = &[
	"button", "fieldset", "img", "input", "label", "object", "output", "select", "textarea",
];

/// Sectioning content.
pub static SECTIONING: &[&str] = &["article", "aside", "nav", "section"];

/// Heading content.
pub static HEADING: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "hgroup"];

/// Script-supporting elements.
pub static SCRIPT_SUPPORTING: &[&str] = &["script", "template"];

/// Document root.
pub static ROOT: &[&str] = &["html"];

/// Void elements: no content, no end tag.
///
/// `param` is obsolete in the HTML Standard and intentionally absent.
pub static VOID: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_categories_have_no_duplicates() {
		for category in ContentCategory::all() {
			let tags = category.tags();
			let unique: HashSet<_> = tags.iter().collect();
			assert_eq!(unique.len(), tags.len(), "{category:?} has duplicates");
		}
	}

	#[rstest]
	fn test_categories_are_lowercase() {
		for category in ContentCategory::all() {
			for tag in category.tags() {
				assert_eq!(*tag, tag.to_ascii_lowercase(), "{category:?}: {tag}");
			}
		}
	}

	#[rstest]
	#[case(ContentCategory::Sectioning, &["article", "aside", "nav", "section"])]
	#[case(ContentCategory::ScriptSupporting, &["script", "template"])]
	#[case(ContentCategory::Root, &["html"])]
	fn test_small_categories(#[case] category: ContentCategory, #[case] expected: &[&str]) {
		assert_eq!(category.tags(), expected);
	}

	#[rstest]
	fn test_void_excludes_param() {
		assert!(ContentCategory::Void.contains("br"));
		assert!(!ContentCategory::Void.contains("param"));
		assert_eq!(VOID.len(), 13);
	}

	#[rstest]
	fn test_phrasing_is_subset_of_flow() {
		for tag in PHRASING {
			assert!(FLOW.contains(tag), "{tag} is phrasing but not flow");
		}
	}

	#[rstest]
	fn test_category_serializes_kebab_case() {
		let json = serde_json::to_string(&ContentCategory::ScriptSupporting).unwrap();
		assert_eq!(json, "\"script-supporting\"");
		let parsed: ContentCategory = serde_json::from_str("\"form-associated\"").unwrap();
		assert_eq!(parsed, ContentCategory::FormAssociated);
	}
}
