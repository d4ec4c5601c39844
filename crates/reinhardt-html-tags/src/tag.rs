//! String-backed enumerations of block, inline and void tag names.
//!
//! Each enum lists exactly the tags its classifier accepts, so a value of
//! [`Block`] always passes [`crate::classifier::is_block`] and so on. The enums
//! convert into [`EnumValue`]/[`AttributeValue`] and normalize to the tag name.

use std::fmt;

use reinhardt_html_core::{AttributeValue, EnumValue};

macro_rules! tag_enum {
	(
		$(#[$meta:meta])*
		$name:ident { $($variant:ident => $tag:literal,)+ }
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant,)+
		}

		impl $name {
			/// Every case, in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

			/// Tag name.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $tag,)+
				}
			}

			/// Case-insensitive lookup by tag name.
			pub fn from_name(tag: &str) -> Option<Self> {
				let tag = tag.to_ascii_lowercase();
				Self::ALL.iter().copied().find(|case| case.as_str() == tag)
			}

			fn case_name(self) -> &'static str {
				match self {
					$(Self::$variant => stringify!($variant),)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.as_str()
			}
		}

		impl From<$name> for EnumValue {
			fn from(tag: $name) -> Self {
				EnumValue::backed(tag.case_name(), tag.as_str())
			}
		}

		impl From<$name> for AttributeValue {
			fn from(tag: $name) -> Self {
				AttributeValue::Enum(tag.into())
			}
		}
	};
}

tag_enum! {
	/// Tags accepted by block element renderers.
	Block {
		Address => "address",
		Article => "article",
		Aside => "aside",
		Audio => "audio",
		Blockquote => "blockquote",
		Canvas => "canvas",
		Details => "details",
		Dialog => "dialog",
		Div => "div",
		Dl => "dl",
		Figure => "figure",
		Footer => "footer",
		Form => "form",
		H1 => "h1",
		H2 => "h2",
		H3 => "h3",
		H4 => "h4",
		H5 => "h5",
		H6 => "h6",
		Header => "header",
		Hgroup => "hgroup",
		Iframe => "iframe",
		Main => "main",
		Math => "math",
		Menu => "menu",
		Nav => "nav",
		Ol => "ol",
		P => "p",
		Picture => "picture",
		Pre => "pre",
		Search => "search",
		Section => "section",
		Svg => "svg",
		Ul => "ul",
		Video => "video",
		Figcaption => "figcaption",
		Legend => "legend",
		Summary => "summary",
	}
}

tag_enum! {
	/// Tags accepted by inline element renderers.
	Inline {
		A => "a",
		Abbr => "abbr",
		B => "b",
		Bdi => "bdi",
		Bdo => "bdo",
		Cite => "cite",
		Code => "code",
		Data => "data",
		Datalist => "datalist",
		Del => "del",
		Dfn => "dfn",
		Em => "em",
		I => "i",
		Ins => "ins",
		Kbd => "kbd",
		Label => "label",
		Map => "map",
		Mark => "mark",
		Meter => "meter",
		Noscript => "noscript",
		Progress => "progress",
		Q => "q",
		Ruby => "ruby",
		S => "s",
		Samp => "samp",
		Slot => "slot",
		Small => "small",
		Span => "span",
		Strong => "strong",
		Sub => "sub",
		Sup => "sup",
		Time => "time",
		U => "u",
		Var => "var",
		Optgroup => "optgroup",
		Option => "option",
	}
}

tag_enum! {
	/// Tags accepted by void element renderers.
	Void {
		Area => "area",
		Base => "base",
		Br => "br",
		Col => "col",
		Embed => "embed",
		Hr => "hr",
		Img => "img",
		Input => "input",
		Link => "link",
		Meta => "meta",
		Source => "source",
		Track => "track",
		Wbr => "wbr",
	}
}
