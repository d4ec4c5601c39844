//! Element builders, renderers and the defaults registry through the facade crate.

use reinhardt_html::elements::element::{block, inline, void};
use reinhardt_html::prelude::*;
use reinhardt_html::{DefaultOp, stack_depth};
use rstest::rstest;

#[rstest]
fn test_void_content_rejection() {
	assert_eq!(
		inline("img", "caption", &Attributes::new()),
		Err(HtmlError::VoidElementCannotHaveContent { tag: "img".into() })
	);
}

#[rstest]
#[case(block("span", "", &Attributes::new()), HtmlError::InvalidBlockElement { tag: "span".into() })]
#[case(inline("section", "", &Attributes::new()), HtmlError::InvalidInlineElement { tag: "section".into() })]
#[case(void("div", &Attributes::new()), HtmlError::InvalidVoidElement { tag: "div".into() })]
fn test_renderers_validate_tag_class(
	#[case] result: HtmlResult<String>,
	#[case] expected: HtmlError,
) {
	assert_eq!(result, Err(expected));
}

#[rstest]
fn test_tag_enums_render() {
	let html = block(Block::Nav, &inline(Inline::A, "Home", &attributes! { "href" => "/" }).unwrap(), &Attributes::new())
		.unwrap();
	insta::assert_snapshot!(html, @r#"<nav><a href="/">Home</a></nav>"#);
}

#[rstest]
fn test_builder_snapshot() {
	// Arrange
	let button = Tag::inline("label")
		.id("name-label")
		.attribute("for", "name")
		.class("form-label", false)
		.dir(Direction::Rtl)
		.unwrap()
		.data(attributes! { "hint" => "Full name" })
		.unwrap()
		.content("Name <required>");

	// Act & Assert
	insta::assert_snapshot!(
		button.render().unwrap(),
		@r#"<label class="form-label" id="name-label" for="name" dir="rtl" data-hint="Full name">Name &lt;required&gt;</label>"#
	);
}

#[rstest]
fn test_builders_are_copy_on_write() {
	// Arrange
	let base = Span::new().class("badge", false);
	let success = base.class("badge-success", false);
	let replaced = success.class("pill", true);

	// Act & Assert
	assert_eq!(base.render().unwrap(), r#"<span class="badge"></span>"#);
	assert_eq!(success.render().unwrap(), r#"<span class="badge badge-success"></span>"#);
	assert_eq!(replaced.render().unwrap(), r#"<span class="pill"></span>"#);
}

#[rstest]
fn test_defaults_from_json_theme() {
	// Arrange
	let defaults = Defaults::from(serde_json::json!({
		"img": { "loading": "lazy", "class": "img-fluid" },
		"p": { "class": "lead" },
	}));

	// Act & Assert
	let img = Img::new().src("/a.png").alt("A").class("rounded", false);
	assert_eq!(
		img.render_with(&defaults).unwrap(),
		r#"<img class="img-fluid rounded" src="/a.png" alt="A" loading="lazy">"#
	);
	assert_eq!(P::new().content("Hi").render_with(&defaults).unwrap(), r#"<p class="lead">Hi</p>"#);
}

#[rstest]
fn test_defaults_last_write_wins() {
	// Arrange
	let mut defaults = Defaults::new();
	defaults.set("span", [DefaultOp::attribute("role", "status")]);
	defaults.extend("span", [DefaultOp::attribute("role", "alert")]);

	// Act & Assert
	assert_eq!(
		Span::new().render_with(&defaults).unwrap(),
		r#"<span role="alert"></span>"#
	);
}

#[rstest]
fn test_nested_begin_end() {
	// Act
	let mut html = Div::new().class("outer", false).begin().unwrap();
	html.push_str(&Div::new().class("inner", false).content("x").begin().unwrap());
	assert_eq!(stack_depth(), 2);
	html.push_str(&Div::end().unwrap());
	html.push_str(&Div::end().unwrap());

	// Assert
	insta::assert_snapshot!(html, @r#"<div class="outer"><div class="inner">x</div></div>"#);
	assert_eq!(stack_depth(), 0);
	assert_eq!(Div::end(), Err(HtmlError::EndWithoutBegin { tag: "div".into() }));
}

#[rstest]
fn test_void_tags_have_no_content_setters() {
	let hr = Hr::new().id("sep").prefix("<p>above</p>");
	let nl = reinhardt_html::core::template::LINE_ENDING;
	assert_eq!(hr.render().unwrap(), format!("<p>above</p>{nl}<hr id=\"sep\">"));
	assert_eq!(Br::new().render().unwrap(), "<br>");
}
