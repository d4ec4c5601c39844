//! Line-based token substitution.
//!
//! Used to stitch prefix, tag and suffix fragments together: lines that end up
//! empty after substitution are dropped, so absent fragments leave no blank lines.

/// Line separator used when joining rendered lines.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders `template`, replacing every token with its value.
///
/// The two-character sequence `\n` in the template is turned into a line break
/// first. Substitution is literal and single-pass: at each position the longest
/// matching token wins and substituted text is never scanned again.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::template::{LINE_ENDING, render};
///
/// let tokens = [("{prefix}", ""), ("{tag}", "<hr>"), ("{suffix}", "after")];
/// assert_eq!(
///     render(r"{prefix}\n{tag}\n{suffix}", &tokens),
///     format!("<hr>{LINE_ENDING}after")
/// );
/// ```
pub fn render(template: &str, tokens: &[(&str, &str)]) -> String {
	let template = template.replace("\\n", "\n");

	template
		.lines()
		.map(|line| substitute(line, tokens))
		.filter(|line| !line.is_empty())
		.collect::<Vec<_>>()
		.join(LINE_ENDING)
}

fn substitute(line: &str, tokens: &[(&str, &str)]) -> String {
	let mut result = String::with_capacity(line.len());
	let mut rest = line;

	while let Some(ch) = rest.chars().next() {
		let matched = tokens
			.iter()
			.filter(|(token, _)| !token.is_empty() && rest.starts_with(token))
			.max_by_key(|(token, _)| token.len());

		match matched {
			Some((token, value)) => {
				result.push_str(value);
				rest = &rest[token.len()..];
			}
			None => {
				result.push(ch);
				rest = &rest[ch.len_utf8()..];
			}
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn lines(parts: &[&str]) -> String {
		parts.join(LINE_ENDING)
	}

	#[rstest]
	fn test_render_all_fragments() {
		let tokens = [("{prefix}", "before"), ("{tag}", "<br>"), ("{suffix}", "after")];
		assert_eq!(
			render(r"{prefix}\n{tag}\n{suffix}", &tokens),
			lines(&["before", "<br>", "after"])
		);
	}

	#[rstest]
	fn test_render_drops_lines_empty_after_substitution() {
		let tokens = [("{prefix}", ""), ("{tag}", "<br>"), ("{suffix}", "")];
		assert_eq!(render(r"{prefix}\n{tag}\n{suffix}", &tokens), "<br>");
	}

	#[rstest]
	fn test_render_accepts_real_line_breaks() {
		let tokens = [("{a}", "1"), ("{b}", "2")];
		assert_eq!(render("{a}\n\n{b}", &tokens), lines(&["1", "2"]));
	}

	#[rstest]
	fn test_render_keeps_whitespace_only_lines() {
		let tokens = [("{a}", " ")];
		assert_eq!(render("{a}", &tokens), " ");
	}

	#[rstest]
	fn test_substitution_is_single_pass() {
		let tokens = [("{a}", "{b}"), ("{b}", "x")];
		assert_eq!(render("{a}{b}", &tokens), "{b}x");
	}

	#[rstest]
	fn test_longest_token_wins() {
		let tokens = [("{tag", "short"), ("{tag}", "long")];
		assert_eq!(render("{tag}", &tokens), "long");
	}

	#[rstest]
	fn test_values_with_line_breaks_are_kept() {
		let tokens = [("{tag}", "<p>\nline</p>")];
		assert_eq!(render("{tag}", &tokens), "<p>\nline</p>");
	}

	#[rstest]
	fn test_render_without_tokens() {
		assert_eq!(render("static", &[]), "static");
		assert_eq!(render("", &[]), "");
	}
}
