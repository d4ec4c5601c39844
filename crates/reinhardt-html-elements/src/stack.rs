//! Per-thread bookkeeping for `begin`/`end` rendering.
//!
//! Every thread owns its own stack, so interleaved begin/end calls on different
//! threads never observe each other's open elements.

use std::cell::RefCell;

use reinhardt_html_core::{HtmlError, HtmlResult};

/// An element opened by `begin` and not yet closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
	pub(crate) tag: String,
	/// Rendered after the closing tag.
	pub(crate) suffix: String,
}

thread_local! {
	static STACK: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn push(frame: Frame) {
	STACK.with_borrow_mut(|stack| {
		tracing::trace!(tag = %frame.tag, depth = stack.len() + 1, "begin element");
		stack.push(frame);
	});
}

/// Pops the innermost frame if it was opened for `tag`.
///
/// On mismatch the stack is left untouched.
pub(crate) fn pop(tag: &str) -> HtmlResult<Frame> {
	STACK.with_borrow_mut(|stack| {
		let open = match stack.last() {
			None => {
				return Err(HtmlError::EndWithoutBegin {
					tag: tag.to_string(),
				});
			}
			Some(frame) => frame.tag.clone(),
		};
		if open != tag {
			return Err(HtmlError::MismatchedEnd {
				tag: tag.to_string(),
				open,
			});
		}
		tracing::trace!(tag, depth = stack.len() - 1, "end element");
		stack.pop().ok_or_else(|| HtmlError::EndWithoutBegin {
			tag: tag.to_string(),
		})
	})
}

/// Number of elements begun on this thread and not yet ended.
pub fn stack_depth() -> usize {
	STACK.with_borrow(Vec::len)
}
