//! Angle bracket primitives used by the rewriter.
//!
//! Nothing here understands template syntax. Depth is tracked by counting `<`
//! and `>` bytes, which is enough to carve compiler output into spans.

use std::ops::Range;

/// A bracketed expression `name<...>` located inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpan {
	/// Byte offset of the first character of the (possibly qualified) name.
	pub start: usize,
	/// Byte range of everything between the opening `<` and its matching `>`.
	pub inner: Range<usize>,
}

impl TemplateSpan {
	/// Byte offset one past the closing `>`.
	pub fn end(&self) -> usize {
		self.inner.end + 1
	}

	pub fn range(&self) -> Range<usize> {
		self.start..self.end()
	}
}

/// Return the offset of the `>` that closes a bracket opened right before
/// `start`, or `None` when the text ends first.
pub fn end_of_template(text: &str, start: usize) -> Option<usize> {
	let mut depth = 1_usize;

	for (offset, byte) in text.as_bytes().get(start..)?.iter().enumerate() {
		match byte {
			b'<' => depth += 1,
			b'>' => {
				depth -= 1;
				if depth == 0 {
					return Some(start + offset);
				}
			}
			_ => {}
		}
	}

	None
}

/// Split a list interior at commas that are not nested inside `<...>`.
///
/// Pieces are returned untrimmed so joining them with `,` reproduces `text`.
/// An empty interior yields no pieces. Returns `None` if a nested bracket is
/// never closed.
pub fn split_top_level(text: &str) -> Option<Vec<&str>> {
	if text.is_empty() {
		return Some(vec![]);
	}

	let bytes = text.as_bytes();
	let mut pieces = vec![];
	let mut piece_start = 0;
	let mut pos = 0;

	while pos < bytes.len() {
		match bytes[pos] {
			b',' => {
				pieces.push(&text[piece_start..pos]);
				pos += 1;
				piece_start = pos;
			}
			b'<' => pos = end_of_template(text, pos + 1)? + 1,
			_ => pos += 1,
		}
	}

	pieces.push(&text[piece_start..]);
	Some(pieces)
}

/// Find the first `needle` (which must end in `<`) in `text[range]` that starts
/// at an identifier boundary.
///
/// The returned span starts at any `ns::` qualifiers written in front of the
/// needle. `Ok(None)` means there is no occurrence; `Err(offset)` means an
/// occurrence at `offset` whose brackets never close.
pub fn find_template(
	text: &str,
	range: Range<usize>,
	needle: &str,
) -> Result<Option<TemplateSpan>, usize> {
	let Some(at) = find_marker(text, range.clone(), needle) else {
		return Ok(None);
	};

	let open = at + needle.len();
	match end_of_template(&text[..range.end], open) {
		Some(close) => {
			Ok(Some(TemplateSpan {
				start: qualified_start(text, at),
				inner: open..close,
			}))
		}
		None => Err(at),
	}
}

/// Offset of the first occurrence of `needle` in `text[range]` that is not
/// glued to a preceding identifier character.
pub fn find_marker(text: &str, range: Range<usize>, needle: &str) -> Option<usize> {
	let haystack = &text[range.clone()];
	let mut from = 0;

	while let Some(found) = haystack[from..].find(needle) {
		let at = range.start + from + found;
		let glued = text[..at]
			.bytes()
			.next_back()
			.is_some_and(is_identifier_byte);
		if !glued {
			return Some(at);
		}
		from += found + needle.len();
	}

	None
}

/// Walk back from `at` over `ident::` qualifiers and a leading global `::`.
pub fn qualified_start(text: &str, at: usize) -> usize {
	let bytes = text.as_bytes();
	let mut start = at;

	while start >= 2 && &bytes[start - 2..start] == b"::" {
		let separator = start - 2;
		let mut ident_start = separator;
		while ident_start > 0 && is_identifier_byte(bytes[ident_start - 1]) {
			ident_start -= 1;
		}

		if ident_start == separator {
			// A bare `::` is the global namespace unless it follows a closed
			// template or call, as in `vector<int>::typed_mpi`.
			let is_member = separator > 0 && matches!(bytes[separator - 1], b'>' | b')');
			if !is_member {
				start = separator;
			}
			break;
		}

		start = ident_start;
	}

	start
}

pub(crate) fn is_identifier_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_'
}
