use std::fmt;
use std::str::FromStr;

use derive_more::Deref;
use derive_more::From;

use crate::PrettifyError;
use crate::PrettifyResult;

/// Maps a 6-bit field to its character. Index 0 is a space, index 63 is `z`.
pub const DECODING_TABLE: &[u8; 64] =
	b" 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Maximum number of characters an atom can hold.
pub const MAX_ATOM_LEN: usize = 10;

/// Field value that separates padding from content. As the top nibble it marks
/// an atom whose ten fields are all content.
const START_MARKER: u64 = 0xF;
const FIELD_BITS: u32 = 6;
const FIELD_MASK: u64 = 0x3F;
const FLAG_SHIFT: u32 = 60;

/// Decode a packed atom into its text.
///
/// Bits 60–63 hold a format flag and bits 0–59 hold ten 6-bit fields, the
/// first one at bit 54. When the flag is `0xF` every field is content.
/// Otherwise all fields up to and including the first one equal to `0xF` are
/// padding and everything after it is content, spaces included.
///
/// ```
/// use prettify_core::atom::decode;
///
/// assert_eq!(decode(4_115_129), "get");
/// assert_eq!(decode(0), "");
/// ```
pub fn decode(value: u64) -> String {
	let mut reading = value >> FLAG_SHIFT == START_MARKER;
	let mut result = String::with_capacity(MAX_ATOM_LEN);

	// Field 0 sits at bit 54, field 9 at bit 0.
	for field in 0..MAX_ATOM_LEN as u32 {
		let bitshift = FLAG_SHIFT - FIELD_BITS * (field + 1);
		let index = (value >> bitshift) & FIELD_MASK;
		if reading {
			result.push(char::from(DECODING_TABLE[index as usize]));
		} else if index == START_MARKER {
			reading = true;
		}
	}

	result
}

/// Pack `text` into an atom value, the inverse of [`decode`].
///
/// The value starts out as the start marker and every character shifts in its
/// 6-bit table index, so a ten character atom ends up with the marker in the
/// flag nibble.
pub fn encode(text: &str) -> PrettifyResult<u64> {
	if text.len() > MAX_ATOM_LEN {
		return Err(PrettifyError::InvalidAtom(text.to_string()));
	}

	text.bytes().try_fold(START_MARKER, |value, byte| {
		let index = DECODING_TABLE
			.iter()
			.position(|candidate| *candidate == byte)
			.ok_or_else(|| PrettifyError::InvalidAtom(text.to_string()))?;

		Ok((value << FIELD_BITS) | index as u64)
	})
}

/// A packed atom as it appears in compiler output.
///
/// Displays as its decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, From)]
pub struct AtomValue(u64);

impl AtomValue {
	pub const fn new(value: u64) -> Self {
		Self(value)
	}

	/// Encode `text` into an atom.
	pub fn from_text(text: &str) -> PrettifyResult<Self> {
		encode(text).map(Self)
	}

	pub const fn value(self) -> u64 {
		self.0
	}

	pub fn text(self) -> String {
		decode(self.0)
	}
}

impl fmt::Display for AtomValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text())
	}
}

/// Parses decimal values and `0x` prefixed hexadecimal values.
impl FromStr for AtomValue {
	type Err = PrettifyError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let trimmed = raw.trim();
		let parsed = match trimmed
			.strip_prefix("0x")
			.or_else(|| trimmed.strip_prefix("0X"))
		{
			Some(hex) => u64::from_str_radix(hex, 16),
			None => trimmed.parse::<u64>(),
		};

		parsed
			.map(Self)
			.map_err(|_| PrettifyError::InvalidAtomValue(raw.to_string()))
	}
}
