//! UTF-8 helpers for byte-addressed text.

/// Bytes below this value encode a rune on their own.
pub const RUNE_SELF: u8 = 0x80;

/// Maximum number of bytes in one UTF-8 encoded rune.
pub const UTF_MAX: usize = 4;

/// Returns whether `byte` can begin a UTF-8 encoding (it is not a continuation byte).
#[inline]
pub fn is_rune_start(byte: u8) -> bool {
	byte & 0xC0 != 0x80
}

/// Returns whether a rune counts as part of a word: a letter or a digit.
#[inline]
pub fn is_word_rune(c: char) -> bool {
	c.is_alphabetic() || c.is_numeric()
}

/// Decodes the first rune in `bytes`.
///
/// Returns the rune and its encoded width. Invalid or truncated sequences
/// decode as [`char::REPLACEMENT_CHARACTER`] with width 1; empty input yields
/// width 0.
pub fn decode_rune(bytes: &[u8]) -> (char, usize) {
	let Some(&first) = bytes.first() else {
		return (char::REPLACEMENT_CHARACTER, 0);
	};
	if first < RUNE_SELF {
		return (char::from(first), 1);
	}

	let width = match first {
		0xC2..=0xDF => 2,
		0xE0..=0xEF => 3,
		0xF0..=0xF4 => 4,
		_ => return (char::REPLACEMENT_CHARACTER, 1),
	};

	bytes
		.get(..width)
		.and_then(|seq| std::str::from_utf8(seq).ok())
		.and_then(|s| s.chars().next())
		.map_or((char::REPLACEMENT_CHARACTER, 1), |c| (c, width))
}
