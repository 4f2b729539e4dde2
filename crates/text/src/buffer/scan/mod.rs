//! Boundary scans over words, spaces and delimiters.
//!
//! Scans decode runes through the read cursor and return byte counts measured
//! from the starting offset. Reaching either end of the content ends a scan
//! with whatever was counted so far. When a scan returns, the read cursor sits
//! on the boundary it found.

use super::Buffer;
use crate::error::{Result, TextError};
use crate::rune::is_word_rune;

#[cfg(test)]
mod tests;

impl Buffer {
	/// Counts bytes forward from `offset` while `matches` holds.
	fn count_forward(&mut self, offset: usize, matches: impl Fn(char) -> bool) -> usize {
		let start = self.seek_to(offset);
		let mut n = 0;
		while let Ok((rune, size)) = self.read_rune() {
			if !matches(rune) {
				break;
			}
			n += size;
		}
		self.seek_to(start + n);
		n
	}

	/// Counts bytes backward from `offset` while `matches` holds.
	fn count_backward(&mut self, offset: usize, matches: impl Fn(char) -> bool) -> usize {
		let start = self.seek_to(offset);
		let mut n = 0;
		while let Ok((rune, size)) = self.unread_rune() {
			if !matches(rune) {
				break;
			}
			n += size;
		}
		self.seek_to(start - n);
		n
	}

	/// Returns the length of the run of letters and digits starting at
	/// `offset`.
	pub fn next_word(&mut self, offset: usize) -> usize {
		self.count_forward(offset, is_word_rune)
	}

	/// Returns the length of the run of letters and digits ending at `offset`.
	///
	/// Only runes before `offset` are examined; the rune at `offset` is not.
	pub fn prev_word(&mut self, offset: usize) -> usize {
		self.count_backward(offset, is_word_rune)
	}

	/// Returns the number of bytes from `offset` up to the next whitespace.
	pub fn next_space(&mut self, offset: usize) -> usize {
		self.count_forward(offset, |c| !c.is_whitespace())
	}

	/// Returns the number of bytes back from `offset` to just after the
	/// previous whitespace.
	///
	/// Only runes before `offset` are examined; the rune at `offset` is not.
	pub fn prev_space(&mut self, offset: usize) -> usize {
		self.count_backward(offset, |c| !c.is_whitespace())
	}

	/// Returns the number of bytes from `offset` up to, but not including, the
	/// next `delim`.
	///
	/// Reaching the end of the content returns the distance travelled.
	///
	/// # Errors
	///
	/// Returns any read error other than [`TextError::EndOfData`].
	pub fn next_delim(&mut self, delim: char, offset: usize) -> Result<usize> {
		let start = self.seek_to(offset);
		let mut n = 0;
		loop {
			match self.read_rune() {
				Ok((rune, _)) if rune == delim => break,
				Ok((_, size)) => n += size,
				Err(TextError::EndOfData { .. }) => break,
				Err(err) => return Err(err),
			}
		}
		self.seek_to(start + n);
		Ok(n)
	}

	/// Returns the number of bytes back from `offset` through the previous
	/// `delim`, the delimiter included.
	///
	/// Reaching the start of the content returns the distance travelled.
	///
	/// # Errors
	///
	/// Returns any read error other than [`TextError::OutOfRange`].
	pub fn prev_delim(&mut self, delim: char, offset: usize) -> Result<usize> {
		self.seek_to(offset);
		let mut n = 0;
		loop {
			match self.unread_rune() {
				Ok((rune, size)) => {
					n += size;
					if rune == delim {
						break;
					}
				}
				Err(TextError::OutOfRange { .. }) => break,
				Err(err) => return Err(err),
			}
		}
		Ok(n)
	}

	/// Selects the word around `offset` and returns the new dot.
	///
	/// The dot spans the letters and digits on both sides of the anchored
	/// offset. With no word there, it covers the single rune at `offset`, or
	/// nothing at the end of the content.
	pub fn select(&mut self, offset: usize) -> (usize, usize) {
		let offset = self.seek_to(offset);
		let start = offset - self.prev_word(offset);
		let mut end = offset + self.next_word(offset);

		if start == end {
			if let Ok((_, size)) = self.read_rune_at(offset) {
				end += size;
			}
		}
		self.set_dot(start, end)
	}
}
