//! Rune reads, seeking and the dot.

use std::io::SeekFrom;

use super::Buffer;
use crate::error::{Result, TextError};
use crate::rune::{RUNE_SELF, UTF_MAX, decode_rune, is_rune_start};


/// One end of the dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// The start, `q0`.
	Start,
	/// The end, `q1`.
	End,
}

impl Buffer {
	/// Clamps `offset` to the content and backs it up to a rune start.
	pub(crate) fn anchor(&self, offset: usize) -> usize {
		let mut offset = offset.min(self.len());
		while offset > 0 {
			match self.gap.byte_at(offset) {
				Ok(byte) if !is_rune_start(byte) => offset -= 1,
				_ => break,
			}
		}
		offset
	}

	/// Decodes the rune covering `offset`.
	///
	/// Returns `(rune, start, size)`. `size` reaches to the next rune start,
	/// so stray continuation bytes after a rune count as part of it and a
	/// forward read always makes progress.
	pub(crate) fn decode_at(&self, offset: usize) -> Result<(char, usize, usize)> {
		let mut start = offset;
		let mut byte = self.gap.byte_at(start)?;
		while start > 0 && !is_rune_start(byte) {
			start -= 1;
			byte = self.gap.byte_at(start)?;
		}

		let (rune, mut size) = if byte < RUNE_SELF {
			(char::from(byte), 1)
		} else {
			let mut buf = [0u8; UTF_MAX];
			let n = self.gap.read_at(&mut buf, start)?;
			decode_rune(&buf[..n])
		};
		while let Ok(next) = self.gap.byte_at(start + size) {
			if is_rune_start(next) {
				break;
			}
			size += 1;
		}
		Ok((rune, start, size))
	}

	/// Returns the rune that starts at or before `offset`, and its size.
	///
	/// Backs up over continuation bytes when `offset` is inside a rune. Does
	/// not move the read cursor.
	///
	/// # Errors
	///
	/// Returns [`TextError::EndOfData`] if `offset >= len()`.
	pub fn read_rune_at(&self, offset: usize) -> Result<(char, usize)> {
		let (rune, _, size) = self.decode_at(offset)?;
		Ok((rune, size))
	}

	/// Reads the rune at the read cursor and moves the cursor past it.
	///
	/// Updates [`last_rune`](Self::last_rune).
	///
	/// # Errors
	///
	/// Returns [`TextError::EndOfData`] at the end of the content.
	pub fn read_rune(&mut self) -> Result<(char, usize)> {
		match self.decode_at(self.off) {
			Ok((rune, start, size)) => {
				self.off = start + size;
				self.last_rune = Some(rune);
				Ok((rune, size))
			}
			Err(err) => {
				self.last_rune = None;
				Err(err)
			}
		}
	}

	/// Reads the rune before the read cursor and moves the cursor to its start.
	///
	/// # Errors
	///
	/// Returns [`TextError::OutOfRange`] when the cursor is at offset 0.
	pub fn unread_rune(&mut self) -> Result<(char, usize)> {
		let Some(prev) = self.off.checked_sub(1) else {
			return Err(TextError::OutOfRange { offset: -1 });
		};
		let (rune, start, size) = self.decode_at(prev)?;
		self.off = start;
		Ok((rune, size))
	}

	/// Sets the read cursor and returns it.
	///
	/// Targets past the end are clamped to [`len`](Self::len), then the
	/// cursor is backed up to a rune start.
	///
	/// # Errors
	///
	/// Returns [`TextError::OutOfRange`] if the target is negative; the cursor
	/// is left where it was.
	pub fn seek(&mut self, pos: SeekFrom) -> Result<usize> {
		let target = self.resolve(pos, self.off)?;
		Ok(self.seek_to(target))
	}

	/// Sets the read cursor to the anchored `offset`.
	pub(crate) fn seek_to(&mut self, offset: usize) -> usize {
		self.off = self.anchor(offset);
		self.off
	}

	/// Turns a [`SeekFrom`] into an absolute offset.
	fn resolve(&self, pos: SeekFrom, current: usize) -> Result<usize> {
		let (base, delta) = match pos {
			SeekFrom::Start(n) => return Ok(usize::try_from(n).unwrap_or(usize::MAX)),
			SeekFrom::Current(delta) => (current, delta),
			SeekFrom::End(delta) => (self.len(), delta),
		};
		let target = i64::try_from(base).unwrap_or(i64::MAX).saturating_add(delta);
		usize::try_from(target).map_err(|_| TextError::OutOfRange { offset: target })
	}

	/// Sets both ends of the dot and returns the result.
	///
	/// Both ends are clamped to `[0, len()]`. If `q0 > q1`, `q0` collapses
	/// onto `q1`. Each end is then backed up to a rune start.
	pub fn set_dot(&mut self, q0: usize, q1: usize) -> (usize, usize) {
		let len = self.len();
		let q1 = q1.min(len);
		let q0 = q0.min(len).min(q1);
		self.q0 = self.anchor(q0);
		self.q1 = self.anchor(q1);
		(self.q0, self.q1)
	}

	/// Collapses the dot to a single offset and returns it.
	///
	/// `SeekFrom::Current` is relative to `q0`. Negative targets clamp to 0.
	pub fn seek_dot(&mut self, pos: SeekFrom) -> usize {
		let target = self.resolve(pos, self.q0).unwrap_or(0);
		self.set_dot(target, target).0
	}

	/// Moves one end of the dot by `delta` bytes and returns the new dot.
	///
	/// The result goes through [`set_dot`](Self::set_dot), so it is clamped,
	/// ordered and anchored.
	pub fn expand_dot(&mut self, side: Side, delta: isize) -> (usize, usize) {
		match side {
			Side::Start => self.set_dot(self.q0.saturating_add_signed(delta), self.q1),
			Side::End => self.set_dot(self.q0, self.q1.saturating_add_signed(delta)),
		}
	}
}
