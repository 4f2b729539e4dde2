//! Text editing operations for buffers.

use std::io;

use tracing::trace;

use super::Buffer;
use crate::error::{Result, TextError};
use crate::history::{Change, ChangeKind};


impl Buffer {
	/// Inserts `bytes` at the dot and returns the number of bytes written.
	///
	/// A non-empty dot is deleted first, so writing over a selection replaces
	/// it. The replace is recorded as a delete followed by an insert. The dot
	/// ends up collapsed just after the inserted bytes. An empty `bytes`
	/// records nothing.
	///
	/// # Errors
	///
	/// Propagates errors from deleting the dot.
	pub fn write(&mut self, bytes: &[u8]) -> Result<usize> {
		if self.q0 != self.q1 {
			self.delete()?;
		}
		if bytes.is_empty() {
			return Ok(0);
		}

		let change = Change::insert(self.q0, bytes.to_vec());
		let n = self.commit(&change)?;
		let end = change.end();
		self.history.record(change);
		self.mark_dirty();

		self.set_dot(end, end);
		Ok(n)
	}

	/// Inserts `text` at the dot. See [`write`](Self::write).
	///
	/// # Errors
	///
	/// Propagates errors from [`write`](Self::write).
	pub fn insert_str(&mut self, text: &str) -> Result<usize> {
		self.write(text.as_bytes())
	}

	/// Deletes the dot, or the rune before it when the dot is empty.
	///
	/// Returns the number of bytes removed; 0 when the dot is empty at offset
	/// 0. The dot is collapsed at `q0` afterwards.
	///
	/// # Errors
	///
	/// Returns an error if the rune before the dot cannot be decoded.
	pub fn delete(&mut self) -> Result<usize> {
		if self.q0 == self.q1 {
			if self.q0 == 0 {
				return Ok(0);
			}
			let (_, start, _) = self.decode_at(self.q0 - 1)?;
			self.q0 = start;
		}

		let change = Change::delete(self.q0, self.dot_bytes());
		let n = self.commit(&change)?;
		let at = self.anchor(change.offset);
		self.history.record(change);
		self.mark_dirty();

		self.q0 = at;
		self.q1 = at;
		Ok(n)
	}

	/// Applies `change` to the content without recording history.
	///
	/// Returns the number of bytes inserted or removed. The dot and the read
	/// cursor are not moved, only clamped and re-anchored if the content
	/// under them changed.
	///
	/// # Errors
	///
	/// Returns [`TextError::OutOfRange`] if the change reaches past the
	/// content; nothing is modified in that case.
	pub fn commit(&mut self, change: &Change) -> Result<usize> {
		let len = self.len();
		match change.kind {
			ChangeKind::Insert => {
				if change.offset > len {
					return Err(TextError::out_of_range(change.offset));
				}
				self.gap.seek(change.offset);
				self.gap.write(&change.content);
			}
			ChangeKind::Delete => {
				if change.end() > len {
					return Err(TextError::out_of_range(change.end()));
				}
				self.gap.seek(change.end());
				for _ in 0..change.len() {
					self.gap.delete();
				}
			}
		}
		self.off = self.anchor(self.off);
		self.q0 = self.anchor(self.q0);
		self.q1 = self.anchor(self.q1);
		Ok(change.len())
	}

	/// Reverts the newest recorded change.
	///
	/// Undoing a delete selects the restored bytes. Undoing an insert
	/// collapses the dot where the insert started.
	///
	/// # Errors
	///
	/// Returns [`TextError::NothingToUndo`] if there is nothing to revert, or
	/// [`TextError::OutOfRange`] if the change no longer fits the content.
	/// History is unchanged on error.
	pub fn undo(&mut self) -> Result<()> {
		let inverse = self.history.peek_undo().ok_or(TextError::NothingToUndo)?;
		self.commit(&inverse)?;
		self.history.undo()?;
		self.mark_dirty();

		match inverse.kind {
			ChangeKind::Insert => self.set_dot(inverse.offset, inverse.end()),
			ChangeKind::Delete => self.set_dot(inverse.offset, inverse.offset),
		};
		trace!(offset = inverse.offset, kind = ?inverse.kind, "undo applied");
		Ok(())
	}

	/// Re-applies the newest undone change.
	///
	/// The dot collapses after re-inserted bytes, or at the point of a
	/// replayed delete.
	///
	/// # Errors
	///
	/// Returns [`TextError::NothingToRedo`] if nothing was undone since the
	/// last edit, or [`TextError::OutOfRange`] if the change no longer fits
	/// the content. History is unchanged on error.
	pub fn redo(&mut self) -> Result<()> {
		let change = self
			.history
			.peek_redo()
			.cloned()
			.ok_or(TextError::NothingToRedo)?;
		self.commit(&change)?;
		self.history.redo()?;
		self.mark_dirty();

		let at = match change.kind {
			ChangeKind::Insert => change.end(),
			ChangeKind::Delete => change.offset,
		};
		self.set_dot(at, at);
		trace!(offset = change.offset, kind = ?change.kind, "redo applied");
		Ok(())
	}
}

impl io::Write for Buffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Buffer::write(self, buf).map_err(io::Error::other)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
