//! The rune-aware text buffer.
//!
//! [`Buffer`] wraps a [`GapBuffer`] and adds:
//!
//! - the dot `(q0, q1)`, the selection every edit applies to
//! - a read cursor for sequential [`read_rune`]/[`unread_rune`] calls
//! - structural scans over words, spaces and delimiters
//! - undo/redo through a [`History`]
//! - backing file metadata and dirty tracking
//!
//! The implementation is split by concern the same way the operations are
//! documented: [`editing`] for write/delete/undo/redo, [`navigation`] for rune
//! reads, seeking and the dot, and [`scan`] for boundary searches.
//!
//! Every stored offset (`q0`, `q1`, the read cursor) is at most [`len`] and
//! sits on a rune start. Raw offsets from callers are re-anchored by backing
//! up over continuation bytes.
//!
//! [`read_rune`]: Buffer::read_rune
//! [`unread_rune`]: Buffer::unread_rune
//! [`len`]: Buffer::len

use std::fmt;

use quill_gap_buffer::{DEFAULT_CAPACITY, GapBuffer};
use tracing::warn;

use crate::config::BufferConfig;
use crate::file::{BufferKind, FileInfo};
use crate::history::History;

pub mod editing;
#[cfg(test)]
mod invariants;
pub mod navigation;
pub mod scan;

pub use navigation::Side;

/// An editable document: bytes, dot, read cursor and history.
#[derive(Debug, Clone)]
pub struct Buffer {
	pub(crate) gap: GapBuffer,
	/// Start of the dot.
	pub(crate) q0: usize,
	/// End of the dot.
	pub(crate) q1: usize,
	/// Read cursor for [`Buffer::read_rune`] and [`Buffer::unread_rune`].
	pub(crate) off: usize,
	pub(crate) last_rune: Option<char>,
	pub(crate) history: History,
	pub(crate) kind: BufferKind,
	pub(crate) dirty: bool,
	pub(crate) file: Option<FileInfo>,
	tab_width: usize,
}

impl Buffer {
	/// Creates an empty scratch buffer with the default config.
	pub fn new() -> Self {
		Self::with_config(&BufferConfig::default())
	}

	/// Creates an empty scratch buffer from `config`.
	///
	/// A config that fails [`BufferConfig::validate`] falls back to the
	/// default capacity.
	pub fn with_config(config: &BufferConfig) -> Self {
		let capacity = match config.validate() {
			Ok(()) => config.initial_capacity,
			Err(err) => {
				warn!(%err, "using default buffer capacity");
				DEFAULT_CAPACITY
			}
		};
		Self {
			gap: GapBuffer::with_capacity(capacity),
			q0: 0,
			q1: 0,
			off: 0,
			last_rune: None,
			history: History::new(),
			kind: BufferKind::Scratch,
			dirty: false,
			file: None,
			tab_width: config.tab_width,
		}
	}

	/// Creates a scratch buffer holding `text`, with no history and the dot at 0.
	pub fn with_text(text: &str) -> Self {
		let mut buffer = Self::new();
		buffer.append_raw(text.as_bytes());
		buffer
	}

	/// Returns the content length in bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.gap.len()
	}

	/// Returns true if the buffer has no content.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.gap.is_empty()
	}

	/// Returns a copy of the whole content.
	pub fn contents(&self) -> Vec<u8> {
		self.gap.bytes()
	}

	/// Returns the whole content as text, replacing invalid UTF-8.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.gap.bytes()).into_owned()
	}

	/// Returns the current dot as `(q0, q1)`.
	#[inline]
	pub fn dot(&self) -> (usize, usize) {
		(self.q0, self.q1)
	}

	/// Returns the bytes inside the dot.
	pub fn dot_bytes(&self) -> Vec<u8> {
		self.bytes_in(self.q0, self.q1)
	}

	/// Returns the text inside the dot, replacing invalid UTF-8.
	pub fn read_dot(&self) -> String {
		String::from_utf8_lossy(&self.dot_bytes()).into_owned()
	}

	/// Returns the read cursor.
	#[inline]
	pub fn cursor(&self) -> usize {
		self.off
	}

	/// Returns the rune returned by the last [`read_rune`](Self::read_rune).
	///
	/// `None` if nothing was read yet or the last read hit the end.
	#[inline]
	pub fn last_rune(&self) -> Option<char> {
		self.last_rune
	}

	/// Returns the undo/redo history.
	pub fn history(&self) -> &History {
		&self.history
	}

	/// Returns whether [`undo`](Self::undo) has anything to do.
	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	/// Returns whether [`redo`](Self::redo) has anything to do.
	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Returns the tab stop width for renderers.
	pub fn tab_width(&self) -> usize {
		self.tab_width
	}

	/// Resets the buffer to empty.
	///
	/// Keeps the gap storage and the file name. Clears the dot, the read
	/// cursor, history and the dirty flag, and marks the file as unread so a
	/// later [`load`](Self::load) reads it again.
	pub fn destroy(&mut self) {
		self.gap.destroy();
		self.q0 = 0;
		self.q1 = 0;
		self.off = 0;
		self.last_rune = None;
		self.history.clear();
		self.dirty = false;
		if let Some(file) = self.file.as_mut() {
			file.read = false;
		}
	}

	/// Copies the bytes in `[from, to)`, clamped to the content.
	pub(crate) fn bytes_in(&self, from: usize, to: usize) -> Vec<u8> {
		let to = to.min(self.len());
		if from >= to {
			return Vec::new();
		}
		let mut buf = vec![0; to - from];
		match self.gap.read_at(&mut buf, from) {
			Ok(n) => buf.truncate(n),
			Err(_) => buf.clear(),
		}
		buf
	}

	/// Appends bytes at the end without recording history or moving the dot.
	pub(crate) fn append_raw(&mut self, bytes: &[u8]) -> usize {
		self.gap.seek(self.gap.len());
		self.gap.write(bytes)
	}

	/// Flags unsaved changes on file-backed buffers.
	pub(crate) fn mark_dirty(&mut self) {
		if self.kind == BufferKind::File {
			self.dirty = true;
		}
	}
}

impl Default for Buffer {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Buffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text())
	}
}
