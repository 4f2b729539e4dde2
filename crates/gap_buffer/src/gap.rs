use std::io;

use tracing::trace;

use crate::error::{GapError, Result};

/// Storage size preallocated by [`GapBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Byte storage with a movable gap.
///
/// Invariant: `start <= end <= storage.len()`. Logical offset `o < start` lives
/// at `storage[o]`; logical offset `o >= start` lives at `storage[o + gap_len]`.
///
/// `GapBuffer::default()` starts with no storage at all and allocates on the
/// first write. [`GapBuffer::new`] preallocates [`DEFAULT_CAPACITY`] bytes.
#[derive(Debug, Clone, Default)]
pub struct GapBuffer {
	storage: Vec<u8>,
	/// First byte of the gap; the next write lands here.
	start: usize,
	/// First byte after the gap.
	end: usize,
}

impl GapBuffer {
	/// Creates an empty buffer with [`DEFAULT_CAPACITY`] bytes of storage.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Creates an empty buffer whose gap spans `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			storage: vec![0; capacity],
			start: 0,
			end: capacity,
		}
	}

	/// Returns the logical content length in bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.storage.len() - self.gap_len()
	}

	/// Returns true if the buffer holds no content.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the storage size, gap included.
	#[inline]
	pub fn cap(&self) -> usize {
		self.storage.len()
	}

	/// Returns the gap start, which is where the next write appears.
	#[inline]
	pub fn pos(&self) -> usize {
		self.start
	}

	/// Returns the number of free bytes in the gap.
	#[inline]
	pub fn gap_len(&self) -> usize {
		self.end - self.start
	}

	/// Returns the content before and after the gap without copying.
	pub fn as_slices(&self) -> (&[u8], &[u8]) {
		(&self.storage[..self.start], &self.storage[self.end..])
	}

	/// Returns a copy of the logical content.
	pub fn bytes(&self) -> Vec<u8> {
		let (front, back) = self.as_slices();
		let mut out = Vec::with_capacity(self.len());
		out.extend_from_slice(front);
		out.extend_from_slice(back);
		out
	}

	/// Empties the buffer without releasing its storage.
	pub fn destroy(&mut self) {
		self.start = 0;
		self.end = self.storage.len();
	}

	/// Moves the gap so that it starts at logical offset `pos`.
	///
	/// `pos` is clamped to `[0, len()]`, so seeking past the end parks the gap
	/// at the end. The bytes between the old and the new gap position are
	/// copied across the gap in one block; content is unchanged.
	pub fn seek(&mut self, pos: usize) {
		let pos = pos.min(self.len());
		if pos < self.start {
			let n = self.start - pos;
			self.storage.copy_within(pos..self.start, self.end - n);
			self.start = pos;
			self.end -= n;
		} else if pos > self.start {
			let n = pos - self.start;
			self.storage.copy_within(self.end..self.end + n, self.start);
			self.start = pos;
			self.end += n;
		}
	}

	/// Inserts `bytes` at the gap and moves the gap past them.
	///
	/// Returns the number of bytes written, which is always `bytes.len()`.
	/// This is the only operation that allocates.
	pub fn write(&mut self, bytes: &[u8]) -> usize {
		if bytes.is_empty() {
			return 0;
		}
		if self.gap_len() < bytes.len() {
			self.grow(bytes.len());
		}

		let start = self.start;
		self.storage[start..start + bytes.len()].copy_from_slice(bytes);
		self.start += bytes.len();
		bytes.len()
	}

	/// Removes the byte just before the gap and returns it.
	///
	/// Returns `None` when the gap is at offset 0.
	pub fn delete(&mut self) -> Option<u8> {
		if self.start == 0 {
			return None;
		}
		self.start -= 1;
		Some(self.storage[self.start])
	}

	/// Returns the byte at logical `offset`.
	///
	/// # Errors
	///
	/// Returns [`GapError::EndOfData`] if `offset >= len()`.
	pub fn byte_at(&self, offset: usize) -> Result<u8> {
		let len = self.len();
		if offset >= len {
			return Err(GapError::EndOfData { offset, len });
		}

		let idx = if offset < self.start {
			offset
		} else {
			offset + self.gap_len()
		};
		Ok(self.storage[idx])
	}

	/// Copies content starting at logical `offset` into `buf`.
	///
	/// Copies `min(buf.len(), len() - offset)` bytes and returns that count.
	///
	/// # Errors
	///
	/// Returns [`GapError::EndOfData`] if `offset >= len()`.
	pub fn read_at(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
		let len = self.len();
		if offset >= len {
			return Err(GapError::EndOfData { offset, len });
		}

		let n = buf.len().min(len - offset);
		let (front, back) = self.as_slices();
		let mut copied = 0;

		if offset < front.len() {
			copied = (offset + n).min(front.len()) - offset;
			buf[..copied].copy_from_slice(&front[offset..offset + copied]);
		}
		if copied < n {
			let from = offset + copied - front.len();
			buf[copied..n].copy_from_slice(&back[from..from + (n - copied)]);
		}

		Ok(n)
	}

	/// Grows the storage so the gap fits at least `additional` bytes.
	///
	/// The storage at least doubles, and the bytes after the gap move to the
	/// new end of the storage.
	fn grow(&mut self, additional: usize) {
		let old_cap = self.storage.len();
		let new_cap = (old_cap * 2)
			.max(self.len() + additional)
			.max(DEFAULT_CAPACITY);
		let new_end = new_cap - (old_cap - self.end);

		self.storage.resize(new_cap, 0);
		self.storage.copy_within(self.end..old_cap, new_end);
		self.end = new_end;

		trace!(
			old_cap,
			new_cap,
			gap_start = self.start,
			"gap buffer grown"
		);
	}
}

impl io::Write for GapBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Ok(GapBuffer::write(self, buf))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
