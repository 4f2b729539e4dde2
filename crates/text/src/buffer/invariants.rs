//! Machine-checkable invariants for the text buffer.
//!
//! Each invariant is a `pub(crate) fn test_*()` that runs as a test.

use std::io::SeekFrom;

use super::Buffer;
use crate::error::TextError;
use crate::file::BufferKind;
use crate::history::Change;
use crate::rune::is_rune_start;

fn on_rune_start(buffer: &Buffer, offset: usize) -> bool {
	buffer.gap.byte_at(offset).map_or(true, is_rune_start)
}

/// Invariant: the dot MUST stay ordered, inside the content and on rune starts.
#[cfg_attr(test, test)]
pub(crate) fn test_dot_bounds() {
	let mut buffer = Buffer::with_text("añb€c");

	for q0 in 0..12 {
		for q1 in 0..12 {
			let (a, b) = buffer.set_dot(q0, q1);
			assert!(a <= b, "dot out of order: ({a}, {b})");
			assert!(b <= buffer.len(), "dot past the end: ({a}, {b})");
			assert!(on_rune_start(&buffer, a) && on_rune_start(&buffer, b));
		}
	}
}

/// Invariant: the read cursor MUST land on a rune start after any seek.
#[cfg_attr(test, test)]
pub(crate) fn test_cursor_anchoring() {
	let mut buffer = Buffer::with_text("𝄞x€");

	for raw in 0..10 {
		let off = buffer
			.seek(SeekFrom::Start(raw))
			.expect("seek from start never fails");
		assert!(off <= buffer.len());
		assert!(on_rune_start(&buffer, off), "cursor {off} inside a rune");
	}
}

/// Invariant: a failed undo or redo MUST leave content, dot and history untouched.
#[cfg_attr(test, test)]
pub(crate) fn test_failed_history_is_noop() {
	let mut buffer = Buffer::with_text("keep");
	buffer.set_dot(1, 3);

	assert!(buffer.undo().is_err());
	assert!(buffer.redo().is_err());
	assert_eq!(buffer.text(), "keep");
	assert_eq!(buffer.dot(), (1, 3));

	let mut buffer = Buffer::new();
	buffer.insert_str("ab").unwrap();
	buffer.insert_str("cd").unwrap();
	buffer.commit(&Change::delete(0, b"abcd".to_vec())).unwrap();
	assert_eq!(buffer.dot(), (0, 0));

	assert_eq!(buffer.undo(), Err(TextError::OutOfRange { offset: 4 }));
	assert_eq!(buffer.history().undo_len(), 2);
	assert_eq!(buffer.history().redo_len(), 0);
	assert_eq!(buffer.text(), "");
	assert_eq!(buffer.dot(), (0, 0));

	let mut buffer = Buffer::new();
	buffer.insert_str("abc").unwrap();
	buffer.insert_str("de").unwrap();
	buffer.undo().unwrap();
	buffer.commit(&Change::delete(0, b"abc".to_vec())).unwrap();

	assert_eq!(buffer.redo(), Err(TextError::OutOfRange { offset: 3 }));
	assert_eq!(buffer.history().undo_len(), 1);
	assert_eq!(buffer.history().redo_len(), 1);
	assert_eq!(buffer.text(), "");
}

/// Invariant: scratch buffers MUST never become dirty.
#[cfg_attr(test, test)]
pub(crate) fn test_scratch_never_dirty() {
	let mut buffer = Buffer::new();
	assert_eq!(buffer.kind(), BufferKind::Scratch);

	buffer.insert_str("abc").unwrap();
	buffer.delete().unwrap();
	buffer.undo().unwrap();
	buffer.redo().unwrap();
	assert!(!buffer.is_dirty());
}

/// Invariant: destroy MUST reset content, dot, cursor and history.
#[cfg_attr(test, test)]
pub(crate) fn test_destroy_resets_state() {
	let mut buffer = Buffer::new();
	buffer.insert_str("hello").unwrap();
	buffer.read_rune().ok();
	buffer.undo().unwrap();
	buffer.insert_str("again").unwrap();

	buffer.destroy();
	assert!(buffer.is_empty());
	assert_eq!(buffer.dot(), (0, 0));
	assert_eq!(buffer.cursor(), 0);
	assert_eq!(buffer.last_rune(), None);
	assert!(!buffer.can_undo());
	assert!(!buffer.can_redo());

	buffer.insert_str("x").unwrap();
	assert_eq!(buffer.text(), "x");
}
