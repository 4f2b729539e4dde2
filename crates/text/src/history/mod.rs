//! Linear undo/redo history.
//!
//! Every edit is stored as a [`Change`] that carries the exact bytes it
//! inserted or removed, so it can be reversed without consulting the
//! document. [`History`] keeps two stacks:
//!
//! ```text
//!  done:   [c1, c2, c3]   <- undo pops here, pushes onto recall
//!  recall: [c5, c4]       <- redo pops here, pushes onto done
//! ```
//!
//! Recording a new change empties `recall`; there are no branches.

use tracing::trace;

use crate::error::{Result, TextError};

#[cfg(test)]
mod tests;

/// Whether a change added or removed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
	/// Bytes were inserted at the offset.
	Insert,
	/// Bytes were removed starting at the offset.
	Delete,
}

impl ChangeKind {
	/// Returns the kind that undoes this one.
	pub fn inverse(self) -> Self {
		match self {
			Self::Insert => Self::Delete,
			Self::Delete => Self::Insert,
		}
	}
}

/// A single reversible edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
	/// Byte offset where the edit starts.
	pub offset: usize,
	/// Insert or delete.
	pub kind: ChangeKind,
	/// The inserted bytes, or the bytes that were removed.
	pub content: Vec<u8>,
}

impl Change {
	/// Creates an insertion of `content` at `offset`.
	pub fn insert(offset: usize, content: Vec<u8>) -> Self {
		Self {
			offset,
			kind: ChangeKind::Insert,
			content,
		}
	}

	/// Creates a deletion of `content`, which currently starts at `offset`.
	pub fn delete(offset: usize, content: Vec<u8>) -> Self {
		Self {
			offset,
			kind: ChangeKind::Delete,
			content,
		}
	}

	/// Returns the change that reverses this one.
	pub fn inverted(&self) -> Self {
		Self {
			offset: self.offset,
			kind: self.kind.inverse(),
			content: self.content.clone(),
		}
	}

	/// Returns the number of bytes the change covers.
	#[inline]
	pub fn len(&self) -> usize {
		self.content.len()
	}

	/// Returns true if the change covers no bytes.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}

	/// Returns the offset just past the affected span.
	#[inline]
	pub fn end(&self) -> usize {
		self.offset + self.content.len()
	}
}

/// Done/recall stacks of [`Change`]s.
#[derive(Debug, Clone, Default)]
pub struct History {
	done: Vec<Change>,
	recall: Vec<Change>,
}

impl History {
	/// Creates an empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an applied change and drops everything that could be redone.
	pub fn record(&mut self, change: Change) {
		trace!(
			offset = change.offset,
			kind = ?change.kind,
			len = change.len(),
			done = self.done.len() + 1,
			"change recorded"
		);
		if !self.recall.is_empty() {
			trace!(cleared = self.recall.len(), "recall stack cleared");
		}
		self.done.push(change);
		self.recall.clear();
	}

	/// Moves the newest change onto the recall stack.
	///
	/// Returns the inverse of that change, ready to be applied to the
	/// document.
	///
	/// # Errors
	///
	/// Returns [`TextError::NothingToUndo`] if there is no recorded change.
	pub fn undo(&mut self) -> Result<Change> {
		let change = self.done.pop().ok_or(TextError::NothingToUndo)?;
		let inverse = change.inverted();
		self.recall.push(change);
		trace!(
			done = self.done.len(),
			recall = self.recall.len(),
			"undo"
		);
		Ok(inverse)
	}

	/// Moves the newest undone change back onto the done stack.
	///
	/// Returns the change as originally recorded, ready to be re-applied.
	///
	/// # Errors
	///
	/// Returns [`TextError::NothingToRedo`] if nothing was undone since the
	/// last recorded change.
	pub fn redo(&mut self) -> Result<Change> {
		let change = self.recall.pop().ok_or(TextError::NothingToRedo)?;
		self.done.push(change.clone());
		trace!(
			done = self.done.len(),
			recall = self.recall.len(),
			"redo"
		);
		Ok(change)
	}

	/// Returns the change [`undo`](Self::undo) would apply, without moving it.
	pub fn peek_undo(&self) -> Option<Change> {
		self.done.last().map(Change::inverted)
	}

	/// Returns the change [`redo`](Self::redo) would apply, without moving it.
	pub fn peek_redo(&self) -> Option<&Change> {
		self.recall.last()
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		!self.done.is_empty()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		!self.recall.is_empty()
	}

	/// Returns the done stack length.
	pub fn undo_len(&self) -> usize {
		self.done.len()
	}

	/// Returns the recall stack length.
	pub fn redo_len(&self) -> usize {
		self.recall.len()
	}

	/// Returns the applied changes, oldest first.
	pub fn done(&self) -> &[Change] {
		&self.done
	}

	/// Returns the undone changes; the next one to redo is last.
	pub fn recall(&self) -> &[Change] {
		&self.recall
	}

	/// Forgets all history.
	pub fn clear(&mut self) {
		self.done.clear();
		self.recall.clear();
	}
}
