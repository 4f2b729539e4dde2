use thiserror::Error;

/// Errors reported by [`GapBuffer`](crate::GapBuffer) reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GapError {
	/// A read started at or past the end of the content.
	#[error("offset {offset} is at or past the end of data (len {len})")]
	EndOfData {
		/// The requested logical offset.
		offset: usize,
		/// Logical content length at the time of the read.
		len: usize,
	},
}

/// Result type for gap buffer operations.
pub type Result<T> = std::result::Result<T, GapError>;
