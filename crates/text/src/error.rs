//! Error types for the text core.

use std::path::PathBuf;

use quill_gap_buffer::GapError;
use thiserror::Error;

/// Errors reported by [`Buffer`](crate::Buffer) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
	/// An offset fell below the start of the content.
	#[error("offset {offset} is out of range")]
	OutOfRange {
		/// The offending offset, which may be negative.
		offset: i64,
	},

	/// A read reached the end of the content.
	#[error("end of data at offset {offset}")]
	EndOfData {
		/// Offset where the read was attempted.
		offset: usize,
	},

	/// Undo was requested with an empty done stack.
	#[error("nothing to undo")]
	NothingToUndo,

	/// Redo was requested with an empty recall stack.
	#[error("nothing to redo")]
	NothingToRedo,
}

impl TextError {
	/// Builds an [`OutOfRange`](Self::OutOfRange) error from an unsigned offset.
	pub(crate) fn out_of_range(offset: usize) -> Self {
		Self::OutOfRange {
			offset: i64::try_from(offset).unwrap_or(i64::MAX),
		}
	}
}

impl From<GapError> for TextError {
	fn from(err: GapError) -> Self {
		match err {
			GapError::EndOfData { offset, .. } => Self::EndOfData { offset },
		}
	}
}

/// Errors reported while loading or saving a buffer's backing file.
#[derive(Debug, Error)]
pub enum FileError {
	/// The buffer has no file name to save to.
	#[error("no file name")]
	NoFileName,

	/// Reading or writing the file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path that failed.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},
}

impl FileError {
	pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
		let path = path.into();
		move |error| Self::Io { path, error }
	}
}

/// Errors that can occur when parsing a [`BufferConfig`](crate::BufferConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML source could not be parsed into a config.
	#[error("invalid buffer config: {0}")]
	Parse(#[from] toml::de::Error),

	/// `initial_capacity` is larger than the allowed maximum.
	#[error("initial_capacity {value} exceeds the maximum of {max} bytes")]
	InvalidCapacity {
		/// The configured capacity.
		value: usize,
		/// The largest accepted capacity.
		max: usize,
	},
}

/// Result type for buffer operations.
pub type Result<T, E = TextError> = std::result::Result<T, E>;
