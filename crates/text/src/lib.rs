//! Text editing core: a rune-aware buffer over [`quill_gap_buffer::GapBuffer`].
//!
//! [`Buffer`] owns the bytes of one document together with its selection
//! ("dot"), a read cursor for sequential rune decoding, and a linear
//! undo/redo [`History`]. Offsets are byte offsets; every offset the buffer
//! stores is kept on a UTF-8 rune start.

/// The text buffer and its editing, navigation and scan operations.
pub mod buffer;
/// Buffer configuration.
pub mod config;
/// Error types.
pub mod error;
/// Backing file metadata, load and save.
pub mod file;
/// Reversible changes and the done/recall stacks.
pub mod history;
/// UTF-8 helpers.
pub mod rune;

pub use buffer::{Buffer, Side};
pub use config::BufferConfig;
pub use error::{ConfigError, FileError, Result, TextError};
pub use file::{BufferKind, FileInfo};
pub use history::{Change, ChangeKind, History};
