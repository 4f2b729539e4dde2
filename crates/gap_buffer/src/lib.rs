//! Gap buffer storage for the Quill text core.
//!
//! A [`GapBuffer`] keeps its bytes in one contiguous allocation with an unused
//! region (the gap) sitting at the current edit point:
//!
//! ```text
//!  [ bytes before gap | gap (unused) | bytes after gap ]
//!    0..start           start..end     end..storage.len()
//! ```
//!
//! Inserting at the gap only fills the gap, so edits that stay near the same
//! place are amortized O(1). Moving the edit point costs the distance moved.
//! All offsets are logical byte offsets, i.e. the gap is invisible to callers.

/// Error type for gap buffer reads.
pub mod error;
/// The gap buffer itself.
pub mod gap;

pub use error::{GapError, Result};
pub use gap::{DEFAULT_CAPACITY, GapBuffer};
