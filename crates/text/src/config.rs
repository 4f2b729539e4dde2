//! Buffer configuration.

use quill_gap_buffer::DEFAULT_CAPACITY;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default tab stop width reported to the rendering layer.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Largest `initial_capacity` accepted, 64 MiB.
pub const MAX_INITIAL_CAPACITY: usize = 64 * 1024 * 1024;

/// Settings applied when a [`Buffer`](crate::Buffer) is created.
///
/// Unset fields fall back to their defaults; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
	/// Bytes of gap storage preallocated for a new buffer.
	pub initial_capacity: usize,
	/// Tab stop width. The core only stores it for the renderer.
	pub tab_width: usize,
}

impl Default for BufferConfig {
	fn default() -> Self {
		Self {
			initial_capacity: DEFAULT_CAPACITY,
			tab_width: DEFAULT_TAB_WIDTH,
		}
	}
}

impl BufferConfig {
	/// Parses a config from TOML source.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] on malformed TOML, a wrongly typed value,
	/// or an unknown key, and [`ConfigError::InvalidCapacity`] if
	/// `initial_capacity` exceeds [`MAX_INITIAL_CAPACITY`].
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the values that [`from_toml`](Self::from_toml) cannot express
	/// as types.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidCapacity`] if `initial_capacity` exceeds
	/// [`MAX_INITIAL_CAPACITY`].
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.initial_capacity > MAX_INITIAL_CAPACITY {
			return Err(ConfigError::InvalidCapacity {
				value: self.initial_capacity,
				max: MAX_INITIAL_CAPACITY,
			});
		}
		Ok(())
	}
}
