//! Backing file metadata, load and save.
//!
//! A buffer may be attached to a path with [`Buffer::set_file`]. Loading a
//! regular file appends its bytes; loading a directory appends a sorted
//! listing, one entry per line, with a trailing separator on subdirectories.
//! Neither is recorded in history.

use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::time::SystemTime;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::buffer::Buffer;
use crate::error::{FileError, Result};


/// What a buffer holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BufferKind {
	/// Unnamed text that is never saved.
	#[default]
	Scratch,
	/// The content of a regular file.
	File,
	/// A directory listing.
	Dir,
}

/// Metadata about the file behind a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
	pub(crate) path: PathBuf,
	pub(crate) read: bool,
	pub(crate) mtime: Option<SystemTime>,
	pub(crate) sha256: Option<String>,
}

impl FileInfo {
	/// Creates metadata for a path that has not been read yet.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			read: false,
			mtime: None,
			sha256: None,
		}
	}

	/// Returns the path as given.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns whether the file has been loaded since the last reset.
	pub fn is_read(&self) -> bool {
		self.read
	}

	/// Returns the modification time seen at the last load or save.
	pub fn mtime(&self) -> Option<SystemTime> {
		self.mtime
	}

	/// Returns the lower-case hex SHA-256 of the bytes last loaded or saved.
	pub fn sha256(&self) -> Option<&str> {
		self.sha256.as_deref()
	}
}

fn checksum(bytes: &[u8]) -> String {
	format!("{:x}", Sha256::digest(bytes))
}

fn list_dir(path: &Path) -> io::Result<Vec<String>> {
	let mut names = Vec::new();
	for entry in fs::read_dir(path)? {
		let entry = entry?;
		let mut name = entry.file_name().to_string_lossy().into_owned();
		if entry.file_type()?.is_dir() {
			name.push(MAIN_SEPARATOR);
		}
		names.push(name);
	}
	names.sort();
	Ok(names)
}

impl Buffer {
	/// Attaches the buffer to `path`. The file is read by [`load`](Self::load).
	pub fn set_file(&mut self, path: impl Into<PathBuf>) {
		self.file = Some(FileInfo::new(path));
		self.kind = BufferKind::File;
	}

	/// Returns the backing file metadata, if any.
	pub fn file(&self) -> Option<&FileInfo> {
		self.file.as_ref()
	}

	/// Returns what the buffer holds.
	pub fn kind(&self) -> BufferKind {
		self.kind
	}

	/// Returns true if the buffer holds a directory listing.
	pub fn is_dir(&self) -> bool {
		self.kind == BufferKind::Dir
	}

	/// Returns true if a file buffer has edits that were not saved.
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Returns the absolute path of the backing file.
	pub fn name(&self) -> Option<PathBuf> {
		let file = self.file.as_ref()?;
		if file.path.as_os_str().is_empty() {
			return None;
		}
		std::path::absolute(&file.path).ok()
	}

	/// Returns the directory the buffer lives in.
	///
	/// That is the parent of a file, the directory itself for a listing, and
	/// `None` for scratch buffers.
	pub fn work_dir(&self) -> Option<PathBuf> {
		match self.kind {
			BufferKind::File => self.name()?.parent().map(Path::to_path_buf),
			BufferKind::Dir => self.name(),
			BufferKind::Scratch => None,
		}
	}

	/// Reads the backing file into the buffer.
	///
	/// Does nothing without a file or when it was already read. A path that
	/// does not exist is treated as a new, empty file.
	///
	/// # Errors
	///
	/// Returns [`FileError::Io`] if the path exists but cannot be read.
	pub fn load(&mut self) -> Result<(), FileError> {
		let path = match &self.file {
			Some(file) if !file.read => file.path.clone(),
			_ => return Ok(()),
		};

		let meta = match fs::metadata(&path) {
			Ok(meta) => meta,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "new file");
				self.kind = BufferKind::File;
				self.record_disk_state(None, None);
				return Ok(());
			}
			Err(err) => return Err(FileError::io(&path)(err)),
		};

		if meta.is_dir() {
			let names = list_dir(&path).map_err(FileError::io(&path))?;
			for name in &names {
				self.append_raw(name.as_bytes());
				self.append_raw(b"\n");
			}
			debug!(path = %path.display(), entries = names.len(), "directory listed");
			self.kind = BufferKind::Dir;
			self.record_disk_state(None, meta.modified().ok());
		} else {
			let bytes = fs::read(&path).map_err(FileError::io(&path))?;
			self.append_raw(&bytes);
			debug!(path = %path.display(), len = bytes.len(), "file loaded");
			self.kind = BufferKind::File;
			self.record_disk_state(Some(checksum(&bytes)), meta.modified().ok());
		}
		Ok(())
	}

	/// Marks the file read and stores what was last seen on disk.
	fn record_disk_state(&mut self, sha256: Option<String>, mtime: Option<SystemTime>) {
		if let Some(file) = self.file.as_mut() {
			file.read = true;
			file.sha256 = sha256;
			file.mtime = mtime;
		}
	}

	/// Writes the content to the backing file and returns the bytes written.
	///
	/// Only [`BufferKind::File`] buffers are written; other kinds return 0.
	/// Clears the dirty flag and refreshes the checksum and mtime.
	///
	/// # Errors
	///
	/// Returns [`FileError::NoFileName`] without a path, or
	/// [`FileError::Io`] if the write fails.
	pub fn save(&mut self) -> Result<usize, FileError> {
		let path = match &self.file {
			Some(file) if !file.path.as_os_str().is_empty() => file.path.clone(),
			_ => return Err(FileError::NoFileName),
		};
		if self.kind != BufferKind::File {
			return Ok(0);
		}

		let bytes = self.contents();
		fs::write(&path, &bytes).map_err(FileError::io(&path))?;
		let mtime = fs::metadata(&path).and_then(|meta| meta.modified()).ok();
		self.record_disk_state(Some(checksum(&bytes)), mtime);
		self.dirty = false;

		debug!(path = %path.display(), len = bytes.len(), "file saved");
		Ok(bytes.len())
	}

	/// Returns true if the file on disk no longer matches the bytes last
	/// loaded or saved.
	///
	/// A file that was never read or written counts as changed once it
	/// exists. A recorded file that has since disappeared counts as changed.
	///
	/// # Errors
	///
	/// Returns [`FileError::NoFileName`] without a path, or
	/// [`FileError::Io`] if the file cannot be read.
	pub fn changed_on_disk(&self) -> Result<bool, FileError> {
		let file = match &self.file {
			Some(file) if !file.path.as_os_str().is_empty() => file,
			_ => return Err(FileError::NoFileName),
		};
		match fs::read(&file.path) {
			Ok(bytes) => Ok(file.sha256.as_deref() != Some(checksum(&bytes).as_str())),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(file.sha256.is_some()),
			Err(err) => Err(FileError::io(&file.path)(err)),
		}
	}
}
