use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
	/// Entry file (or store root) does not exist
	#[error("'{}' not found", path.display())]
	NotFound { path: PathBuf },

	/// Read, write, permission or disk failure
	#[error("Failed to access '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Stored record is not a valid entry
	#[error("Failed to parse '{}': {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// Configuration file could not be read or understood
	#[error("Invalid configuration '{}': {message}", path.display())]
	Config { path: PathBuf, message: String },
}

impl JournalError {
	/// Classifies an I/O error raised while operating on `path`.
	pub fn from_io(path: &Path, source: io::Error) -> Self {
		if source.kind() == io::ErrorKind::NotFound {
			Self::NotFound {
				path: path.to_path_buf(),
			}
		} else {
			Self::Io {
				path: path.to_path_buf(),
				source,
			}
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

pub type Result<T> = std::result::Result<T, JournalError>;
