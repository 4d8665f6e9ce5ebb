//! Layered configuration.
//!
//! Sources are applied from least to most specific, each one overwriting only the fields it
//! sets:
//!
//! 1. built-in defaults
//! 2. `/etc/journal-tui/config.toml`
//! 3. `~/.journal-tui/config.toml`
//! 4. `./journal-tui.toml`
//! 5. command line flags (see `main.rs`)
//!
//! ```toml
//! entries_dir = "~/.journal-tui/entries"
//! dev_mode = false
//! log_level = "debug"
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::JournalError;
use crate::error::Result;

pub const APP_DIR: &str = ".journal-tui";
pub const SYSTEM_CONFIG: &str = "/etc/journal-tui/config.toml";
pub const USER_CONFIG: &str = "config.toml";
pub const LOCAL_CONFIG: &str = "journal-tui.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
	/// Store root holding one file per entry
	pub entries_dir: PathBuf,
	pub dev_mode: bool,
	/// `tracing` filter directive, e.g. `info` or `journal_tui=trace`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub log_level: Option<String>,
}

/// One configuration source. Absent fields leave the earlier value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
	pub entries_dir: Option<PathBuf>,
	pub dev_mode: Option<bool>,
	pub log_level: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		let entries_dir = match home_dir() {
			Some(home) => home.join(APP_DIR).join("entries"),
			None => PathBuf::from("entries"),
		};
		Self {
			entries_dir,
			dev_mode: false,
			log_level: None,
		}
	}
}

impl Config {
	/// Applies `sources` in order on top of the defaults; missing files are skipped
	pub fn load_from(sources: &[PathBuf]) -> Result<Self> {
		let mut config = Self::default();
		for path in sources {
			if let Some(layer) = read_layer(path)? {
				tracing::debug!(path = %path.display(), "applying config file");
				config.merge(layer);
			}
		}
		Ok(config)
	}

	pub fn merge(&mut self, layer: ConfigLayer) {
		if let Some(dir) = layer.entries_dir {
			self.entries_dir = expand_tilde(&dir);
		}
		if let Some(dev_mode) = layer.dev_mode {
			self.dev_mode = dev_mode;
		}
		if layer.log_level.is_some() {
			self.log_level = layer.log_level;
		}
	}

	/// Writes this configuration as TOML to `path`, creating parent directories
	pub fn save_to(&self, path: &Path) -> Result<()> {
		let text = toml::to_string_pretty(self).map_err(|err| JournalError::Config {
			path: path.to_path_buf(),
			message: err.to_string(),
		})?;
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).map_err(|source| JournalError::Io {
				path: parent.to_path_buf(),
				source,
			})?;
		}
		fs::write(path, text).map_err(|source| JournalError::Io {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Directory for user-level files: `~/.journal-tui`, or next to the entries without a home
	pub fn app_dir(&self) -> PathBuf {
		match home_dir() {
			Some(home) => home.join(APP_DIR),
			None => self
				.entries_dir
				.parent()
				.map(Path::to_path_buf)
				.unwrap_or_else(|| PathBuf::from(".")),
		}
	}
}

/// Writes the defaults to the user config file unless it already exists.
///
/// Returns the path written, `None` when a file was already there or there is no home.
pub fn create_default_user_config() -> Result<Option<PathBuf>> {
	let Some(path) = user_config_path() else {
		return Ok(None);
	};
	Ok(create_default_config(&path)?.then_some(path))
}

/// Writes [`Config::default`] to `path` if nothing is there yet; `true` when written
pub fn create_default_config(path: &Path) -> Result<bool> {
	if path.exists() {
		return Ok(false);
	}
	Config::default().save_to(path)?;
	Ok(true)
}

pub fn standard_sources() -> Vec<PathBuf> {
	let mut sources = vec![PathBuf::from(SYSTEM_CONFIG)];
	sources.extend(user_config_path());
	sources.push(PathBuf::from(LOCAL_CONFIG));
	sources
}

pub fn user_config_path() -> Option<PathBuf> {
	home_dir().map(|home| home.join(APP_DIR).join(USER_CONFIG))
}

pub fn home_dir() -> Option<PathBuf> {
	std::env::var_os("HOME")
		.or_else(|| std::env::var_os("USERPROFILE"))
		.filter(|home| !home.is_empty())
		.map(PathBuf::from)
}

/// Replaces a leading `~` with the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
	match (path.strip_prefix("~"), home_dir()) {
		(Ok(rest), Some(home)) => home.join(rest),
		_ => path.to_path_buf(),
	}
}

fn read_layer(path: &Path) -> Result<Option<ConfigLayer>> {
	let text = match fs::read_to_string(path) {
		Ok(text) => text,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(err) => {
			return Err(JournalError::Config {
				path: path.to_path_buf(),
				message: err.to_string(),
			})
		}
	};
	toml::from_str(&text)
		.map(Some)
		.map_err(|err| JournalError::Config {
			path: path.to_path_buf(),
			message: err.to_string(),
		})
}
