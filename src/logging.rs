use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_FILE: &str = "journal-tui.log";

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(config: &Config) -> String {
	match &config.log_level {
		Some(level) => level.clone(),
		None if config.dev_mode => "debug".into(),
		None => "info".into(),
	}
}

pub fn log_path(config: &Config) -> PathBuf {
	config.app_dir().join(LOG_FILE)
}

/// Installs the file-backed `tracing` subscriber.
///
/// The terminal belongs to the UI, so output goes to [`log_path`]. Logging is skipped
/// entirely when the file cannot be opened.
pub fn init(config: &Config) {
	let path = log_path(config);
	if let Some(parent) = path.parent() {
		if std::fs::create_dir_all(parent).is_err() {
			return;
		}
	}
	let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
		return;
	};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(config)));
	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init();

	if installed.is_ok() {
		tracing::info!(
			entries_dir = %config.entries_dir.display(),
			dev_mode = config.dev_mode,
			"logging initialized"
		);
	}
}
