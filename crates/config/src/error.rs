//! Error types for toast configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Depth scale would make the second toast vanish or grow.
	#[error("depth-scale must be within (0, 1), got {0}")]
	DepthScale(f64),

	/// Exit animation must take some time to run.
	#[error("exit-duration-ms must be greater than zero")]
	ZeroExitDuration,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
