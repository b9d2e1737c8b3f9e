//! Error types for building invocations.

#[cfg(feature = "config")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing invocations.
///
/// Failures of command lookups are not represented here: they belong to the
/// [`CommandManager`](crate::CommandManager) and are returned unchanged.
#[derive(Debug, Error)]
pub enum InvocationError {
	/// A by-name invocation was started with an empty command name.
	#[error("command name must not be empty")]
	EmptyCommandName,

	/// A startup invocation list could not be parsed.
	#[cfg(feature = "config")]
	#[error("invalid startup config: {0}")]
	Toml(#[from] toml::de::Error),

	/// A startup invocation file could not be read.
	#[cfg(feature = "config")]
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for invocation construction.
pub type Result<T> = std::result::Result<T, InvocationError>;
