//! Startup invocation lists loaded from TOML.
//!
//! ```toml
//! [[invocations]]
//! command = "migrate"
//! args = ["--all"]
//! terminate_on_failure = true
//!
//! [[invocations]]
//! command = "serve"
//! ```
//!
//! Config can only name commands, so every entry becomes a by-name
//! [`Invocation`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::InvocationBuilder;
use crate::error::{InvocationError, Result};
use crate::invocation::Invocation;

/// One configured invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvocationSpec {
	/// Full name of the command.
	pub command: String,
	#[serde(default)]
	pub args: Vec<String>,
	#[serde(default)]
	pub terminate_on_failure: bool,
}

impl InvocationSpec {
	pub fn to_builder(&self) -> Result<InvocationBuilder> {
		let mut builder = InvocationBuilder::for_name(self.command.as_str())?;
		builder.arguments(&self.args);
		if self.terminate_on_failure {
			builder.terminate_on_errors();
		}
		Ok(builder)
	}

	pub fn build(&self) -> Result<Invocation> {
		Ok(self.to_builder()?.build())
	}
}

/// Ordered list of invocations to run at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
	#[serde(default)]
	pub invocations: Vec<InvocationSpec>,
}

impl StartupConfig {
	/// Parses a startup list from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		tracing::debug!(count = config.invocations.len(), "startup.config.parsed");
		Ok(config)
	}

	/// Reads and parses a startup list from `path`.
	pub fn from_path(path: &Path) -> Result<Self> {
		let source = std::fs::read_to_string(path).map_err(|error| InvocationError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		tracing::debug!(path = %path.display(), "startup.config.read");
		Self::from_toml_str(&source)
	}

	/// Builds every configured invocation, keeping config order.
	///
	/// Stops at the first entry with an empty command name.
	pub fn build(&self) -> Result<Vec<Invocation>> {
		self.invocations.iter().map(InvocationSpec::build).collect()
	}
}

#[cfg(test)]
mod tests;
