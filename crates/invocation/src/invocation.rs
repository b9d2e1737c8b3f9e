use std::fmt;

use crate::builder::InvocationBuilder;
use crate::command::{Command, CommandManager, CommandType};
use crate::error::Result;

/// How an invocation identifies its command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
	/// A full command name, trusted as-is until execution.
	ByName(String),
	/// A command implementation, resolved through the manager.
	ByType(CommandType),
}

impl Resolution {
	/// Resolves the command name this strategy refers to.
	///
	/// `ByName` returns the stored name without consulting `manager`. `ByType`
	/// looks the type up and returns the declared name of the registered
	/// command; a lookup failure is returned exactly as the manager produced it.
	pub fn resolve_command_name<'a, M>(&'a self, manager: &'a M) -> std::result::Result<&'a str, M::Error>
	where
		M: CommandManager + ?Sized,
	{
		match self {
			// Unknown names surface when the executor runs the command.
			Self::ByName(name) => Ok(name.as_str()),
			Self::ByType(command_type) => Ok(manager.lookup_by_type(*command_type)?.metadata().name()),
		}
	}
}

impl fmt::Display for Resolution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ByName(name) => write!(f, "name:{name}"),
			Self::ByType(command_type) => write!(f, "type:{command_type}"),
		}
	}
}

/// A recipe for invoking a command with preset arguments.
///
/// Built through [`InvocationBuilder`] and immutable afterwards, so a built
/// invocation can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invocation {
	resolution: Resolution,
	arguments: Vec<String>,
	terminate_on_failure: bool,
}

impl Invocation {
	pub(crate) fn new(resolution: Resolution, arguments: Vec<String>, terminate_on_failure: bool) -> Self {
		Self {
			resolution,
			arguments,
			terminate_on_failure,
		}
	}

	/// Starts building an invocation of a named command.
	///
	/// Fails with [`InvocationError::EmptyCommandName`](crate::InvocationError::EmptyCommandName)
	/// if `full_command_name` is empty.
	pub fn for_name(full_command_name: impl Into<String>) -> Result<InvocationBuilder> {
		InvocationBuilder::for_name(full_command_name)
	}

	/// Starts building an invocation of the command implemented by `C`.
	pub fn for_type<C: Command>() -> InvocationBuilder {
		InvocationBuilder::for_type::<C>()
	}

	/// Starts building an invocation of the command identified by `command_type`.
	pub fn for_command_type(command_type: CommandType) -> InvocationBuilder {
		InvocationBuilder::for_command_type(command_type)
	}

	/// Resolves the name of the command to run.
	///
	/// See [`Resolution::resolve_command_name`].
	pub fn resolve_command_name<'a, M>(&'a self, manager: &'a M) -> std::result::Result<&'a str, M::Error>
	where
		M: CommandManager + ?Sized,
	{
		self.resolution.resolve_command_name(manager)
	}

	pub fn resolution(&self) -> &Resolution {
		&self.resolution
	}

	/// Arguments passed to the command, in order.
	pub fn arguments(&self) -> &[String] {
		&self.arguments
	}

	/// Returns true if the host program should terminate when this invocation fails.
	pub fn should_terminate_on_failure(&self) -> bool {
		self.terminate_on_failure
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.resolution)?;
		for arg in &self.arguments {
			write!(f, " {arg}")?;
		}
		if self.terminate_on_failure {
			f.write_str("!")?;
		}
		Ok(())
	}
}
