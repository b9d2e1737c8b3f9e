use crate::command::{Command, CommandType};
use crate::error::{InvocationError, Result};
use crate::invocation::{Invocation, Resolution};

/// Accumulates settings for an [`Invocation`].
///
/// The target command is fixed when the builder is created; arguments and the
/// abort policy may be set any number of times before [`build`](Self::build).
/// The builder is not synchronized: share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
	target: Resolution,
	arguments: Vec<String>,
	terminate_on_failure: bool,
}

impl InvocationBuilder {
	fn new(target: Resolution) -> Self {
		Self {
			target,
			arguments: Vec::new(),
			terminate_on_failure: false,
		}
	}

	/// Starts a builder for a named command.
	pub fn for_name(full_command_name: impl Into<String>) -> Result<Self> {
		let name = full_command_name.into();
		if name.is_empty() {
			return Err(InvocationError::EmptyCommandName);
		}
		Ok(Self::new(Resolution::ByName(name)))
	}

	/// Starts a builder for the command implemented by `C`.
	pub fn for_type<C: Command>() -> Self {
		Self::for_command_type(CommandType::of::<C>())
	}

	pub fn for_command_type(command_type: CommandType) -> Self {
		Self::new(Resolution::ByType(command_type))
	}

	/// Replaces the command line arguments for this invocation.
	///
	/// Passing no arguments (an empty iterator or `None`) clears the list.
	pub fn arguments<I>(&mut self, args: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.arguments = args.into_iter().map(Into::into).collect();
		self
	}

	/// Marks the invocation as fatal: the host program should terminate if it fails.
	pub fn terminate_on_errors(&mut self) -> &mut Self {
		self.terminate_on_failure = true;
		self
	}

	/// Produces an invocation from the current settings.
	pub fn build(&self) -> Invocation {
		Invocation::new(self.target.clone(), self.arguments.clone(), self.terminate_on_failure)
	}
}
