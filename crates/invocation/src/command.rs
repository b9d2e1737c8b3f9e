use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Declared metadata of a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
	name: String,
	description: Option<String>,
	short_name: Option<char>,
}

impl CommandMetadata {
	/// Creates metadata for a command declared under `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: None,
			short_name: None,
		}
	}

	/// Attaches a human-readable description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Attaches a single-character alias.
	pub fn with_short_name(mut self, short_name: char) -> Self {
		self.short_name = Some(short_name);
		self
	}

	/// Full declared name of the command.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn short_name(&self) -> Option<char> {
		self.short_name
	}
}

/// An executable command as seen by the invocation layer.
///
/// Only metadata is needed here; running the command is up to the executor.
pub trait Command: Send + Sync + 'static {
	fn metadata(&self) -> &CommandMetadata;
}

/// Identifies a command implementation by its Rust type.
///
/// Equality and hashing use the [`TypeId`] only; the type name is carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct CommandType {
	id: TypeId,
	name: &'static str,
}

impl CommandType {
	/// Returns the identifier of command implementation `C`.
	pub fn of<C: Command>() -> Self {
		Self {
			id: TypeId::of::<C>(),
			name: type_name::<C>(),
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified Rust type name, e.g. `my_app::ServeCommand`.
	pub fn type_name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for CommandType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for CommandType {}

impl Hash for CommandType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for CommandType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CommandType").field(&self.name).finish()
	}
}

impl fmt::Display for CommandType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Registry that maps command types to registered commands.
///
/// Implementations provide their own synchronization for concurrent lookups.
/// Invocations only ever query by type; by-name lookups are the executor's
/// concern.
pub trait CommandManager {
	/// Error returned when a type has no registered command.
	type Error;

	/// Finds the command registered for `command_type`.
	fn lookup_by_type(&self, command_type: CommandType) -> Result<&dyn Command, Self::Error>;
}
