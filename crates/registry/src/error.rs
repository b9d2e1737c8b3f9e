/// Command registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// No command is registered for the requested implementation type.
	#[error("no command registered for type {type_name}")]
	UnknownType { type_name: &'static str },

	/// No command is registered under the requested name or short name.
	#[error("unknown command: {0}")]
	UnknownName(String),

	/// The implementation type was already registered.
	#[error("command type {type_name} registered twice")]
	DuplicateType { type_name: &'static str },

	/// A name or short name is already taken by another command.
	#[error("command name {name:?} already used by {existing}")]
	DuplicateName { name: String, existing: &'static str },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
