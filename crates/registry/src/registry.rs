use std::fmt;
use std::sync::Arc;

use bootcmd_invocation::{Command, CommandManager, CommandType};
use rustc_hash::FxHashMap as HashMap;

use crate::error::{RegistryError, Result};

struct Entry {
	command_type: CommandType,
	command: Box<dyn Command>,
}

#[derive(Default)]
struct RegistrySnapshot {
	entries: Vec<Entry>,
	by_type: HashMap<CommandType, usize>,
	by_name: HashMap<Box<str>, usize>,
	by_short: HashMap<char, usize>,
}

impl RegistrySnapshot {
	#[inline]
	fn command(&self, idx: usize) -> &dyn Command {
		self.entries[idx].command.as_ref()
	}
}

/// Collects commands before freezing them into a [`CommandRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
	snap: RegistrySnapshot,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `command` under its implementation type, declared name, and
	/// short name if it has one.
	///
	/// Rejects a type registered twice and names already taken; the builder is
	/// left unchanged on error.
	pub fn register<C: Command>(&mut self, command: C) -> Result<&mut Self> {
		let command_type = CommandType::of::<C>();
		let snap = &mut self.snap;
		if snap.by_type.contains_key(&command_type) {
			return Err(RegistryError::DuplicateType {
				type_name: command_type.type_name(),
			});
		}

		let meta = command.metadata();
		let name = meta.name();
		if let Some(&idx) = snap.by_name.get(name) {
			return Err(RegistryError::DuplicateName {
				name: name.to_string(),
				existing: snap.entries[idx].command_type.type_name(),
			});
		}
		if let Some(short) = meta.short_name()
			&& let Some(&idx) = snap.by_short.get(&short)
		{
			return Err(RegistryError::DuplicateName {
				name: short.to_string(),
				existing: snap.entries[idx].command_type.type_name(),
			});
		}

		let idx = snap.entries.len();
		snap.by_type.insert(command_type, idx);
		snap.by_name.insert(name.into(), idx);
		if let Some(short) = meta.short_name() {
			snap.by_short.insert(short, idx);
		}
		tracing::debug!(command = name, command_type = command_type.type_name(), "registry.register");
		snap.entries.push(Entry {
			command_type,
			command: Box::new(command),
		});
		Ok(self)
	}

	/// Freezes the registered commands into an immutable registry.
	pub fn build(self) -> CommandRegistry {
		tracing::debug!(count = self.snap.entries.len(), "registry.build");
		CommandRegistry {
			snap: Arc::new(self.snap),
		}
	}
}

/// Immutable registry of commands, keyed by implementation type and name.
///
/// Clones share the same snapshot.
#[derive(Clone, Default)]
pub struct CommandRegistry {
	snap: Arc<RegistrySnapshot>,
}

impl CommandRegistry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Finds the command registered for `command_type`.
	pub fn lookup_by_type(&self, command_type: CommandType) -> Result<&dyn Command> {
		tracing::trace!(command_type = command_type.type_name(), "registry.lookup_by_type");
		let idx = self.snap.by_type.get(&command_type).ok_or(RegistryError::UnknownType {
			type_name: command_type.type_name(),
		})?;
		Ok(self.snap.command(*idx))
	}

	/// Finds a command by its full name, or by its short name when `name` is a
	/// single character. Full names win over short names.
	pub fn lookup_by_name(&self, name: &str) -> Result<&dyn Command> {
		tracing::trace!(command = name, "registry.lookup_by_name");
		self.find_index(name)
			.map(|idx| self.snap.command(idx))
			.ok_or_else(|| RegistryError::UnknownName(name.to_string()))
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.find_index(name).is_some()
	}

	/// Declared command names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.snap.by_name.keys().map(|k| &**k).collect();
		names.sort_unstable();
		names
	}

	/// Registered commands in registration order.
	pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
		(0..self.snap.entries.len()).map(|idx| self.snap.command(idx))
	}

	pub fn len(&self) -> usize {
		self.snap.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.entries.is_empty()
	}

	fn find_index(&self, name: &str) -> Option<usize> {
		if let Some(&idx) = self.snap.by_name.get(name) {
			return Some(idx);
		}
		let mut chars = name.chars();
		match (chars.next(), chars.next()) {
			(Some(short), None) => self.snap.by_short.get(&short).copied(),
			_ => None,
		}
	}
}

impl CommandManager for CommandRegistry {
	type Error = RegistryError;

	fn lookup_by_type(&self, command_type: CommandType) -> Result<&dyn Command> {
		CommandRegistry::lookup_by_type(self, command_type)
	}
}

impl fmt::Debug for CommandRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandRegistry").field("commands", &self.names()).finish()
	}
}
