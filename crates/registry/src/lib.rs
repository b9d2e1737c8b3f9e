//! Command registry backing invocation resolution.
//!
//! Commands are registered once through a [`RegistryBuilder`] and frozen into
//! a [`CommandRegistry`] snapshot. The snapshot is immutable and cheap to
//! clone, so any number of threads can resolve invocations against it.
//!
//! ```
//! use bootcmd_invocation::{Command, CommandMetadata, Invocation};
//! use bootcmd_registry::CommandRegistry;
//!
//! struct Serve(CommandMetadata);
//!
//! impl Command for Serve {
//! 	fn metadata(&self) -> &CommandMetadata {
//! 		&self.0
//! 	}
//! }
//!
//! let mut builder = CommandRegistry::builder();
//! builder.register(Serve(CommandMetadata::new("serve")))?;
//! let registry = builder.build();
//!
//! let invocation = Invocation::for_type::<Serve>().build();
//! assert_eq!(invocation.resolve_command_name(&registry)?, "serve");
//! # Ok::<(), bootcmd_registry::RegistryError>(())
//! ```

mod error;
mod registry;

pub use error::{RegistryError, Result};
pub use registry::{CommandRegistry, RegistryBuilder};
