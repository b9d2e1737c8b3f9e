//! Deferred command invocations.
//!
//! An [`Invocation`] records which command to run, the arguments to pass, and
//! whether a failure should abort the host program. Nothing is resolved or
//! executed when it is built; the command name is resolved later against a
//! [`CommandManager`], once the set of available commands is wired up.
//!
//! ```
//! use bootcmd_invocation::Invocation;
//!
//! let invocation = Invocation::for_name("migrate")?.arguments(["--all"]).terminate_on_errors().build();
//! assert_eq!(invocation.arguments(), ["--all"]);
//! assert!(invocation.should_terminate_on_failure());
//! # Ok::<(), bootcmd_invocation::InvocationError>(())
//! ```

mod builder;
mod command;
#[cfg(feature = "config")]
pub mod config;
mod error;
mod invocation;

pub use builder::InvocationBuilder;
pub use command::{Command, CommandManager, CommandMetadata, CommandType};
pub use error::{InvocationError, Result};
pub use invocation::{Invocation, Resolution};
