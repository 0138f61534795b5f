//! Command-line dispatch framework.
//!
//! This module provides the command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`OptionDefinition`] / [`InputDefinition`] for declaring a command's flags
//! - [`build_options_from`] for parsing raw tokens into [`InputOptions`]
//! - [`CommandRegistry`] for routing command ids to implementations
//! - [`HelpCommand`] for the built-in command listing
//! - [`dispatch`] / [`bootstrap`] for the top-level entry point
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use std::sync::Arc;
//!
//! use cairn::cli::{
//!     dispatch, Command, CommandRegistry, InputDefinition, InputOptions, OptionDefinition,
//! };
//!
//! struct GreetCommand;
//!
//! impl Command for GreetCommand {
//!     fn id(&self) -> &str {
//!         "greet"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Greets somebody by name"
//!     }
//!
//!     fn input_definition(&self) -> InputDefinition {
//!         InputDefinition::new()
//!             .with_option(OptionDefinition::new("name", "Name to greet").required())
//!     }
//!
//!     fn exec(&self, options: &InputOptions, output: &mut dyn Write) -> cairn::Result<()> {
//!         let name = options.raw("name").unwrap().string_or("").value;
//!         writeln!(output, "Hello, {name}!")?;
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(Arc::new(GreetCommand)).unwrap();
//!
//! let args = vec!["greet".to_string(), "--name=Ann".to_string()];
//! let mut output = Vec::new();
//! let mut status = 0;
//! dispatch(&args, &mut registry, &mut output, &mut |code| status = code);
//!
//! assert_eq!(status, 0);
//! assert_eq!(String::from_utf8(output).unwrap(), "Hello, Ann!\n");
//! ```

pub mod bootstrap;
pub mod command;
pub mod help;
pub mod options;
pub mod registry;

pub use bootstrap::{bootstrap, dispatch, STATUS_ERR, STATUS_OK};
pub use command::Command;
pub use help::HelpCommand;
pub use options::{
    build_options_from, InputDefinition, InputOption, InputOptions, OptionDefinition, OptionError,
};
pub use registry::CommandRegistry;
