//! Command capability.
//!
//! Each unit of work exposed to the dispatcher implements [`Command`].
//! Commands are constructed at startup, registered once, and never mutated;
//! the registry stores them behind `Arc<dyn Command>` so external crates can
//! add their own implementations.

use std::io::Write;

use crate::error::Result;

use super::options::{InputDefinition, InputOptions};

/// A unit of work invocable from the command line.
///
/// Implementations supply an identifier, a description for help output, the
/// declared option schema, and the execution routine. Execution receives the
/// parsed options (read-only) and the output sink; user-visible text goes to
/// the sink, never directly to stdout.
pub trait Command: Send + Sync {
    /// Unique identifier, matched against the first CLI argument.
    fn id(&self) -> &str;

    /// Human-readable description, word-wrapped in help output.
    fn description(&self) -> &str;

    /// The declared option schema. Built fresh on each call.
    fn input_definition(&self) -> InputDefinition;

    /// Run the command with the parsed options.
    fn exec(&self, options: &InputOptions, output: &mut dyn Write) -> Result<()>;
}
