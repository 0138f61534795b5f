//! Built-in help command.
//!
//! Lists every registered command with a word-wrapped description and its
//! declared options. The dispatcher rebuilds and re-registers this command
//! on each call so the listing always reflects the registry it was built
//! from; a user-registered command with the same id wins the clash.

use std::io::Write;
use std::sync::Arc;

use crate::error::Result;

use super::command::Command;
use super::options::{InputDefinition, InputOptions};

/// Wrap width for command descriptions in help output.
const WRAP_WIDTH: usize = 80;

/// Built-in command listing all registered commands.
pub struct HelpCommand {
    available: Vec<Arc<dyn Command>>,
}

impl HelpCommand {
    /// The fixed id the help command registers under.
    pub const ID: &'static str = "help";

    /// Create a help command listing the given commands.
    pub fn new(available: Vec<Arc<dyn Command>>) -> Self {
        Self { available }
    }
}

impl Command for HelpCommand {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Lists all available commands"
    }

    fn input_definition(&self) -> InputDefinition {
        InputDefinition::new()
    }

    fn exec(&self, _options: &InputOptions, output: &mut dyn Write) -> Result<()> {
        let mut rows = vec![(self.id().to_string(), "Available CLI Commands:".to_string())];

        for command in &self.available {
            rows.push(("_________".to_string(), String::new()));

            let chunks = chunk_description(command.description(), WRAP_WIDTH);
            rows.push((command.id().to_string(), chunks[0].clone()));
            for chunk in &chunks[1..] {
                rows.push((String::new(), chunk.clone()));
            }

            let definition = command.input_definition();
            if !definition.is_empty() {
                rows.push((String::new(), "Options:".to_string()));
                for def in definition.iter() {
                    rows.push((
                        String::new(),
                        format!(
                            "--{} {} (default {})",
                            def.name(),
                            def.description(),
                            def.default_value()
                        ),
                    ));
                }
            }
        }

        write_aligned(&rows, output)?;
        Ok(())
    }
}

/// Write two-column rows with the first column padded to its widest cell.
fn write_aligned(rows: &[(String, String)], output: &mut dyn Write) -> std::io::Result<()> {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, right) in rows {
        let line = format!("{left:width$} {right}");
        writeln!(output, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Split a description into display chunks.
///
/// Accumulates characters and flushes a trimmed chunk whenever the
/// accumulated length has reached `width` and the current character is a
/// space, or on a newline. Trailing text flushes as-is. An empty input
/// yields one empty chunk. Splits never land mid-word.
fn chunk_description(description: &str, width: usize) -> Vec<String> {
    if description.is_empty() {
        return vec![String::new()];
    }

    let mut chunks = Vec::new();
    let mut accumulator = String::new();
    for ch in description.chars() {
        accumulator.push(ch);
        if (accumulator.len() >= width && ch == ' ') || ch == '\n' {
            chunks.push(accumulator.trim().to_string());
            accumulator.clear();
        }
    }

    if !accumulator.is_empty() {
        chunks.push(accumulator);
    }

    chunks
}
