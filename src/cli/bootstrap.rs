//! Dispatch entry point.
//!
//! Translates raw process arguments into one command invocation and an exit
//! status: resolve the command id, rebuild and register the help command,
//! parse options against the command's schema, execute, and map the outcome
//! to the exit callback. A panic inside `exec` is caught here and reported
//! as an ordinary failure; the dispatcher never unwinds past its own frame.
//!
//! [`dispatch`] takes the output sink and exit callback explicitly, which is
//! the testable form. [`bootstrap`] is the production entry point with the
//! documented defaults: process arguments, stdout, and
//! [`std::process::exit`].

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{CairnError, Result};

use super::command::Command;
use super::help::HelpCommand;
use super::options::build_options_from;
use super::registry::CommandRegistry;

/// Exit status reported on success.
pub const STATUS_OK: i32 = 0;
/// Exit status reported on any failure.
pub const STATUS_ERR: i32 = 1;

/// Split raw arguments into the command id and its raw option tokens.
///
/// A leading `--` is dropped when more than one argument is given. The
/// first remaining token, trimmed, is the command id; with no tokens the
/// id is empty.
fn parse_input(args: &[String]) -> (String, Vec<String>) {
    let args = if args.len() > 1 && args[0] == "--" {
        &args[1..]
    } else {
        args
    };

    match args.split_first() {
        Some((first, rest)) => (first.trim().to_string(), rest.to_vec()),
        None => (String::new(), Vec::new()),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "command panicked".to_string()
    }
}

/// Parse options for the command and execute it, catching panics.
fn run_command(
    command: &Arc<dyn Command>,
    raw_options: &[String],
    output: &mut dyn Write,
) -> Result<()> {
    let (options, errors) = build_options_from(raw_options, &command.input_definition());
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        return Err(CairnError::InvalidOptions {
            command: command.id().to_string(),
            message,
        });
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| command.exec(&options, output)));
    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(CairnError::ExecutionFailed {
            command: command.id().to_string(),
            message: err.to_string(),
        }),
        Err(payload) => Err(CairnError::ExecutionFailed {
            command: command.id().to_string(),
            message: panic_message(payload),
        }),
    }
}

/// Run one dispatch with an explicit output sink and exit callback.
///
/// A fresh [`HelpCommand`] wrapping the current registry contents is
/// registered first; an id clash (a user-registered `help` command) is
/// silently ignored so the user's command wins. An empty command id
/// resolves to `help`. On failure the composed message is written once to
/// the sink and the exit callback receives [`STATUS_ERR`]; on success it
/// receives [`STATUS_OK`] and nothing is written beyond what `exec` wrote.
pub fn dispatch(
    args: &[String],
    registry: &mut CommandRegistry,
    output: &mut dyn Write,
    process_exit: &mut dyn FnMut(i32),
) {
    let help = HelpCommand::new(registry.commands().into_values().collect());
    let _ = registry.register(Arc::new(help));

    let (mut command_id, raw_options) = parse_input(args);
    if command_id.is_empty() {
        command_id = HelpCommand::ID.to_string();
    }
    tracing::debug!(command = %command_id, options = raw_options.len(), "dispatching");

    let outcome = match registry.command(&command_id) {
        Some(command) => run_command(&command, &raw_options, output),
        None => Err(CairnError::UnknownCommand { id: command_id }),
    };

    match outcome {
        Ok(()) => process_exit(STATUS_OK),
        Err(err) => {
            if let Err(write_err) = writeln!(output, "{err}") {
                tracing::warn!(error = %write_err, "failed to write failure to output sink");
            }
            process_exit(STATUS_ERR);
        }
    }
}

/// Run one dispatch against the process defaults.
///
/// Reads the process arguments (program name excluded), writes to stdout,
/// and terminates the process with the resulting status via
/// [`std::process::exit`].
pub fn bootstrap(registry: &mut CommandRegistry) {
    let args: Vec<String> = std::env::args().skip(1).collect();
    dispatch(&args, registry, &mut std::io::stdout(), &mut |code| {
        std::process::exit(code)
    });
}
