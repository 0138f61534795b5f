//! Command registry.
//!
//! The [`CommandRegistry`] maps command ids to their implementations. It is
//! built once at startup and read during dispatch; it is not guarded by a
//! lock, so one instance must not be dispatched concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CairnError, Result};

use super::command::Command;

/// Registry of available commands, keyed by id.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its id.
    ///
    /// Fails with [`CairnError::DuplicateCommand`] when the id is already
    /// taken; the existing command is kept and never overwritten.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<()> {
        let id = command.id().to_string();
        if self.commands.contains_key(&id) {
            return Err(CairnError::DuplicateCommand { id });
        }
        tracing::debug!(command = %id, "registered command");
        self.commands.insert(id, command);
        Ok(())
    }

    /// A defensive copy of the id-to-command mapping.
    ///
    /// Mutating the returned map never affects the registry.
    pub fn commands(&self) -> HashMap<String, Arc<dyn Command>> {
        self.commands.clone()
    }

    /// Look up a command by id. Absence is not an error.
    pub fn command(&self, id: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(id).cloned()
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
