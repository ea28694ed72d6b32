//! Command parsing and per-command handlers.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::error::CommandResult;
use tracing::warn;

/// Run a handler and turn its failure into the text shown to the user.
///
/// Handler errors never reach the interpreter loop.
pub fn catch_errors<F>(command: &Command, handler: F) -> String
where
    F: FnOnce() -> CommandResult<String>,
{
    handler().unwrap_or_else(|err| {
        warn!(command = %command.name(), error = %err, "Command failed");
        err.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn test_catch_errors_passes_success_through() {
        let reply = catch_errors(&Command::Hello, || Ok("hi".to_string()));
        assert_eq!(reply, "hi");
    }

    #[test]
    fn test_catch_errors_shows_error_text() {
        let reply = catch_errors(&Command::Phone, || {
            Err(CommandError::ContactNotFound("John".to_string()))
        });
        assert_eq!(reply, "Contact 'John' not found.");
    }
}
