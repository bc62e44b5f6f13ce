//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! an error into a message on stderr and exit code `2`.

use std::fmt;

use euchre_engine::errors::{EngineError, PackError};

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The game itself failed (pack exhausted, input closed, and so on)
    Engine(EngineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

impl From<PackError> for CliError {
    fn from(error: PackError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euchre_engine::errors::GameError;
    use std::error::Error;

    #[test]
    fn engine_errors_keep_their_source() {
        let err = CliError::from(EngineError::from(GameError::PackExhausted));
        assert_eq!(err.to_string(), "Engine error: Pack is exhausted");
        assert!(err.source().is_some());
    }

    #[test]
    fn pack_errors_are_invalid_input() {
        let err = CliError::from(PackError::TooFewCards {
            found: 3,
            expected: 24,
        });
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("only 3 cards"));
    }
}
