//! Console layer errors

use thiserror::Error;

use core_kernel::ValidationError;

/// Errors surfaced by the console layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
