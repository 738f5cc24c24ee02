//! CLI error types.

use folio_config::ConfigError;
use folio_richtext::ParseError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),
}
