//! Errors from reading and writing `config.ron`.

use std::path::PathBuf;

/// Why a config file could not be loaded or stored. File errors name the path involved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    WriteError {
        /// Directory or file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("invalid config in {}: {source}", path.display())]
    ParseError {
        /// File that failed to parse.
        path: PathBuf,
        /// RON error with line/column.
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be encoded as RON.
    #[error("cannot encode config: {0}")]
    SerializeError(#[source] ron::Error),
}
