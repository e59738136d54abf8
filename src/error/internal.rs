use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to parse a boolean flag from String
    #[error("Failed to parse boolean from String '{0}'")]
    ParseBool(String),

    /// The global tracing subscriber could not be installed
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
