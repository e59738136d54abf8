//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup, the scheduler, Discord
//! adapters, and anything else that can fail as a whole. Failures that are expected
//! during normal operation, such as Discord refusing to rename a single member, are
//! modelled as `MutationError` values instead and never abort a batch.

pub mod config;
pub mod internal;
pub mod mutation;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

pub use mutation::MutationError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected behavior or a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The guild member list (or the bot's own member) could not be read.
    ///
    /// This is the only failure a nickname batch surfaces to its caller; per-member
    /// failures are recorded in the batch result instead.
    #[error("Failed to read guild members: {0}")]
    MemberSource(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
