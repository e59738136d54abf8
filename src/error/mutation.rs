use thiserror::Error;

/// Failure of a single nickname change or direct message.
///
/// These are recovered locally: a batch records the message and moves on to the
/// next member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// Discord rejected or failed the request (missing access, rate limit, network).
    #[error("Discord request failed: {0}")]
    Discord(String),

    /// The target refused the change, e.g. a user with direct messages disabled.
    #[error("Request rejected: {0}")]
    Rejected(String),
}
