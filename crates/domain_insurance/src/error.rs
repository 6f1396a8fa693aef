//! Insurance policy errors

use thiserror::Error;

/// Errors that can occur when building or parsing a policy reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No policy identifier was supplied
    #[error("Missing required field: policy_id")]
    MissingPolicyId,

    /// Combined input did not match the accepted format
    #[error("Invalid policy input: {0}")]
    InvalidFormat(String),
}

impl PolicyError {
    /// Creates an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        PolicyError::InvalidFormat(message.into())
    }
}
