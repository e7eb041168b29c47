//! Request payloads accepted by the API routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod preferences;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid user id")]
    InvalidUserId,

    #[error("invalid preference name")]
    InvalidName,
}
