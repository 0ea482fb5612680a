use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileServiceError {
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Profile update rejected: {0}")]
    Rejected(String),
}
