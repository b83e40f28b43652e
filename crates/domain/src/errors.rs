use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Unknown cache key: {0}")]
    UnknownKey(String),

    #[error("Stale generation for {key}: expected {expected}, current {current}")]
    StaleGeneration {
        key: String,
        expected: u64,
        current: u64,
    },

    #[error("Collaborator timed out: {0}")]
    CollaboratorTimeout(String),

    #[error("Collaborator call failed: {0}")]
    CollaboratorFailure(String),

    #[error("Purge-all requires explicit confirmation")]
    InvalidConfirmation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
