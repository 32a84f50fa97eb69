use thiserror::Error;

use crate::ids::{SpecializationId, UserId};

#[derive(Debug, Error)]
pub enum SmkError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("user {user} does not own specialization {specialization}")]
    Unauthorized {
        user: UserId,
        specialization: SpecializationId,
    },

    #[error("invalid data bundle: {0}")]
    InvalidBundle(String),
}

impl SmkError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmkError>;
