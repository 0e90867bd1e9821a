use crate::patch::PatchError;
use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more input fields violated their constraints.
    #[error("Validation failed: {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PatchError> for CoreError {
    fn from(err: PatchError) -> Self {
        CoreError::Validation(format!("Invalid patch document: {err}"))
    }
}
