use thiserror::Error;

/// Validation errors for area and section payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AreaError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot exceed {max} characters")]
    NameTooLong { max: usize },
    #[error("Area type cannot be empty")]
    EmptyKind,
    #[error("Update request changes nothing")]
    EmptyUpdate,
}
