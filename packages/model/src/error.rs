use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),
}
