use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown analysis kind: {0}")]
    UnknownKind(String),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
