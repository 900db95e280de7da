use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {} invalid field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("malformed questionnaire: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not encode assessment: {0}")]
    Encode(#[source] serde_json::Error),
}
