//! medlytics-instruments
//!
//! Questionnaire definitions and the rule-based scoring engine. Scoring is
//! pure computation with no I/O: every scorer is a total function from a
//! normalized input record to its assessment.

pub mod crisis;
pub mod error;
pub mod instruments;
pub mod outcome;
pub mod scoring;

use medlytics_core::models::analysis::AnalysisKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

use error::InstrumentError;
use outcome::RiskLevel;
use scoring::{Section, ValidationError};

pub use instruments::gad7::score_anxiety;
pub use instruments::phq9::score_depression;

/// A scored questionnaire in wire form, ready to hand to persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub risk_level: RiskLevel,
    /// The normalized input, with every defaulted field filled in.
    pub input: serde_json::Value,
    pub result: serde_json::Value,
}

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> AnalysisKind;

    /// Unique identifier, also the URL segment (e.g. "depression").
    fn id(&self) -> &str {
        self.kind().as_str()
    }

    /// Human-readable name (e.g. "PHQ-9 Depression Screening").
    fn name(&self) -> &str;

    /// The fields this questionnaire collects, grouped by section.
    fn sections(&self) -> &[Section];

    /// Decode a raw request body, score it, and return input and result as JSON.
    ///
    /// Does not validate ranges; callers run [`Instrument::validate`] first.
    fn assess(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError>;

    /// Validate a raw request body, then assess it.
    fn evaluate(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError> {
        let violations = self.validate(&body);
        if !violations.is_empty() {
            return Err(InstrumentError::Validation(violations));
        }
        self.assess(body)
    }

    /// Check a raw request body against this questionnaire's field ranges.
    ///
    /// Absent optional fields and non-numeric values are left to decoding.
    fn validate(&self, body: &serde_json::Value) -> Vec<ValidationError> {
        if !body.is_object() {
            return vec![ValidationError {
                field: String::new(),
                value: None,
                expected_range: None,
                message: format!("{}: request body must be a JSON object", self.name()),
            }];
        }

        let mut errors = Vec::new();
        for item in self.sections().iter().flat_map(|s| &s.items) {
            match scoring::lookup(body, &item.id) {
                None if item.required => errors.push(ValidationError {
                    field: item.id.clone(),
                    value: None,
                    expected_range: item.range,
                    message: format!("{}: {} is required", self.name(), item.name),
                }),
                Some(value) => {
                    if let (Some(range), Some(number)) = (item.range, value.as_f64())
                        && !range.contains(number)
                    {
                        errors.push(ValidationError {
                            field: item.id.clone(),
                            value: Some(number),
                            expected_range: Some(range),
                            message: format!(
                                "{}: {} value {} is outside range [{}, {}]",
                                self.name(),
                                item.name,
                                number,
                                range.min,
                                range.max,
                            ),
                        });
                    }
                }
                None => {}
            }
        }
        errors
    }
}

/// Shared body of [`Instrument::assess`]: decode with defaults, score, encode.
///
/// `null` members are treated like missing ones.
pub(crate) fn assess_with<I, O>(
    mut body: serde_json::Value,
    score: impl FnOnce(&I) -> O,
    risk: impl FnOnce(&O) -> RiskLevel,
) -> Result<Assessment, InstrumentError>
where
    I: DeserializeOwned + Serialize,
    O: Serialize,
{
    scoring::strip_nulls(&mut body);
    let input: I = serde_json::from_value(body).map_err(InstrumentError::Decode)?;
    let result = score(&input);
    Ok(Assessment {
        risk_level: risk(&result),
        input: serde_json::to_value(&input).map_err(InstrumentError::Encode)?,
        result: serde_json::to_value(&result).map_err(InstrumentError::Encode)?,
    })
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::sleep::SleepHealth),
        Box::new(instruments::bmi::BmiNutrition),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with [`InstrumentError::UnknownInstrument`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
