use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::risk::RiskLevel;

/// Which questionnaire produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisKind {
    Depression,
    Anxiety,
    Sleep,
    Bmi,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Depression,
        AnalysisKind::Anxiety,
        AnalysisKind::Sleep,
        AnalysisKind::Bmi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Depression => "depression",
            AnalysisKind::Anxiety => "anxiety",
            AnalysisKind::Sleep => "sleep",
            AnalysisKind::Bmi => "bmi",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

/// A scored questionnaire as persisted: the normalized input, the computed
/// result, and who submitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub kind: AnalysisKind,
    /// `None` for anonymous submissions.
    pub owner_id: Option<String>,
    pub risk_level: RiskLevel,
    pub input: serde_json::Value,
    pub result: serde_json::Value,
    pub created_at: jiff::Timestamp,
}

impl AnalysisRecord {
    pub fn new(
        kind: AnalysisKind,
        owner_id: Option<String>,
        risk_level: RiskLevel,
        input: serde_json::Value,
        result: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            owner_id,
            risk_level,
            input,
            result,
            created_at: jiff::Timestamp::now(),
        }
    }
}
