use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How a questionnaire field is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// Frequency item, 0 = not at all … 3 = nearly every day.
    Ordinal,
    /// Self-rated slider, e.g. stress 1–10.
    Slider,
    /// Count per day or week (meals, drinks, exercise days).
    Count,
    /// Physical measurement (cm, kg, hours, bpm, mmHg).
    Measurement,
    /// Yes/no indicator.
    Flag,
}

/// Defines the valid range for a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn integer(min: u32, max: u32) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            step: Some(1.0),
        }
    }

    pub const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A single questionnaire field. `id` is the JSON field name; nested fields
/// use a dotted path (`bloodPressure.systolic`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub range: Option<ScoreRange>,
    pub required: bool,
    pub description: Option<String>,
}

impl Item {
    pub fn ordinal(id: &str, name: &str) -> Self {
        Self::ranged(id, name, ItemKind::Ordinal, ScoreRange::integer(0, 3))
    }

    pub fn slider(id: &str, name: &str, range: ScoreRange) -> Self {
        Self::ranged(id, name, ItemKind::Slider, range)
    }

    pub fn count(id: &str, name: &str, range: ScoreRange) -> Self {
        Self::ranged(id, name, ItemKind::Count, range)
    }

    pub fn measurement(id: &str, name: &str, range: ScoreRange) -> Self {
        Self::ranged(id, name, ItemKind::Measurement, range)
    }

    pub fn flag(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Flag,
            range: None,
            required: false,
            description: None,
        }
    }

    fn ranged(id: &str, name: &str, kind: ItemKind, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            range: Some(range),
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A group of related items within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub description: Option<String>,
}

impl Section {
    pub fn new(id: &str, name: &str, items: Vec<Item>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            items,
            description: None,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: Option<f64>,
    pub expected_range: Option<ScoreRange>,
    pub message: String,
}

/// Resolve a dotted path against a JSON object.
pub(crate) fn lookup<'a>(body: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    path.split('.')
        .try_fold(body, |value, segment| value.get(segment))
        .filter(|value| !value.is_null())
}

/// Drop `null` members from every object, so they decode as absent.
pub(crate) fn strip_nulls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(members) => {
            members.retain(|_, member| !member.is_null());
            members.values_mut().for_each(strip_nulls);
        }
        serde_json::Value::Array(elements) => elements.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
