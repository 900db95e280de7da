//! Result vocabulary shared by all instruments: impact-rated factors,
//! severity tables and the ordered recommendation list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use medlytics_core::models::risk::RiskLevel;

/// How strongly a factor contributes to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Impact {
    Low,
    Moderate,
    High,
    Critical,
}

/// A named, impact-rated explanation attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Factor {
    pub name: String,
    pub impact: Impact,
}

impl Factor {
    pub fn new(name: impl Into<String>, impact: Impact) -> Self {
        Self {
            name: name.into(),
            impact,
        }
    }
}

/// One row of a severity table: every score up to and including `upper`
/// that was not claimed by an earlier row maps to `label`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand<L> {
    pub upper: f64,
    pub label: L,
    pub risk: RiskLevel,
}

/// Severity rows sorted by ascending upper bound.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTable<L: 'static> {
    bands: &'static [SeverityBand<L>],
}

impl<L: Copy> SeverityTable<L> {
    pub const fn new(bands: &'static [SeverityBand<L>]) -> Self {
        assert!(!bands.is_empty(), "severity table needs at least one band");
        Self { bands }
    }

    /// First band whose bound covers `score`. Scores beyond every bound fall
    /// into the last band.
    pub fn lookup(&self, score: f64) -> SeverityBand<L> {
        let last = self.bands[self.bands.len() - 1];
        self.bands
            .iter()
            .find(|band| score <= band.upper)
            .copied()
            .unwrap_or(last)
    }
}

/// Ordered, duplicate-free recommendation list.
///
/// Crisis messages are kept in their own leading block: they always come
/// first, in the order given, and a later ordinary push of the same text is
/// dropped rather than displacing them.
#[derive(Debug, Clone, Default)]
pub struct Recommendations {
    crisis: Vec<String>,
    items: Vec<String>,
}

impl Recommendations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recommendation: impl Into<String>) {
        let recommendation = recommendation.into();
        if !self.contains(&recommendation) {
            self.items.push(recommendation);
        }
    }

    pub fn extend<I, S>(&mut self, recommendations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for recommendation in recommendations {
            self.push(recommendation);
        }
    }

    pub fn prepend_crisis(&mut self, messages: &[&str]) {
        for message in messages {
            self.items.retain(|item| item != message);
            if !self.crisis.iter().any(|c| c == message) {
                self.crisis.push(message.to_string());
            }
        }
    }

    fn contains(&self, recommendation: &str) -> bool {
        self.crisis.iter().chain(&self.items).any(|r| r == recommendation)
    }

    pub fn into_vec(self) -> Vec<String> {
        let mut all = self.crisis;
        all.extend(self.items);
        all
    }
}
