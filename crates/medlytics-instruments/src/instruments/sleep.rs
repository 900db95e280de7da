//! Rule-based sleep health screening.
//!
//! Each rule adds risk points and may name a possible disorder. Rules whose
//! measure was not reported are skipped.

use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::models::demographics::{BloodPressure, Gender};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::outcome::{Recommendations, RiskLevel, SeverityBand, SeverityTable};
use crate::scoring::{Item, ScoreRange, Section};
use crate::{Assessment, Instrument, assess_with};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SleepInput {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// Hours per night.
    pub sleep_duration: Option<f64>,
    /// 1–10.
    pub quality_of_sleep: Option<u32>,
    /// Minutes per day.
    pub physical_activity: Option<u32>,
    /// 1–10.
    pub stress_level: Option<u32>,
    pub bmi: Option<f64>,
    pub blood_pressure: Option<BloodPressure>,
    /// Resting beats per minute.
    pub heart_rate: Option<u32>,
    pub daily_steps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SleepAssessment {
    pub risk_points: u32,
    pub risk_level: RiskLevel,
    pub possible_disorders: Vec<String>,
    pub recommendations: Vec<String>,
}

pub const RISK: SeverityTable<RiskLevel> = SeverityTable::new(&[
    SeverityBand { upper: 2.0, label: RiskLevel::Low, risk: RiskLevel::Low },
    SeverityBand { upper: 5.0, label: RiskLevel::Moderate, risk: RiskLevel::Moderate },
    SeverityBand { upper: f64::INFINITY, label: RiskLevel::High, risk: RiskLevel::High },
]);

const CONSISTENT_SCHEDULE: &str = "Maintain consistent sleep and wake times, even on weekends";

#[derive(Default)]
struct Findings {
    points: u32,
    disorders: Vec<String>,
    recs: Recommendations,
}

impl Findings {
    fn flag(&mut self, points: u32, disorder: Option<&str>, recs: &[&str]) {
        self.points += points;
        if let Some(disorder) = disorder
            && !self.disorders.iter().any(|d| d == disorder)
        {
            self.disorders.push(disorder.to_string());
        }
        self.recs.extend(recs.iter().copied());
    }
}

pub fn score_sleep(input: &SleepInput) -> SleepAssessment {
    let mut findings = Findings::default();
    let age = input.age;
    let duration = input.sleep_duration;
    let quality = input.quality_of_sleep;
    let activity = input.physical_activity;
    let stress = input.stress_level;

    if age.is_some_and(|a| a > 60) {
        findings.flag(1, None, &["Consider age-appropriate sleep hygiene practices"]);
    }

    match duration {
        Some(hours) if hours < 6.0 => {
            findings.flag(2, Some("Insomnia"), &["Aim for 7-9 hours of sleep per night"]);
        }
        Some(hours) if hours > 9.0 => findings.flag(
            1,
            Some("Hypersomnia"),
            &["Excessive sleep may indicate an underlying condition, consider consulting a sleep specialist"],
        ),
        _ => {}
    }

    if quality.is_some_and(|q| q < 5) {
        findings.flag(
            2,
            None,
            &["Improve sleep environment: reduce noise, light, and maintain comfortable temperature"],
        );
    }

    match activity {
        Some(minutes) if minutes < 30 => findings.flag(
            1,
            None,
            &["Increase daily physical activity, aim for at least 30 minutes of moderate exercise"],
        ),
        Some(minutes) if minutes > 85 => findings.flag(
            0,
            None,
            &["Ensure exercise is not too close to bedtime as it may interfere with sleep"],
        ),
        _ => {}
    }

    if stress.is_some_and(|s| s > 7) {
        findings.flag(
            2,
            Some("Stress-Induced Insomnia"),
            &["Practice stress management techniques like meditation or deep breathing exercises"],
        );
    }

    if input.bmi.is_some_and(|bmi| bmi > 30.0) {
        findings.flag(2, Some("Sleep Apnea"), &["Weight management may help reduce sleep apnea symptoms"]);
    }

    if input.blood_pressure.is_some_and(|bp| bp.is_hypertensive()) {
        findings.flag(
            1,
            None,
            &["Monitor blood pressure regularly and consider consulting a healthcare provider"],
        );
    }

    if input.heart_rate.is_some_and(|bpm| !(50..=100).contains(&bpm)) {
        findings.flag(
            1,
            None,
            &["Abnormal resting heart rate may affect sleep quality, consider cardiovascular evaluation"],
        );
    }

    if input.daily_steps.is_some_and(|steps| steps < 5000) {
        findings.flag(1, None, &["Increase daily activity level by taking more steps throughout the day"]);
    }

    // Proxy checks for conditions the form cannot ask about directly.
    if age.is_some_and(|a| a > 40) && stress.is_some_and(|s| s > 6) && activity.is_some_and(|m| m < 40) {
        findings.flag(
            0,
            Some("Restless Leg Syndrome"),
            &["Consider stretching exercises before bed to alleviate restless leg symptoms"],
        );
    }

    if quality.is_some_and(|q| q < 6) && duration.is_some_and(|h| h < 7.0) && stress.is_some_and(|s| s > 5) {
        findings.flag(
            0,
            Some("Circadian Rhythm Disorder"),
            &[CONSISTENT_SCHEDULE, "Get exposure to natural daylight during the day"],
        );
    }

    let risk_level = RISK.lookup(f64::from(findings.points)).label;

    findings.recs.extend([CONSISTENT_SCHEDULE, "Limit screen time at least 1 hour before bed"]);

    tracing::debug!(points = findings.points, risk = %risk_level, "sleep questionnaire scored");

    SleepAssessment {
        risk_points: findings.points,
        risk_level,
        possible_disorders: findings.disorders,
        recommendations: findings.recs.into_vec(),
    }
}

/// Rule-based sleep disorder risk screening.
pub struct SleepHealth;

impl Instrument for SleepHealth {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Sleep
    }

    fn name(&self) -> &str {
        "Sleep Health Screening"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "sleep",
                    "Sleep",
                    vec![
                        Item::measurement("sleepDuration", "Sleep duration (hours)", ScoreRange::continuous(0.0, 24.0)),
                        Item::slider("qualityOfSleep", "Quality of sleep", ScoreRange::integer(1, 10)),
                        Item::slider("stressLevel", "Stress level", ScoreRange::integer(1, 10)),
                    ],
                ),
                Section::new(
                    "health",
                    "Health and Activity",
                    vec![
                        Item::count("age", "Age", ScoreRange::integer(0, 120)),
                        Item::count("physicalActivity", "Physical activity (minutes/day)", ScoreRange::integer(0, 1440)),
                        Item::measurement("bmi", "Body mass index", ScoreRange::continuous(10.0, 80.0)),
                        Item::measurement("bloodPressure.systolic", "Systolic blood pressure", ScoreRange::integer(60, 260)),
                        Item::measurement("bloodPressure.diastolic", "Diastolic blood pressure", ScoreRange::integer(30, 160)),
                        Item::measurement("heartRate", "Resting heart rate", ScoreRange::integer(20, 250)),
                        Item::count("dailySteps", "Daily steps", ScoreRange::integer(0, 100_000)),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn assess(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError> {
        assess_with(body, score_sleep, |result: &SleepAssessment| result.risk_level)
    }
}
