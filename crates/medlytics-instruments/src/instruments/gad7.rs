//! GAD-7 based anxiety composite.
//!
//! The seven GAD-7 items form the core; physical, social, panic and
//! behavioural indicators add weighted points, self-reported suicidality
//! escalates, and two protective factors discount the total. This is an
//! additive composite, not a single validated scale.

use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::models::demographics::{Gender, WhoBmi};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::crisis::{self, CrisisResource};
use crate::error::InstrumentError;
use crate::outcome::{Factor, Impact, Recommendations, RiskLevel, SeverityBand, SeverityTable};
use crate::scoring::{Item, ScoreRange, Section};
use crate::{Assessment, Instrument, assess_with};

const NEUTRAL_SOCIAL_SUPPORT: u32 = 5;

/// Anxiety questionnaire as submitted. Field names follow the intake form:
/// screening scores are snake_case, symptom items camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AnxietyInput {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// 1–5.
    pub school_year: Option<u32>,
    pub bmi: Option<f64>,
    pub who_bmi: Option<WhoBmi>,

    /// PHQ-9 total, 0–27.
    pub phq_score: u32,
    /// Epworth sleepiness, 0–24.
    pub epworth_score: u32,
    pub anxiousness: bool,
    pub suicidal: bool,

    #[serde(rename = "nervousFeeling")]
    pub nervous_feeling: u32,
    #[serde(rename = "uncontrollableWorrying")]
    pub uncontrollable_worrying: u32,
    #[serde(rename = "excessiveWorrying")]
    pub excessive_worrying: u32,
    #[serde(rename = "troubleRelaxing")]
    pub trouble_relaxing: u32,
    pub restlessness: u32,
    #[serde(rename = "easilyAnnoyed")]
    pub easily_annoyed: u32,
    #[serde(rename = "feelingAfraid")]
    pub feeling_afraid: u32,

    #[serde(rename = "heartPalpitations")]
    pub heart_palpitations: bool,
    pub sweating: bool,
    pub trembling: bool,
    #[serde(rename = "shortnessOfBreath")]
    pub shortness_of_breath: bool,
    #[serde(rename = "chestPain")]
    pub chest_pain: bool,
    pub nausea: bool,
    pub dizziness: bool,

    #[serde(rename = "socialAvoidance")]
    pub social_avoidance: bool,
    #[serde(rename = "publicSpeakingFear")]
    pub public_speaking_fear: bool,
    #[serde(rename = "smallTalkDifficulty")]
    pub small_talk_difficulty: bool,

    /// 0 = never … 3 = often.
    #[serde(rename = "panicAttacksFrequency")]
    pub panic_attacks_frequency: u32,

    #[serde(rename = "concentrationDifficulty")]
    pub concentration_difficulty: bool,
    #[serde(rename = "sleepDisturbance")]
    pub sleep_disturbance: bool,
    /// 0–10.
    #[serde(rename = "fatigueLevel")]
    pub fatigue_level: u32,
    #[serde(rename = "appetiteChange")]
    pub appetite_change: bool,

    /// Days per week.
    #[serde(rename = "exerciseFrequency")]
    pub exercise_frequency: u32,
    /// 0–10, neutral 5 when not answered.
    #[serde(rename = "socialSupport")]
    pub social_support: u32,
    #[serde(rename = "professionalHelp")]
    pub professional_help: bool,
}

impl Default for AnxietyInput {
    fn default() -> Self {
        Self {
            age: None,
            gender: None,
            school_year: None,
            bmi: None,
            who_bmi: None,
            phq_score: 0,
            epworth_score: 0,
            anxiousness: false,
            suicidal: false,
            nervous_feeling: 0,
            uncontrollable_worrying: 0,
            excessive_worrying: 0,
            trouble_relaxing: 0,
            restlessness: 0,
            easily_annoyed: 0,
            feeling_afraid: 0,
            heart_palpitations: false,
            sweating: false,
            trembling: false,
            shortness_of_breath: false,
            chest_pain: false,
            nausea: false,
            dizziness: false,
            social_avoidance: false,
            public_speaking_fear: false,
            small_talk_difficulty: false,
            panic_attacks_frequency: 0,
            concentration_difficulty: false,
            sleep_disturbance: false,
            fatigue_level: 0,
            appetite_change: false,
            exercise_frequency: 0,
            social_support: NEUTRAL_SOCIAL_SUPPORT,
            professional_help: false,
        }
    }
}

impl AnxietyInput {
    pub fn gad7_score(&self) -> u32 {
        [
            self.nervous_feeling,
            self.uncontrollable_worrying,
            self.excessive_worrying,
            self.trouble_relaxing,
            self.restlessness,
            self.easily_annoyed,
            self.feeling_afraid,
        ]
        .iter()
        .fold(0u32, |total, item| total.saturating_add(*item))
    }

    pub fn physical_symptom_count(&self) -> u32 {
        count_true(&[
            self.heart_palpitations,
            self.sweating,
            self.trembling,
            self.shortness_of_breath,
            self.chest_pain,
            self.nausea,
            self.dizziness,
        ])
    }

    pub fn social_anxiety_count(&self) -> u32 {
        count_true(&[
            self.social_avoidance,
            self.public_speaking_fear,
            self.small_talk_difficulty,
        ])
    }

    fn severe_fatigue(&self) -> bool {
        self.fatigue_level >= 7
    }
}

fn count_true(flags: &[bool]) -> u32 {
    flags.iter().filter(|flag| **flag).count() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AnxietySeverity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl AnxietySeverity {
    /// The top two bands always warrant professional help.
    pub fn requires_professional_help(&self) -> bool {
        *self >= AnxietySeverity::ModeratelySevere
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomLevel {
    Mild,
    Moderate,
    Significant,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SocialImpact {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailedAssessment {
    pub psychological_symptoms: SymptomLevel,
    pub physical_symptoms: SymptomLevel,
    pub social_impact: SocialImpact,
    pub functional_impairment: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnxietyAssessment {
    /// Composite rounded to the nearest whole point.
    pub anxiety_score: u32,
    pub gad7_score: u32,
    pub severity_level: AnxietySeverity,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<Factor>,
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub coping_strategies: Vec<String>,
    pub needs_professional_help: bool,
    pub crisis_intervention: bool,
    pub crisis_resources: Vec<CrisisResource>,
    pub detailed_assessment: DetailedAssessment,
}

pub const SEVERITY: SeverityTable<AnxietySeverity> = SeverityTable::new(&[
    SeverityBand { upper: 5.0, label: AnxietySeverity::Minimal, risk: RiskLevel::Low },
    SeverityBand { upper: 10.0, label: AnxietySeverity::Mild, risk: RiskLevel::Low },
    SeverityBand { upper: 15.0, label: AnxietySeverity::Moderate, risk: RiskLevel::Moderate },
    SeverityBand { upper: 21.0, label: AnxietySeverity::ModeratelySevere, risk: RiskLevel::High },
    SeverityBand { upper: f64::INFINITY, label: AnxietySeverity::Severe, risk: RiskLevel::High },
]);

const PROTECTIVE_DISCOUNT: f64 = 2.0;

/// Score an anxiety questionnaire.
///
/// Thresholds are evaluated on the unrounded composite; only the reported
/// `anxiety_score` is rounded.
pub fn score_anxiety(input: &AnxietyInput) -> AnxietyAssessment {
    let gad7_score = input.gad7_score();
    let physical_count = input.physical_symptom_count();
    let social_count = input.social_anxiety_count();

    let mut score = f64::from(gad7_score);
    let mut risk_factors = Vec::new();
    let mut symptoms = Vec::new();
    let mut coping_strategies = Vec::new();
    let mut needs_professional_help = false;

    score += (f64::from(input.phq_score) / 2.0).min(5.0);
    score += (f64::from(input.epworth_score) / 3.0).min(3.0);

    score += f64::from(physical_count) * 1.5;
    if physical_count >= 1 {
        symptoms.push("Physical anxiety symptoms".to_string());
    }
    if physical_count >= 4 {
        risk_factors.push(Factor::new("Multiple physical anxiety symptoms", Impact::Moderate));
    }

    score += f64::from(social_count) * 1.5;
    if social_count >= 2 {
        symptoms.push("Social Anxiety".to_string());
        risk_factors.push(Factor::new("Significant social anxiety", Impact::Moderate));
    }

    score += f64::from(input.panic_attacks_frequency) * 2.0;
    if input.panic_attacks_frequency >= 2 {
        symptoms.push("Panic Disorder".to_string());
        risk_factors.push(Factor::new("Recurring panic attacks", Impact::High));
        needs_professional_help = true;
    }

    for (present, symptom) in [
        (input.concentration_difficulty, "Concentration difficulties"),
        (input.sleep_disturbance, "Sleep disturbance"),
        (input.severe_fatigue(), "Severe fatigue"),
        (input.appetite_change, "Appetite changes"),
    ] {
        if present {
            score += 2.0;
            symptoms.push(symptom.to_string());
        }
    }

    match (input.anxiousness, input.suicidal) {
        (true, true) => {
            score += 10.0;
            needs_professional_help = true;
            risk_factors.push(Factor::new("⚠️ CRITICAL: Suicidal ideation detected", Impact::Critical));
        }
        (false, true) => {
            score += 8.0;
            needs_professional_help = true;
            risk_factors.push(Factor::new("⚠️ CRITICAL: Suicidal thoughts", Impact::Critical));
        }
        (true, false) => {
            score += 3.0;
            risk_factors.push(Factor::new("Self-reported high anxiousness", Impact::Moderate));
        }
        (false, false) => {}
    }

    // Each discount floors at zero on its own.
    if input.exercise_frequency >= 3 {
        score = (score - PROTECTIVE_DISCOUNT).max(0.0);
        coping_strategies.push("Regular exercise (protective factor)".to_string());
    }
    if input.social_support >= 7 {
        score = (score - PROTECTIVE_DISCOUNT).max(0.0);
        coping_strategies.push("Strong social support (protective factor)".to_string());
    }
    if input.professional_help {
        coping_strategies.push("Currently receiving professional help".to_string());
    }

    let band = SEVERITY.lookup(score);
    needs_professional_help |= band.label.requires_professional_help();

    let recommendations = recommend(input, score, gad7_score, physical_count, social_count, needs_professional_help);

    if risk_factors.is_empty() {
        risk_factors.push(Factor::new("No significant risk factors identified", Impact::Low));
    }
    if symptoms.is_empty() {
        symptoms.push("Minimal symptoms".to_string());
    }

    let assessment = AnxietyAssessment {
        anxiety_score: score.round() as u32,
        gad7_score,
        severity_level: band.label,
        risk_level: band.risk,
        risk_factors,
        symptoms,
        recommendations,
        coping_strategies,
        needs_professional_help,
        crisis_intervention: input.suicidal,
        crisis_resources: if input.suicidal {
            crisis::crisis_resources()
        } else {
            Vec::new()
        },
        detailed_assessment: DetailedAssessment {
            psychological_symptoms: match gad7_score {
                0..=4 => SymptomLevel::Mild,
                5..=9 => SymptomLevel::Moderate,
                _ => SymptomLevel::Significant,
            },
            physical_symptoms: match physical_count {
                0..=1 => SymptomLevel::Mild,
                2..=3 => SymptomLevel::Moderate,
                _ => SymptomLevel::Severe,
            },
            social_impact: match social_count {
                0 => SocialImpact::Low,
                1 => SocialImpact::Moderate,
                _ => SocialImpact::High,
            },
            functional_impairment: input.concentration_difficulty
                || input.sleep_disturbance
                || input.severe_fatigue(),
        },
    };

    tracing::debug!(
        composite = score,
        gad7_score,
        severity = ?assessment.severity_level,
        crisis = assessment.crisis_intervention,
        "anxiety questionnaire scored"
    );

    assessment
}

fn recommend(
    input: &AnxietyInput,
    score: f64,
    gad7_score: u32,
    physical_count: u32,
    social_count: u32,
    needs_professional_help: bool,
) -> Vec<String> {
    let mut recs = Recommendations::new();

    if input.suicidal || score >= 21.0 {
        recs.prepend_crisis(&crisis::ANXIETY_CRISIS_MESSAGES);
    } else if needs_professional_help {
        recs.extend([
            "⚠️ Consult a mental health professional (therapist, psychologist, or psychiatrist)",
            "Consider Cognitive Behavioral Therapy (CBT) for anxiety management",
        ]);
    }

    if score >= 10.0 {
        recs.extend([
            "Practice deep breathing: 4-7-8 technique (inhale 4 seconds, hold 7, exhale 8)",
            "Try progressive muscle relaxation exercises daily",
        ]);
    }

    if physical_count >= 2 {
        recs.extend([
            "Physical symptoms may be anxiety-related - consult a doctor to rule out medical causes",
            "Practice grounding techniques during panic episodes (5-4-3-2-1 method)",
        ]);
    }

    if social_count >= 2 {
        recs.extend([
            "Gradual exposure to social situations can help (start small, increase slowly)",
            "Consider joining a social anxiety support group",
        ]);
    }

    if input.exercise_frequency < 3 {
        recs.push("Regular exercise (30 min, 3-5 times/week) significantly reduces anxiety");
    }
    if input.sleep_disturbance {
        recs.push("Establish a consistent sleep routine - poor sleep worsens anxiety");
    }

    recs.extend([
        "Try mindfulness meditation apps (Headspace, Calm, Insight Timer)",
        "Limit caffeine and alcohol - both can increase anxiety symptoms",
    ]);

    if gad7_score >= 10 {
        recs.push("Keep an anxiety journal to identify triggers and patterns");
    }

    if input.social_support < 5 {
        recs.extend([
            "Reach out to trusted friends or family - social connection reduces anxiety",
            "Consider online or in-person support groups for anxiety",
        ]);
    }

    recs.extend([
        "Set aside daily \"worry time\" (15 min) to contain anxious thoughts",
        "Practice self-compassion - be kind to yourself during anxious periods",
    ]);

    recs.into_vec()
}

/// GAD-7 anxiety composite with physical, social and behavioural modifiers.
pub struct Gad7;

impl Instrument for Gad7 {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Anxiety
    }

    fn name(&self) -> &str {
        "GAD-7 Anxiety Assessment"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "screening",
                    "Screening Scores",
                    vec![
                        Item::count("school_year", "School year", ScoreRange::integer(1, 5)),
                        Item::measurement("bmi", "Body mass index", ScoreRange::continuous(10.0, 80.0)),
                        Item::count("phq_score", "PHQ-9 score", ScoreRange::integer(0, 27)),
                        Item::count("epworth_score", "Epworth sleepiness score", ScoreRange::integer(0, 24)),
                        Item::flag("anxiousness", "Self-reported high anxiousness"),
                        Item::flag("suicidal", "Suicidal thoughts"),
                    ],
                ),
                Section::new(
                    "gad7",
                    "GAD-7 Items",
                    vec![
                        Item::ordinal("nervousFeeling", "Feeling nervous, anxious, or on edge"),
                        Item::ordinal("uncontrollableWorrying", "Not being able to stop or control worrying"),
                        Item::ordinal("excessiveWorrying", "Worrying too much about different things"),
                        Item::ordinal("troubleRelaxing", "Trouble relaxing"),
                        Item::ordinal("restlessness", "Being so restless that it is hard to sit still"),
                        Item::ordinal("easilyAnnoyed", "Becoming easily annoyed or irritable"),
                        Item::ordinal("feelingAfraid", "Feeling afraid as if something awful might happen"),
                    ],
                )
                .describe("Over the last two weeks: 0 = not at all, 3 = nearly every day"),
                Section::new(
                    "physical",
                    "Physical Symptoms",
                    vec![
                        Item::flag("heartPalpitations", "Heart palpitations"),
                        Item::flag("sweating", "Sweating"),
                        Item::flag("trembling", "Trembling"),
                        Item::flag("shortnessOfBreath", "Shortness of breath"),
                        Item::flag("chestPain", "Chest pain"),
                        Item::flag("nausea", "Nausea"),
                        Item::flag("dizziness", "Dizziness"),
                    ],
                ),
                Section::new(
                    "social",
                    "Social Anxiety",
                    vec![
                        Item::flag("socialAvoidance", "Avoiding social situations"),
                        Item::flag("publicSpeakingFear", "Fear of public speaking"),
                        Item::flag("smallTalkDifficulty", "Difficulty with small talk"),
                    ],
                ),
                Section::new(
                    "behaviour",
                    "Behaviour and Coping",
                    vec![
                        Item::ordinal("panicAttacksFrequency", "Panic attacks")
                            .describe("0 = never, 1 = rarely, 2 = sometimes, 3 = often"),
                        Item::flag("concentrationDifficulty", "Difficulty concentrating"),
                        Item::flag("sleepDisturbance", "Sleep disturbance"),
                        Item::slider("fatigueLevel", "Fatigue level", ScoreRange::integer(0, 10)),
                        Item::flag("appetiteChange", "Appetite change"),
                        Item::count("exerciseFrequency", "Exercise (days/week)", ScoreRange::integer(0, 7)),
                        Item::slider("socialSupport", "Social support", ScoreRange::integer(0, 10)),
                        Item::flag("professionalHelp", "Currently receiving professional help"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn assess(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError> {
        assess_with(body, score_anxiety, |result: &AnxietyAssessment| result.risk_level)
    }
}
