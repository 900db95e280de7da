//! PHQ-9 style depression screening.
//!
//! Nine frequency items (0–3) sum to a 0–27 severity score. Suicidal ideation
//! on item nine overrides urgency and recommendation order regardless of the
//! total.

use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::models::demographics::{EmploymentStatus, Gender, MaritalStatus};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::crisis::{self, CrisisResource};
use crate::error::InstrumentError;
use crate::outcome::{Factor, Impact, Recommendations, RiskLevel, SeverityBand, SeverityTable};
use crate::scoring::{Item, ScoreRange, Section};
use crate::{Assessment, Instrument, assess_with};

/// Depression questionnaire as submitted. Absent items decode as 0 / false /
/// empty; absent lifestyle measures stay `None` and never trigger a factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct DepressionInput {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub employment_status: Option<EmploymentStatus>,

    /// 1–10.
    pub stress_level: Option<u32>,
    /// 1–10.
    pub sleep_quality: Option<u32>,
    /// 1–10.
    pub social_support: Option<u32>,
    /// Minutes per day, 0–100.
    pub physical_activity: Option<u32>,
    /// 1–10.
    pub diet_quality: Option<u32>,
    pub genetic_history: bool,
    pub medical_conditions: Vec<String>,

    pub little_interest: u32,
    pub feeling_down: u32,
    pub trouble_sleeping: u32,
    pub feeling_tired: u32,
    pub poor_appetite: u32,
    pub feeling_bad: u32,
    pub trouble_concentrating: u32,
    pub moving_slow: u32,
    pub suicidal_thoughts: u32,

    /// 0–3: how difficult the problems have made daily life.
    pub functional_impairment: u32,
    pub current_treatment: bool,
    pub previous_depression: bool,
    pub substance_use: bool,
    pub trauma_history: bool,
    pub chronic_pain: bool,
    pub recent_life_events: Vec<String>,
}

impl DepressionInput {
    fn phq9_items(&self) -> [u32; 9] {
        [
            self.little_interest,
            self.feeling_down,
            self.trouble_sleeping,
            self.feeling_tired,
            self.poor_appetite,
            self.feeling_bad,
            self.trouble_concentrating,
            self.moving_slow,
            self.suicidal_thoughts,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DepressionSeverity {
    #[serde(rename = "None-Minimal")]
    NoneMinimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl DepressionSeverity {
    /// Urgency implied by severity alone, before the crisis override.
    pub fn help_urgency(&self) -> ProfessionalHelpUrgency {
        match self {
            DepressionSeverity::NoneMinimal => ProfessionalHelpUrgency::None,
            DepressionSeverity::Mild => ProfessionalHelpUrgency::Consider,
            DepressionSeverity::Moderate => ProfessionalHelpUrgency::Recommended,
            DepressionSeverity::ModeratelySevere => ProfessionalHelpUrgency::StronglyRecommended,
            DepressionSeverity::Severe => ProfessionalHelpUrgency::Urgent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ProfessionalHelpUrgency {
    None,
    Consider,
    Recommended,
    #[serde(rename = "strongly recommended")]
    StronglyRecommended,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FunctionalImpact {
    Minimal,
    Moderate,
    Significant,
}

/// Independent boolean projections of the score; not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TreatmentPlan {
    pub psychotherapy: bool,
    pub medication: bool,
    pub combined_treatment: bool,
    pub hospitalization: bool,
    pub self_help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomBreakdown {
    pub emotional_symptoms: u32,
    pub cognitive_symptoms: u32,
    pub physical_symptoms: u32,
    pub suicidal_ideation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DepressionAssessment {
    pub phq9_score: u32,
    pub severity_level: DepressionSeverity,
    pub risk_level: RiskLevel,
    pub depression_type: Option<String>,
    pub depression_type_description: Option<String>,
    pub key_factors: Vec<Factor>,
    pub recommendations: Vec<String>,
    pub crisis_intervention: bool,
    pub professional_help_urgency: ProfessionalHelpUrgency,
    pub crisis_resources: Vec<CrisisResource>,
    pub treatment_plan: TreatmentPlan,
    pub functional_impact: FunctionalImpact,
    pub symptom_breakdown: SymptomBreakdown,
}

pub const SEVERITY: SeverityTable<DepressionSeverity> = SeverityTable::new(&[
    SeverityBand { upper: 4.0, label: DepressionSeverity::NoneMinimal, risk: RiskLevel::Low },
    SeverityBand { upper: 9.0, label: DepressionSeverity::Mild, risk: RiskLevel::Low },
    SeverityBand { upper: 14.0, label: DepressionSeverity::Moderate, risk: RiskLevel::Moderate },
    SeverityBand { upper: 19.0, label: DepressionSeverity::ModeratelySevere, risk: RiskLevel::High },
    SeverityBand { upper: f64::INFINITY, label: DepressionSeverity::Severe, risk: RiskLevel::High },
]);

/// Score a depression questionnaire.
///
/// Out-of-range values are used as given; range checks belong to the caller.
pub fn score_depression(input: &DepressionInput) -> DepressionAssessment {
    let phq9_score = input
        .phq9_items()
        .iter()
        .fold(0u32, |total, item| total.saturating_add(*item));

    let band = SEVERITY.lookup(f64::from(phq9_score));
    let crisis_intervention = input.suicidal_thoughts >= 1;
    let professional_help_urgency = if crisis_intervention {
        ProfessionalHelpUrgency::Emergency
    } else {
        band.label.help_urgency()
    };

    let mut key_factors = Vec::new();
    let mut recommendations = Recommendations::new();

    if crisis_intervention {
        key_factors.push(Factor::new("⚠️ SUICIDAL THOUGHTS DETECTED", Impact::Critical));
        recommendations.prepend_crisis(&crisis::DEPRESSION_CRISIS_MESSAGES);
    }

    collect_factors(input, &mut key_factors, &mut recommendations);
    severity_recommendations(input, phq9_score, &mut recommendations);

    let (depression_type, depression_type_description) = infer_subtype(input, phq9_score);

    let assessment = DepressionAssessment {
        phq9_score,
        severity_level: band.label,
        risk_level: band.risk,
        depression_type,
        depression_type_description,
        key_factors,
        recommendations: recommendations.into_vec(),
        crisis_intervention,
        professional_help_urgency,
        crisis_resources: if crisis_intervention {
            crisis::crisis_resources()
        } else {
            Vec::new()
        },
        treatment_plan: TreatmentPlan {
            psychotherapy: phq9_score >= 10,
            medication: phq9_score >= 15,
            combined_treatment: phq9_score >= 15,
            hospitalization: crisis_intervention || phq9_score >= 20,
            self_help: phq9_score < 10,
        },
        functional_impact: match input.functional_impairment {
            0 => FunctionalImpact::Minimal,
            1 => FunctionalImpact::Moderate,
            _ => FunctionalImpact::Significant,
        },
        symptom_breakdown: SymptomBreakdown {
            emotional_symptoms: input
                .little_interest
                .saturating_add(input.feeling_down)
                .saturating_add(input.feeling_bad),
            cognitive_symptoms: input.trouble_concentrating,
            physical_symptoms: input
                .trouble_sleeping
                .saturating_add(input.feeling_tired)
                .saturating_add(input.poor_appetite)
                .saturating_add(input.moving_slow),
            suicidal_ideation: input.suicidal_thoughts,
        },
    };

    tracing::debug!(
        phq9_score,
        severity = ?assessment.severity_level,
        crisis = crisis_intervention,
        factors = assessment.key_factors.len(),
        "depression questionnaire scored"
    );

    assessment
}

fn collect_factors(input: &DepressionInput, factors: &mut Vec<Factor>, recs: &mut Recommendations) {
    let mut factor = |condition: bool, name: &str, impact: Impact, rec: Option<&str>| {
        if condition {
            factors.push(Factor::new(name, impact));
            if let Some(rec) = rec {
                recs.push(rec);
            }
        }
    };

    // Core symptoms
    factor(input.little_interest >= 2, "Loss of Interest/Pleasure (Anhedonia)", Impact::High, None);
    factor(input.feeling_down >= 2, "Persistent Low Mood", Impact::High, None);
    factor(input.feeling_bad >= 2, "Low Self-Esteem/Guilt", Impact::High, None);
    factor(input.trouble_concentrating >= 2, "Cognitive Impairment", Impact::Moderate, None);
    factor(
        input.trouble_sleeping >= 2,
        "Sleep Disturbance",
        Impact::High,
        Some("Address sleep issues - poor sleep worsens depression significantly"),
    );
    factor(input.feeling_tired >= 2, "Fatigue/Low Energy", Impact::High, None);
    factor(input.poor_appetite >= 2, "Appetite Changes", Impact::Moderate, None);
    factor(input.moving_slow >= 2, "Psychomotor Changes", Impact::Moderate, None);

    // Lifestyle
    factor(
        input.stress_level.is_some_and(|s| s >= 7),
        "Chronic High Stress",
        Impact::High,
        Some("Stress management is critical - consider therapy or stress reduction techniques"),
    );
    factor(input.sleep_quality.is_some_and(|q| q <= 4), "Poor Sleep Quality", Impact::High, None);
    factor(
        input.social_support.is_some_and(|s| s <= 3),
        "Insufficient Social Support",
        Impact::High,
        Some("Social isolation worsens depression - reach out to friends, family, or support groups"),
    );
    factor(
        input.physical_activity.is_some_and(|m| m < 30),
        "Physical Inactivity",
        Impact::Moderate,
        Some("Regular exercise is proven to reduce depression - start with 20-30 min walks daily"),
    );

    // History and risk
    factor(input.genetic_history, "Family History of Depression", Impact::Moderate, None);
    factor(input.previous_depression, "Previous Depressive Episodes", Impact::High, None);
    factor(
        input.substance_use,
        "Substance Use",
        Impact::High,
        Some("Substance use can worsen depression - seek help for both conditions"),
    );
    factor(
        input.trauma_history,
        "Trauma History",
        Impact::High,
        Some("Trauma-informed therapy (EMDR, trauma-focused CBT) may be beneficial"),
    );
    factor(
        input.chronic_pain,
        "Chronic Pain",
        Impact::High,
        Some("Chronic pain and depression often co-occur - treat both simultaneously"),
    );

    let events = input.recent_life_events.len();
    factor(events > 0, &format!("Recent Life Stressors ({events})"), Impact::High, None);

    factor(
        input.functional_impairment >= 2,
        "Significant Functional Impairment",
        Impact::High,
        Some("Depression is affecting your daily functioning - professional help is important"),
    );
}

fn severity_recommendations(input: &DepressionInput, score: u32, recs: &mut Recommendations) {
    if score >= 15 {
        recs.extend([
            "⚠️ URGENT: Schedule an appointment with a psychiatrist or mental health professional immediately",
            "Consider antidepressant medication - consult with a psychiatrist",
            "Psychotherapy (CBT, IPT, or psychodynamic therapy) is highly recommended",
        ]);
        if !input.current_treatment {
            recs.push("You need professional treatment - do not try to manage this alone");
        }
    } else if score >= 10 {
        recs.extend([
            "Consult a mental health professional (therapist, psychologist, or psychiatrist)",
            "Cognitive Behavioral Therapy (CBT) is highly effective for moderate depression",
            "Consider whether medication might help - discuss with a doctor",
        ]);
    } else if score >= 5 {
        recs.extend([
            "Monitor your symptoms - if they persist or worsen, seek professional help",
            "Self-help strategies may be sufficient at this stage",
            "Consider preventive therapy or counseling",
        ]);
    }

    if score >= 5 {
        recs.extend([
            "Exercise regularly - 30 min of moderate activity 5x/week reduces depression",
            "Maintain a consistent sleep schedule - 7-9 hours per night",
            "Practice healthy eating habits - Mediterranean diet shows benefits",
        ]);

        if input.social_support.is_some_and(|s| s < 5) {
            recs.extend([
                "Increase social connections - join clubs, volunteer, or reconnect with friends",
                "Consider support groups for depression (online or in-person)",
            ]);
        }

        recs.extend([
            "Try mindfulness meditation or yoga - proven to help with depression",
            "Set small, achievable goals each day to build momentum",
            "Avoid alcohol and recreational drugs - they worsen depression",
            "Schedule pleasant activities - engage in hobbies you used to enjoy",
            "Get sunlight exposure - especially important in winter months",
        ]);
    }

    if input.current_treatment && score >= 10 {
        recs.push("Your current treatment may need adjustment - discuss with your provider");
    }
}

/// Best-effort subtype label, only attempted from a moderate score upward.
fn infer_subtype(input: &DepressionInput, score: u32) -> (Option<String>, Option<String>) {
    if score < 10 {
        return (None, None);
    }

    let mut label = String::new();
    let mut description = String::new();

    if input.little_interest >= 2 && input.feeling_down >= 2 {
        label.push_str("Major Depressive Episode");
        description.push_str(
            "You meet criteria suggesting a major depressive episode. Professional evaluation is recommended.",
        );
    } else if score <= 14 {
        label.push_str("Persistent Depressive Disorder (Dysthymia)");
        description.push_str("Chronic low-grade depression that may have lasted months or years.");
    }

    if input.trouble_sleeping >= 2 && (input.poor_appetite >= 2 || input.feeling_tired >= 2) {
        label.push_str(" with Melancholic Features");
        description.push_str(" Sleep and appetite disturbances are prominent.");
    }

    let non_empty = |s: String| {
        let trimmed = s.trim_start();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };
    (non_empty(label), non_empty(description))
}

/// PHQ-9 depression screening with lifestyle and history factors.
pub struct Phq9;

impl Instrument for Phq9 {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Depression
    }

    fn name(&self) -> &str {
        "PHQ-9 Depression Screening"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let ten_point = ScoreRange::integer(1, 10);
            vec![
                Section::new(
                    "phq9",
                    "PHQ-9 Items",
                    vec![
                        Item::ordinal("littleInterest", "Little interest or pleasure in doing things"),
                        Item::ordinal("feelingDown", "Feeling down, depressed, or hopeless"),
                        Item::ordinal("troubleSleeping", "Trouble falling or staying asleep, or sleeping too much"),
                        Item::ordinal("feelingTired", "Feeling tired or having little energy"),
                        Item::ordinal("poorAppetite", "Poor appetite or overeating"),
                        Item::ordinal("feelingBad", "Feeling bad about yourself"),
                        Item::ordinal("troubleConcentrating", "Trouble concentrating on things"),
                        Item::ordinal("movingSlow", "Moving or speaking slowly, or being fidgety"),
                        Item::ordinal("suicidalThoughts", "Thoughts that you would be better off dead or of hurting yourself")
                            .describe("Any answer above 0 triggers crisis guidance"),
                    ],
                )
                .describe("Over the last two weeks: 0 = not at all, 3 = nearly every day"),
                Section::new(
                    "lifestyle",
                    "Lifestyle",
                    vec![
                        Item::slider("stressLevel", "Stress level", ten_point),
                        Item::slider("sleepQuality", "Sleep quality", ten_point),
                        Item::slider("socialSupport", "Social support", ten_point),
                        Item::count("physicalActivity", "Physical activity (minutes/day)", ScoreRange::integer(0, 100)),
                        Item::slider("dietQuality", "Diet quality", ten_point),
                        Item::flag("geneticHistory", "Family history of depression"),
                    ],
                ),
                Section::new(
                    "history",
                    "History and Functioning",
                    vec![
                        Item::ordinal("functionalImpairment", "How difficult have these problems made daily life"),
                        Item::flag("currentTreatment", "Currently in treatment"),
                        Item::flag("previousDepression", "Previous depressive episodes"),
                        Item::flag("substanceUse", "Substance use"),
                        Item::flag("traumaHistory", "Trauma history"),
                        Item::flag("chronicPain", "Chronic pain"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn assess(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError> {
        assess_with(body, score_depression, |result: &DepressionAssessment| result.risk_level)
    }
}
