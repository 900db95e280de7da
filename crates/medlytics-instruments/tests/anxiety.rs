use medlytics_instruments::crisis::ANXIETY_CRISIS_MESSAGES;
use medlytics_instruments::instruments::gad7::{AnxietyInput, AnxietySeverity, SocialImpact, SymptomLevel};
use medlytics_instruments::outcome::{Impact, RiskLevel};
use medlytics_instruments::score_anxiety;

fn gad7(value: u32) -> AnxietyInput {
    AnxietyInput {
        nervous_feeling: value,
        uncontrollable_worrying: value,
        excessive_worrying: value,
        trouble_relaxing: value,
        restlessness: value,
        easily_annoyed: value,
        feeling_afraid: value,
        ..Default::default()
    }
}

#[test]
fn quiet_questionnaire_scores_zero() {
    let result = score_anxiety(&gad7(0));

    assert_eq!(result.anxiety_score, 0);
    assert_eq!(result.gad7_score, 0);
    assert_eq!(result.severity_level, AnxietySeverity::Minimal);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(!result.needs_professional_help);
    assert!(!result.crisis_intervention);
    assert_eq!(result.symptoms, vec!["Minimal symptoms"]);
    assert_eq!(result.risk_factors.len(), 1);
    assert_eq!(result.risk_factors[0].name, "No significant risk factors identified");
}

#[test]
fn protective_factors_never_push_below_zero() {
    let input = AnxietyInput {
        exercise_frequency: 5,
        social_support: 9,
        ..gad7(0)
    };
    let result = score_anxiety(&input);

    assert_eq!(result.anxiety_score, 0);
    assert_eq!(result.severity_level, AnxietySeverity::Minimal);
    assert_eq!(
        result.coping_strategies,
        vec![
            "Regular exercise (protective factor)",
            "Strong social support (protective factor)",
        ]
    );
}

#[test]
fn each_discount_floors_independently() {
    // 1.5 points: the first discount floors at zero, the second has nothing left.
    let input = AnxietyInput {
        heart_palpitations: true,
        exercise_frequency: 3,
        social_support: 7,
        ..gad7(0)
    };
    assert_eq!(score_anxiety(&input).anxiety_score, 0);

    let input = AnxietyInput {
        exercise_frequency: 3,
        social_support: 7,
        ..gad7(2)
    };
    assert_eq!(score_anxiety(&input).anxiety_score, 10);
}

#[test]
fn maximum_core_with_suicidal_anxiousness_is_severe() {
    let input = AnxietyInput {
        suicidal: true,
        anxiousness: true,
        ..gad7(3)
    };
    let result = score_anxiety(&input);

    assert_eq!(result.gad7_score, 21);
    assert!(result.anxiety_score >= 31);
    assert_eq!(result.severity_level, AnxietySeverity::Severe);
    assert!(result.needs_professional_help);
    assert!(result.crisis_intervention);
    assert_eq!(&result.recommendations[..3], &ANXIETY_CRISIS_MESSAGES[..]);
    assert_eq!(result.crisis_resources.len(), 3);
}

#[test]
fn suicidal_alone_adds_eight_and_a_critical_factor() {
    let result = score_anxiety(&AnxietyInput {
        suicidal: true,
        ..gad7(0)
    });

    assert_eq!(result.anxiety_score, 8);
    assert_eq!(result.severity_level, AnxietySeverity::Mild);
    assert!(result.needs_professional_help);
    assert!(result
        .risk_factors
        .iter()
        .any(|f| f.name.contains("CRITICAL") && f.impact == Impact::Critical));
    assert_eq!(&result.recommendations[..3], &ANXIETY_CRISIS_MESSAGES[..]);
}

#[test]
fn anxiousness_alone_adds_three() {
    let result = score_anxiety(&AnxietyInput {
        anxiousness: true,
        ..gad7(0)
    });

    assert_eq!(result.anxiety_score, 3);
    assert_eq!(result.risk_factors[0].name, "Self-reported high anxiousness");
    assert!(!result.crisis_intervention);
}

#[test]
fn screening_scores_are_capped() {
    let result = score_anxiety(&AnxietyInput {
        phq_score: 27,
        epworth_score: 24,
        ..gad7(0)
    });
    // min(13.5, 5) + min(8, 3)
    assert_eq!(result.anxiety_score, 8);

    let result = score_anxiety(&AnxietyInput {
        phq_score: 3,
        epworth_score: 3,
        ..gad7(0)
    });
    // 1.5 + 1 rounds up from 2.5
    assert_eq!(result.anxiety_score, 3);
}

#[test]
fn physical_social_and_panic_terms() {
    let input = AnxietyInput {
        heart_palpitations: true,
        sweating: true,
        trembling: true,
        nausea: true,
        social_avoidance: true,
        public_speaking_fear: true,
        panic_attacks_frequency: 2,
        ..gad7(0)
    };
    let result = score_anxiety(&input);

    // 4 × 1.5 + 2 × 1.5 + 2 × 2
    assert_eq!(result.anxiety_score, 13);
    assert_eq!(result.severity_level, AnxietySeverity::Moderate);
    assert!(result.needs_professional_help);
    assert_eq!(
        result.symptoms,
        vec!["Physical anxiety symptoms", "Social Anxiety", "Panic Disorder"]
    );
    let factors: Vec<_> = result.risk_factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        factors,
        vec![
            "Multiple physical anxiety symptoms",
            "Significant social anxiety",
            "Recurring panic attacks",
        ]
    );
    assert_eq!(result.detailed_assessment.physical_symptoms, SymptomLevel::Severe);
    assert_eq!(result.detailed_assessment.social_impact, SocialImpact::High);
    assert_eq!(
        result.recommendations[0],
        "⚠️ Consult a mental health professional (therapist, psychologist, or psychiatrist)"
    );
}

#[test]
fn behavioural_flags_add_two_each() {
    let input = AnxietyInput {
        concentration_difficulty: true,
        sleep_disturbance: true,
        fatigue_level: 7,
        appetite_change: true,
        ..gad7(0)
    };
    let result = score_anxiety(&input);

    assert_eq!(result.anxiety_score, 8);
    assert!(result.detailed_assessment.functional_impairment);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == "Establish a consistent sleep routine - poor sleep worsens anxiety"));
}

#[test]
fn severity_uses_final_adjusted_score() {
    let cases = [
        (5, AnxietySeverity::Minimal),
        (6, AnxietySeverity::Mild),
        (10, AnxietySeverity::Mild),
        (11, AnxietySeverity::Moderate),
        (15, AnxietySeverity::Moderate),
        (16, AnxietySeverity::ModeratelySevere),
        (21, AnxietySeverity::ModeratelySevere),
    ];
    for (core, severity) in cases {
        let mut input = gad7(0);
        let mut remaining = core;
        for item in [
            &mut input.nervous_feeling,
            &mut input.uncontrollable_worrying,
            &mut input.excessive_worrying,
            &mut input.trouble_relaxing,
            &mut input.restlessness,
            &mut input.easily_annoyed,
            &mut input.feeling_afraid,
        ] {
            *item = remaining.min(3);
            remaining -= *item;
        }
        let result = score_anxiety(&input);
        assert_eq!(result.anxiety_score, core);
        assert_eq!(result.severity_level, severity, "score {core}");
        assert_eq!(
            result.needs_professional_help,
            severity >= AnxietySeverity::ModeratelySevere,
            "score {core}"
        );
    }
}

#[test]
fn composite_at_twenty_one_triggers_crisis_messages() {
    let result = score_anxiety(&gad7(3));

    assert_eq!(result.anxiety_score, 21);
    assert_eq!(result.severity_level, AnxietySeverity::ModeratelySevere);
    assert!(!result.crisis_intervention);
    assert_eq!(&result.recommendations[..3], &ANXIETY_CRISIS_MESSAGES[..]);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == "Keep an anxiety journal to identify triggers and patterns"));
}

#[test]
fn journaling_follows_core_not_composite() {
    // Composite well above 10 but GAD-7 core below it.
    let input = AnxietyInput {
        panic_attacks_frequency: 3,
        suicidal: true,
        ..gad7(1)
    };
    let result = score_anxiety(&input);
    assert_eq!(result.gad7_score, 7);
    assert!(!result
        .recommendations
        .iter()
        .any(|r| r == "Keep an anxiety journal to identify triggers and patterns"));
}

#[test]
fn low_support_and_no_exercise_recommendations() {
    let result = score_anxiety(&AnxietyInput {
        social_support: 2,
        ..gad7(0)
    });
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == "Reach out to trusted friends or family - social connection reduces anxiety"));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == "Regular exercise (30 min, 3-5 times/week) significantly reduces anxiety"));
    assert_eq!(
        result.recommendations.last().map(String::as_str),
        Some("Practice self-compassion - be kind to yourself during anxious periods")
    );
}

#[test]
fn recommendations_have_no_duplicates() {
    let input = AnxietyInput {
        suicidal: true,
        anxiousness: true,
        heart_palpitations: true,
        chest_pain: true,
        social_avoidance: true,
        small_talk_difficulty: true,
        sleep_disturbance: true,
        social_support: 1,
        ..gad7(3)
    };
    let recs = score_anxiety(&input).recommendations;
    let mut seen = std::collections::HashSet::new();
    for rec in &recs {
        assert!(seen.insert(rec), "duplicate recommendation: {rec}");
    }
}

#[test]
fn absent_social_support_is_neutral() {
    let input: AnxietyInput = serde_json::from_value(serde_json::json!({
        "nervousFeeling": 2,
        "phq_score": 4
    }))
    .unwrap();

    assert_eq!(input.social_support, 5);
    assert_eq!(input.nervous_feeling, 2);
    assert_eq!(input.phq_score, 4);
    assert!(!input.suicidal);
}

#[test]
fn scoring_is_deterministic() {
    let input = AnxietyInput {
        suicidal: true,
        sweating: true,
        ..gad7(2)
    };
    assert_eq!(score_anxiety(&input), score_anxiety(&input));
}
