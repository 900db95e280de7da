use medlytics_core::models::demographics::BloodPressure;
use medlytics_instruments::instruments::sleep::{SleepInput, score_sleep};
use medlytics_instruments::outcome::RiskLevel;

fn healthy() -> SleepInput {
    SleepInput {
        age: Some(35),
        sleep_duration: Some(7.5),
        quality_of_sleep: Some(8),
        physical_activity: Some(45),
        stress_level: Some(3),
        bmi: Some(23.0),
        blood_pressure: Some(BloodPressure { systolic: 120, diastolic: 80 }),
        heart_rate: Some(68),
        daily_steps: Some(8000),
        ..Default::default()
    }
}

#[test]
fn healthy_sleeper_is_low_risk() {
    let result = score_sleep(&healthy());

    assert_eq!(result.risk_points, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.possible_disorders.is_empty());
    assert_eq!(
        result.recommendations,
        vec![
            "Maintain consistent sleep and wake times, even on weekends",
            "Limit screen time at least 1 hour before bed",
        ]
    );
}

#[test]
fn empty_input_skips_every_rule() {
    let result = score_sleep(&SleepInput::default());
    assert_eq!(result.risk_points, 0);
    assert!(result.possible_disorders.is_empty());
}

#[test]
fn short_sleep_flags_insomnia() {
    let result = score_sleep(&SleepInput {
        sleep_duration: Some(5.0),
        ..healthy()
    });
    assert_eq!(result.risk_points, 2);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.possible_disorders, vec!["Insomnia"]);
}

#[test]
fn long_sleep_flags_hypersomnia() {
    let result = score_sleep(&SleepInput {
        sleep_duration: Some(10.0),
        ..healthy()
    });
    assert_eq!(result.risk_points, 1);
    assert_eq!(result.possible_disorders, vec!["Hypersomnia"]);
}

#[test]
fn duration_bounds_are_exclusive() {
    for hours in [6.0, 9.0] {
        let result = score_sleep(&SleepInput {
            sleep_duration: Some(hours),
            ..healthy()
        });
        assert_eq!(result.risk_points, 0, "{hours} hours");
    }
}

#[test]
fn obesity_flags_sleep_apnea() {
    let result = score_sleep(&SleepInput {
        bmi: Some(32.5),
        ..healthy()
    });
    assert_eq!(result.risk_points, 2);
    assert_eq!(result.possible_disorders, vec!["Sleep Apnea"]);
}

#[test]
fn cardiovascular_rules() {
    let result = score_sleep(&SleepInput {
        blood_pressure: Some(BloodPressure { systolic: 130, diastolic: 95 }),
        heart_rate: Some(105),
        ..healthy()
    });
    assert_eq!(result.risk_points, 2);

    let result = score_sleep(&SleepInput {
        blood_pressure: Some(BloodPressure { systolic: 140, diastolic: 90 }),
        heart_rate: Some(50),
        ..healthy()
    });
    assert_eq!(result.risk_points, 0);
}

#[test]
fn active_sleepers_get_a_timing_tip_without_points() {
    let result = score_sleep(&SleepInput {
        physical_activity: Some(90),
        ..healthy()
    });
    assert_eq!(result.risk_points, 0);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r == "Ensure exercise is not too close to bedtime as it may interfere with sleep"));
}

#[test]
fn stressed_middle_aged_sedentary_profile_is_high_risk() {
    let input = SleepInput {
        age: Some(62),
        sleep_duration: Some(5.5),
        quality_of_sleep: Some(4),
        physical_activity: Some(20),
        stress_level: Some(8),
        daily_steps: Some(3000),
        ..healthy()
    };
    let result = score_sleep(&input);

    // age 1 + duration 2 + quality 2 + activity 1 + stress 2 + steps 1
    assert_eq!(result.risk_points, 9);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        result.possible_disorders,
        vec![
            "Insomnia",
            "Stress-Induced Insomnia",
            "Restless Leg Syndrome",
            "Circadian Rhythm Disorder",
        ]
    );
}

#[test]
fn risk_level_bands() {
    let moderate = score_sleep(&SleepInput {
        sleep_duration: Some(5.0),
        quality_of_sleep: Some(3),
        ..healthy()
    });
    assert_eq!(moderate.risk_points, 4);
    assert_eq!(moderate.risk_level, RiskLevel::Moderate);

    let high = score_sleep(&SleepInput {
        sleep_duration: Some(5.0),
        quality_of_sleep: Some(3),
        bmi: Some(31.0),
        ..healthy()
    });
    assert_eq!(high.risk_points, 6);
    assert_eq!(high.risk_level, RiskLevel::High);
}

#[test]
fn consistent_schedule_is_recommended_once() {
    let input = SleepInput {
        sleep_duration: Some(6.5),
        quality_of_sleep: Some(5),
        stress_level: Some(6),
        ..healthy()
    };
    let result = score_sleep(&input);

    assert_eq!(result.possible_disorders, vec!["Circadian Rhythm Disorder"]);
    let count = result
        .recommendations
        .iter()
        .filter(|r| *r == "Maintain consistent sleep and wake times, even on weekends")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn decodes_camel_case_body() {
    let input: SleepInput = serde_json::from_value(serde_json::json!({
        "sleepDuration": 6.5,
        "qualityOfSleep": 7,
        "bloodPressure": { "systolic": 150, "diastolic": 85 },
        "dailySteps": 4000
    }))
    .unwrap();

    assert_eq!(input.sleep_duration, Some(6.5));
    assert_eq!(input.blood_pressure, Some(BloodPressure { systolic: 150, diastolic: 85 }));
    assert_eq!(score_sleep(&input).risk_points, 2);
}
