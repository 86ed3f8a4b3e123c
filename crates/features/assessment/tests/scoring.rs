use chub_assessment::{AssessmentError, FactFScore, WeeklyActivity};
use proptest::prelude::*;

#[test]
fn fact_f_reverses_negative_items() {
    // No fatigue at all: negative items answered 0, positive items answered 4.
    let mut best = [0_u8; 13];
    best[6] = 4;
    best[7] = 4;
    let score = FactFScore::from_responses(&best).unwrap();
    assert_eq!(score.total(), 52);
    assert!(!score.is_fatigued());

    let worst = {
        let mut r = [4_u8; 13];
        r[6] = 0;
        r[7] = 0;
        r
    };
    assert_eq!(FactFScore::from_responses(&worst).unwrap().total(), 0);

    // All "somewhat": 11 reversed items give 2 each, 2 direct items give 2 each.
    assert_eq!(FactFScore::from_responses(&[2; 13]).unwrap().total(), 26);
}

#[test]
fn fact_f_cutoff() {
    assert!(FactFScore::from_total(29).unwrap().is_fatigued());
    assert!(!FactFScore::from_total(30).unwrap().is_fatigued());
    assert!(FactFScore::from_total(53).is_err());
}

#[test]
fn out_of_range_response_names_the_instrument() {
    let mut responses = [1_u8; 13];
    responses[3] = 5;

    let err = FactFScore::from_responses(&responses).unwrap_err();
    assert!(matches!(err, AssessmentError::OutOfRange { value: 5, max: 4, .. }));
    assert_eq!(err.to_string(), "FACT-F response must be between 0 and 4, got 5");
}

#[test]
fn who_target_counts_vigorous_double() {
    let activity = |moderate, vigorous| WeeklyActivity {
        moderate_minutes: moderate,
        vigorous_minutes: vigorous,
        sedentary_minutes_per_day: 0,
    };

    assert!(activity(150, 0).is_who_compliant());
    assert!(activity(0, 75).is_who_compliant());
    assert!(activity(90, 30).is_who_compliant());
    assert!(!activity(100, 24).is_who_compliant());
    assert_eq!(activity(u32::MAX, u32::MAX).equivalent_minutes(), u32::MAX);
}

proptest! {
    #[test]
    fn fact_f_total_stays_in_range(responses in prop::array::uniform13(0_u8..=4)) {
        let total = FactFScore::from_responses(&responses).unwrap().total();
        prop_assert!(total <= FactFScore::MAX);
    }
}
