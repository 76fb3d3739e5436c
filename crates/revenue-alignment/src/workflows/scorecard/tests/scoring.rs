use super::common::*;
use crate::workflows::scorecard::domain::{AnswerSet, Pillar};
use crate::workflows::scorecard::engine::score;
use crate::workflows::scorecard::rules::{PillarRules, Rule, UNKNOWN_BAND};

#[test]
fn empty_answers_leave_every_pillar_at_base() {
    let scored = score(&AnswerSet::new(), &rules());

    for pillar in Pillar::ordered() {
        assert_eq!(scored.pillar_scores.get(pillar), 3, "{}", pillar.key());
    }
    assert_eq!(scored.total, 15);
    assert_eq!(scored.band, "Strategic Leakage");
    assert_eq!(scored.primary_constraint, Pillar::Positioning);
    assert!(scored.flags.is_empty());
}

#[test]
fn strong_answers_clamp_and_pick_first_tied_constraint() {
    let scored = score(&strong_answers(), &rules());

    assert_eq!(scored.pillar_scores.positioning, 5);
    assert_eq!(scored.pillar_scores.value_architecture, 5);
    assert_eq!(scored.pillar_scores.pricing_packaging, 5);
    assert_eq!(scored.pillar_scores.gtm_focus, 3);
    assert_eq!(scored.pillar_scores.measurement, 3);
    assert_eq!(scored.total, 21);
    assert_eq!(scored.band, "Operational Friction");
    assert_eq!(scored.primary_constraint, Pillar::GtmFocus);
    assert!(scored.flags.is_empty());
}

#[test]
fn flags_follow_pillar_then_rule_order() {
    let scored = score(&struggling_answers(), &rules());

    assert_eq!(scored.pillar_scores.positioning, 2);
    assert_eq!(scored.pillar_scores.value_architecture, 1);
    assert_eq!(scored.pillar_scores.pricing_packaging, 1);
    assert_eq!(scored.pillar_scores.gtm_focus, 1);
    assert_eq!(scored.pillar_scores.measurement, 0);
    assert_eq!(scored.total, 5);
    assert_eq!(scored.band, "Structural Misalignment");
    assert_eq!(scored.primary_constraint, Pillar::Measurement);
    assert_eq!(
        scored.flags,
        vec![
            "Deals are won on price, a sign of weak differentiation.",
            "Customer ROI is not quantified, which weakens pricing power.",
            "Heavy discounting is eroding realized price.",
            "Pursuing four or more segments dilutes GTM focus.",
            "Forecasts miss by more than 10%, undermining planning.",
            "CAC payback period is unknown.",
        ]
    );
}

#[test]
fn forecast_rule_matches_question_with_trailing_mark() {
    let answers: AnswerSet = [(FORECAST, "Yes")].into_iter().collect();
    let scored = score(&answers, &rules());

    assert_eq!(scored.pillar_scores.measurement, 4);
}

#[test]
fn lookup_tolerates_case_whitespace_and_punctuation() {
    let variants = ["Yes", "yes", "Yes.", "  YES  ", "yes!"];
    for variant in variants {
        let answers: AnswerSet = [(FORECAST, variant)].into_iter().collect();
        let scored = score(&answers, &rules());
        assert_eq!(scored.pillar_scores.measurement, 4, "answer {variant:?}");
    }

    let answers: AnswerSet = [("  why do you most often win deals  ", "clear differentiation.")]
        .into_iter()
        .collect();
    let scored = score(&answers, &rules());
    assert_eq!(scored.pillar_scores.positioning, 5);
}

#[test]
fn unmatched_or_empty_answers_never_fire() {
    let answers: AnswerSet = [
        (WIN_DEALS, ""),
        (ROI, "Maybe"),
        ("Unrelated question", "No"),
    ]
    .into_iter()
    .collect();
    let scored = score(&answers, &rules());

    assert_eq!(scored.total, 15);
    assert!(scored.flags.is_empty());
}

#[test]
fn scores_stay_within_bounds_for_every_single_answer() {
    let config = rules();
    for pillar in Pillar::ordered() {
        for rule in config.rules_for(pillar) {
            let answers: AnswerSet = [(rule.question.clone(), rule.equals.clone())]
                .into_iter()
                .collect();
            let scored = score(&answers, &config);
            for pillar in Pillar::ordered() {
                let value = scored.pillar_scores.get(pillar);
                assert!(value <= config.pillar_max, "{} = {value}", pillar.key());
            }
            assert!(scored.total <= 25);
            assert_ne!(scored.band, UNKNOWN_BAND);
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let config = rules();
    let answers = struggling_answers();

    let first = score(&answers, &config);
    let second = score(&answers, &config);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn identical_flags_from_different_rules_are_kept() {
    let mut config = rules();
    config.pillars.push(PillarRules {
        pillar: Pillar::Positioning,
        rules: vec![Rule {
            question: "Do you have a positioning statement?".to_string(),
            equals: "No".to_string(),
            delta: -1,
            flag: Some("Deals are won on price, a sign of weak differentiation.".to_string()),
        }],
    });
    let answers: AnswerSet = [
        (WIN_DEALS, "Price"),
        ("Do you have a positioning statement?", "No"),
    ]
    .into_iter()
    .collect();

    let scored = score(&answers, &config);

    assert_eq!(scored.pillar_scores.positioning, 1);
    assert_eq!(scored.flags.len(), 2);
    assert_eq!(scored.flags[0], scored.flags[1]);
}

#[test]
fn band_miss_reports_unknown() {
    let mut config = rules();
    config.bands.retain(|band| band.min > 17);

    let scored = score(&AnswerSet::new(), &config);

    assert_eq!(scored.total, 15);
    assert_eq!(scored.band, UNKNOWN_BAND);
}

#[test]
fn deeply_negative_pillars_clamp_to_zero() {
    let answers: AnswerSet = [
        (FORECAST, "No"),
        (CAC_PAYBACK, "No"),
        ("Do you track net revenue retention (NRR)?", "No"),
        ("Do you have a single source of truth for revenue data?", "No"),
    ]
    .into_iter()
    .collect();

    let scored = score(&answers, &rules());

    assert_eq!(scored.pillar_scores.measurement, 0);
    assert_eq!(scored.primary_constraint, Pillar::Measurement);
    assert_eq!(scored.flags.len(), 3);
}

#[test]
fn extreme_deltas_saturate_before_clamping() {
    let mut config = rules();
    config.pillars.push(PillarRules {
        pillar: Pillar::Positioning,
        rules: vec![
            Rule {
                question: "Extreme upside?".to_string(),
                equals: "A".to_string(),
                delta: i32::MAX,
                flag: None,
            },
            Rule {
                question: "Extreme upside?".to_string(),
                equals: "A".to_string(),
                delta: i32::MAX,
                flag: None,
            },
        ],
    });
    config.pillars.push(PillarRules {
        pillar: Pillar::Measurement,
        rules: vec![
            Rule {
                question: "Extreme downside?".to_string(),
                equals: "B".to_string(),
                delta: i32::MIN,
                flag: None,
            },
            Rule {
                question: "Extreme downside?".to_string(),
                equals: "B".to_string(),
                delta: i32::MIN,
                flag: None,
            },
        ],
    });
    config.validate().expect("extreme deltas are a valid table");
    let answers: AnswerSet = [("Extreme upside?", "A"), ("Extreme downside?", "B")]
        .into_iter()
        .collect();

    let scored = score(&answers, &config);

    assert_eq!(scored.pillar_scores.positioning, config.pillar_max);
    assert_eq!(scored.pillar_scores.measurement, config.pillar_min);
    assert_eq!(scored.total, 5 + 3 + 3 + 3);
    assert_eq!(scored.max_total, 25);
    assert_eq!(scored.pillar_max, 5);
}
