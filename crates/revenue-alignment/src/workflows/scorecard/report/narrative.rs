use super::super::copy::NO_FLAGS_LINE;
use super::super::domain::{Pillar, ScoredResult};
use super::views::Narrative;

const KEY_FINDING_LIMIT: usize = 4;

pub(crate) fn generate_narrative(scored: &ScoredResult) -> Narrative {
    let constraint = scored.primary_constraint;
    let constraint_score = scored.pillar_scores.get(constraint);

    let headline = format!(
        "{}: {} is holding revenue back",
        scored.band,
        constraint.label()
    );

    let summary = format!(
        "You scored {}/{} overall. {} is your lowest pillar at {}/{}, so it is the first lever to pull before investing further in the other four.",
        scored.total,
        scored.max_total,
        constraint.label(),
        constraint_score,
        scored.pillar_max
    );

    let mut key_findings: Vec<String> = scored
        .flags
        .iter()
        .take(KEY_FINDING_LIMIT)
        .cloned()
        .collect();
    if key_findings.is_empty() {
        key_findings.push(NO_FLAGS_LINE.to_string());
    }

    let mut what_to_do_next = vec![format!(
        "Make {} the single improvement priority for the next 30 days.",
        constraint.label()
    )];
    what_to_do_next.push(pillar_first_move(constraint).to_string());
    what_to_do_next.push(
        "Assign one owner and one metric to the constraint and review progress weekly.".to_string(),
    );
    what_to_do_next.push(
        "Re-take the scorecard in 90 days to confirm the constraint has moved.".to_string(),
    );

    Narrative {
        headline,
        summary,
        key_findings,
        what_to_do_next,
    }
}

pub(crate) fn explain_constraint(pillar: Pillar, score: u8, max: u8) -> String {
    let why = match pillar {
        Pillar::Positioning => {
            "buyers struggle to see why you are different, so every downstream motion works harder than it should"
        }
        Pillar::ValueArchitecture => {
            "the value you create is not translated into outcomes buyers can measure and defend internally"
        }
        Pillar::PricingPackaging => {
            "pricing and packaging are leaking margin and adding friction to the buying decision"
        }
        Pillar::GtmFocus => {
            "go-to-market effort is spread across too many segments or channels to compound"
        }
        Pillar::Measurement => {
            "revenue data is not trustworthy enough to steer investment or forecast with confidence"
        }
    };

    format!(
        "{} scored {}/{}, the lowest of the five pillars: {}.",
        pillar.label(),
        score,
        max,
        why
    )
}

pub(crate) fn risk_note(pillar: Pillar, score: u8, max: u8) -> Option<String> {
    if score > 2 {
        return None;
    }

    Some(format!(
        "{} at {}/{} is a material risk to revenue efficiency and should be addressed before scaling spend.",
        pillar.label(),
        score,
        max
    ))
}

fn pillar_first_move(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Positioning => {
            "Rewrite your one-line positioning around the outcome only you deliver and test it on five recent losses."
        }
        Pillar::ValueArchitecture => {
            "Document the ROI story for your three best customers and turn it into a reusable value calculator."
        }
        Pillar::PricingPackaging => {
            "Audit the last 20 closed deals for discount depth and tighten approval rules above 15%."
        }
        Pillar::GtmFocus => {
            "Pick the one segment and channel with the best win rate and pause net-new effort elsewhere."
        }
        Pillar::Measurement => {
            "Agree on a single revenue dashboard and reconcile forecast versus actuals every week."
        }
    }
}
