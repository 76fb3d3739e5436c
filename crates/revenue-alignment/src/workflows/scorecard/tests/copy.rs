use super::common::*;
use crate::workflows::scorecard::copy::{render, NO_FLAGS_LINE};
use crate::workflows::scorecard::domain::Tier;

#[test]
fn exec_copy_interpolates_score_band_and_constraint() {
    let scored = scored_with_flags(&["first flag", "second flag", "third flag"]);

    let copy = render(Tier::Exec, &scored, "Dana");

    assert_eq!(
        copy.subject,
        "Your Revenue Alignment Snapshot: Strategic Leakage (14/25)"
    );
    assert!(copy.body_text.starts_with("Hi Dana,"));
    assert!(copy.body_text.contains("Overall score: 14/25"));
    assert!(copy.body_text.contains("Primary constraint: Pricing & Packaging"));
    assert!(copy.body_text.contains("- first flag"));
    assert!(copy.body_text.contains("- second flag"));
    assert!(!copy.body_text.contains("third flag"));
}

#[test]
fn audit_copy_lists_every_flag() {
    let scored = scored_with_flags(&["first flag", "second flag", "third flag"]);

    let copy = render(Tier::Audit, &scored, "Dana");

    assert_eq!(
        copy.subject,
        "Your Revenue Alignment Audit: Strategic Leakage (14/25)"
    );
    for flag in &scored.flags {
        assert!(copy.body_text.contains(flag.as_str()), "missing {flag}");
    }
}

#[test]
fn blank_client_name_defaults_to_there() {
    let scored = scored_with_flags(&[]);

    let copy = render(Tier::Exec, &scored, "   ");

    assert!(copy.body_text.starts_with("Hi there,"));
}

#[test]
fn missing_flags_use_fixed_line() {
    let scored = scored_with_flags(&[]);

    for tier in [Tier::Exec, Tier::Audit] {
        let copy = render(tier, &scored, "Dana");
        assert!(copy.body_text.contains(NO_FLAGS_LINE), "{tier:?}");
    }
}

#[test]
fn copy_reports_configured_maximum() {
    let mut scored = scored_with_flags(&[]);
    scored.max_total = 50;

    let copy = render(Tier::Exec, &scored, "Dana");

    assert_eq!(
        copy.subject,
        "Your Revenue Alignment Snapshot: Strategic Leakage (14/50)"
    );
    assert!(copy.body_text.contains("Overall score: 14/50"));
}
