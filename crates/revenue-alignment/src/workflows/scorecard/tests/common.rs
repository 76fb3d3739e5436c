use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::scorecard::domain::{AnswerSet, Pillar, PillarScores, ScoredResult};
use crate::workflows::scorecard::router::{scorecard_router, ScorecardState};
use crate::workflows::scorecard::rules::RuleConfig;
use crate::workflows::scorecard::service::ScorecardService;

pub(super) const WIN_DEALS: &str = "Why do you most often win deals?";
pub(super) const ROI: &str = "Can you quantify ROI for most customers?";
pub(super) const GROSS_MARGIN: &str = "What is your gross margin (%)?";
pub(super) const FORECAST: &str = "Are revenue forecasts accurate within 10%?";
pub(super) const DISCOUNTING: &str = "How often do deals close with a discount above 15%?";
pub(super) const SEGMENTS: &str = "How many customer segments are you actively pursuing?";
pub(super) const CAC_PAYBACK: &str = "Do you know your CAC payback period?";

pub(super) const TEST_TOKEN: &str = "scorecard-test-token";

pub(super) fn rules() -> RuleConfig {
    RuleConfig::standard()
}

pub(super) fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Three strong answers; gtm_focus and measurement stay at base.
pub(super) fn strong_answers() -> AnswerSet {
    [
        (WIN_DEALS, "Clear differentiation"),
        (ROI, "Yes — documented & repeatable"),
        (GROSS_MARGIN, "75%+"),
    ]
    .into_iter()
    .collect()
}

/// Answers firing several flagged rules across pillars.
pub(super) fn struggling_answers() -> AnswerSet {
    [
        (WIN_DEALS, "Price"),
        (ROI, "No"),
        (DISCOUNTING, "Most deals"),
        (SEGMENTS, "4 or more"),
        (FORECAST, "No"),
        (CAC_PAYBACK, "No"),
    ]
    .into_iter()
    .collect()
}

pub(super) fn scored_with_flags(flags: &[&str]) -> ScoredResult {
    ScoredResult {
        total: 14,
        max_total: 25,
        band: "Strategic Leakage".to_string(),
        pillar_scores: PillarScores {
            positioning: 3,
            value_architecture: 3,
            pricing_packaging: 2,
            gtm_focus: 3,
            measurement: 3,
        },
        pillar_max: 5,
        primary_constraint: Pillar::PricingPackaging,
        flags: flags.iter().map(|flag| flag.to_string()).collect(),
    }
}

pub(super) fn service() -> Arc<ScorecardService> {
    Arc::new(ScorecardService::new(Arc::new(rules())))
}

pub(super) fn router_with_token(token: Option<&str>) -> axum::Router {
    scorecard_router(ScorecardState::new(
        service(),
        token.map(str::to_string),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
