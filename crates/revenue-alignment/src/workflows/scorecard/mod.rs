//! Revenue alignment scorecard: rule table, scoring engine, copy renderer, and
//! report builder, plus the service and router that expose them over HTTP.

pub mod copy;
pub mod domain;
pub mod engine;
pub mod report;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use copy::{render, RenderedCopy};
pub use domain::{normalize_text, AnswerSet, Pillar, PillarScores, ScoredResult, Tier};
pub use engine::{score, ScoringEngine};
pub use report::{build_report, Report, TierSection, SCHEMA_VERSION};
pub use router::{scorecard_router, ScorecardState};
pub use rules::{
    Band, PillarRules, Rule, RuleConfig, RuleConfigError, QUESTIONNAIRE, UNKNOWN_BAND,
};
pub use service::{
    RequestError, ScorecardError, ScorecardRequest, ScorecardResponse, ScorecardService,
};
