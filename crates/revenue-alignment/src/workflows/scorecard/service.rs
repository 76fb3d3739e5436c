use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use super::copy::render;
use super::domain::{AnswerSet, Pillar, PillarScores, Tier};
use super::engine::ScoringEngine;
use super::report::{build_report, Report};
use super::rules::RuleConfig;

/// Validated scorecard submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardRequest {
    pub answers: AnswerSet,
    pub tier: Tier,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("answers is required")]
    MissingAnswers,
    #[error("answers must be an object mapping questions to answers")]
    AnswersNotObject,
    #[error("answers must not be empty")]
    EmptyAnswers,
    #[error("answer for '{question}' must be a string")]
    InvalidAnswer { question: String },
    #[error("{field} must be a string")]
    InvalidField { field: &'static str },
}

impl ScorecardRequest {
    /// Shape-check a raw JSON payload. Answers may be strings, numbers,
    /// booleans or null; nested arrays and objects are rejected.
    pub fn from_payload(payload: &Value) -> Result<Self, RequestError> {
        let body = payload.as_object().ok_or(RequestError::NotAnObject)?;

        let answers = match body.get("answers") {
            None | Some(Value::Null) => return Err(RequestError::MissingAnswers),
            Some(Value::Object(map)) => map,
            Some(_) => return Err(RequestError::AnswersNotObject),
        };
        if answers.is_empty() {
            return Err(RequestError::EmptyAnswers);
        }
        if let Some((question, _)) = answers
            .iter()
            .find(|(_, value)| matches!(value, Value::Array(_) | Value::Object(_)))
        {
            return Err(RequestError::InvalidAnswer {
                question: question.clone(),
            });
        }

        let tier = optional_string(body, "tier")?;
        let client_name = optional_string(body, "client_name")?.unwrap_or_default();
        let client_email = optional_string(body, "client_email")?.unwrap_or_default();

        Ok(Self {
            answers: AnswerSet::from_json_map(answers),
            tier: Tier::normalize(tier.as_deref()),
            client_name,
            client_email,
        })
    }
}

fn optional_string(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, RequestError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(RequestError::InvalidField { field }),
    }
}

/// Response contract consumed by downstream automation: the nested report plus
/// legacy flat fields.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardResponse {
    pub report: Report,
    pub report_json: String,
    pub tier: Tier,
    pub overall_score: u8,
    pub band: String,
    pub primary_constraint: Pillar,
    pub pillar_scores: PillarScores,
    pub flags: Vec<String>,
    pub email_subject: String,
    pub email_body_text: String,
    pub client_email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Composes scoring, copy rendering, and report assembly for one request.
#[derive(Debug, Clone)]
pub struct ScorecardService {
    engine: ScoringEngine,
}

impl ScorecardService {
    pub fn new(config: Arc<RuleConfig>) -> Self {
        Self {
            engine: ScoringEngine::new(config),
        }
    }

    pub fn evaluate(
        &self,
        request: ScorecardRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<ScorecardResponse, ScorecardError> {
        let ScorecardRequest {
            answers,
            tier,
            client_name,
            client_email,
        } = request;

        let scored = self.engine.score(&answers);
        let copy = render(tier, &scored, &client_name);
        let report = build_report(
            tier,
            &client_name,
            &client_email,
            &answers,
            &scored,
            self.engine.config(),
            &copy,
            generated_at,
        );
        let report_json = serde_json::to_string(&report)?;

        info!(
            tier = tier.as_str(),
            total = scored.total,
            band = %scored.band,
            constraint = scored.primary_constraint.key(),
            flags = scored.flags.len(),
            "scorecard evaluated"
        );

        Ok(ScorecardResponse {
            report,
            report_json,
            tier,
            overall_score: scored.total,
            band: scored.band,
            primary_constraint: scored.primary_constraint,
            pillar_scores: scored.pillar_scores,
            flags: scored.flags,
            email_subject: copy.subject,
            email_body_text: copy.body_text,
            client_email,
        })
    }
}
