use super::super::domain::{AnswerSet, Pillar, Tier};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub tier: Tier,
    pub client: ClientInfo,
    pub answers_raw: AnswerSet,
    pub answers_normalized: BTreeMap<&'static str, Option<String>>,
    pub scoring: ScoringDetail,
    pub narrative: Narrative,
    pub deliverables: Deliverables,
    #[serde(flatten)]
    pub tier_section: TierSection,
}

/// Client identity. Fields the intake does not collect stay explicit nulls.
#[derive(Debug, Clone, Serialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PillarBand {
    Strong,
    Mixed,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl PillarBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 4 {
            Self::Strong
        } else if score >= 3 {
            Self::Mixed
        } else {
            Self::AtRisk
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarDetail {
    pub key: Pillar,
    pub label: &'static str,
    pub score: u8,
    pub max: u8,
    pub band: PillarBand,
    pub risk_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrimaryConstraintDetail {
    pub key: Pillar,
    pub label: &'static str,
    pub score: u8,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Medium,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagEntry {
    pub key: String,
    pub message: String,
    pub severity: FlagSeverity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringDetail {
    pub overall_score: u8,
    pub max_score: u8,
    pub band: String,
    pub pillars: Vec<PillarDetail>,
    pub primary_constraint: PrimaryConstraintDetail,
    pub flags: Vec<FlagEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Narrative {
    pub headline: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub what_to_do_next: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailDeliverable {
    pub subject: String,
    pub body_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfDeliverable {
    pub status: DeliveryStatus,
    pub template: &'static str,
    pub estimated_pages: u8,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Deliverables {
    pub email: EmailDeliverable,
    pub pdf: PdfDeliverable,
}

/// Tier-specific extension. Serialized as a single `exec_tier` or `full_tier` key.
#[derive(Debug, Clone, Serialize)]
pub enum TierSection {
    #[serde(rename = "exec_tier")]
    Exec(ExecTierSection),
    #[serde(rename = "full_tier")]
    Full(FullTierSection),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecTierSection {
    pub next_30_days: Vec<&'static str>,
    pub upgrade_offer: UpgradeOffer,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeOffer {
    pub product: &'static str,
    pub price_usd: u32,
    pub description: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FullTierSection {
    pub swot: SwotAnalysis,
    pub competitive_landscape: CompetitiveLandscape,
    pub pricing_audit: PricingAudit,
    pub roadmap: Roadmap,
    pub appendix: Vec<AppendixEntry>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetitiveLandscape {
    pub competitors: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PricingAudit {
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Roadmap {
    pub days_30: Vec<String>,
    pub days_60: Vec<String>,
    pub days_90: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendixEntry {
    pub question: String,
    pub answer: String,
    pub notes: Option<String>,
}
