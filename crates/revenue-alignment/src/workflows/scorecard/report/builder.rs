use super::super::copy::RenderedCopy;
use super::super::domain::{AnswerSet, Pillar, ScoredResult, Tier};
use super::super::rules::{RuleConfig, QUESTIONNAIRE};
use super::narrative::{explain_constraint, generate_narrative, risk_note};
use super::views::{
    AppendixEntry, ClientInfo, Deliverables, DeliveryStatus, EmailDeliverable, ExecTierSection,
    FlagEntry, FlagSeverity, FullTierSection, PdfDeliverable, PillarBand, PillarDetail,
    PrimaryConstraintDetail, Report, ScoringDetail, TierSection, UpgradeOffer, SCHEMA_VERSION,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const EXEC_NEXT_30_DAYS: [&str; 3] = [
    "Name the primary constraint in your next leadership meeting and assign a single owner.",
    "Run five win/loss interviews to test whether buyers describe your value the way you do.",
    "Set one leading metric for the constraint and review it weekly for the next month.",
];

/// Assemble the versioned report document. Inputs are only read.
#[allow(clippy::too_many_arguments)]
pub fn build_report(
    tier: Tier,
    client_name: &str,
    client_email: &str,
    answers: &AnswerSet,
    scored: &ScoredResult,
    config: &RuleConfig,
    rendered_copy: &RenderedCopy,
    generated_at: DateTime<Utc>,
) -> Report {
    Report {
        schema_version: SCHEMA_VERSION,
        generated_at,
        tier,
        client: ClientInfo {
            name: non_empty(client_name),
            email: non_empty(client_email),
            company: None,
            website: None,
        },
        answers_raw: answers.clone(),
        answers_normalized: normalized_answers(answers),
        scoring: scoring_detail(scored, config),
        narrative: generate_narrative(scored),
        deliverables: Deliverables {
            email: EmailDeliverable {
                subject: rendered_copy.subject.clone(),
                body_text: rendered_copy.body_text.clone(),
            },
            pdf: PdfDeliverable {
                status: DeliveryStatus::Pending,
                template: match tier {
                    Tier::Exec => "revenue-alignment-exec-summary",
                    Tier::Audit => "revenue-alignment-full-audit",
                },
                estimated_pages: match tier {
                    Tier::Exec => 3,
                    Tier::Audit => 10,
                },
                url: None,
            },
        },
        tier_section: match tier {
            Tier::Exec => TierSection::Exec(exec_tier_section()),
            Tier::Audit => TierSection::Full(full_tier_section(answers)),
        },
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn normalized_answers(answers: &AnswerSet) -> BTreeMap<&'static str, Option<String>> {
    QUESTIONNAIRE
        .iter()
        .map(|(field, question)| {
            let value = answers
                .get(question)
                .map(|answer| answer.trim().to_string());
            (*field, value)
        })
        .collect()
}

fn scoring_detail(scored: &ScoredResult, config: &RuleConfig) -> ScoringDetail {
    let pillars = Pillar::ordered()
        .into_iter()
        .map(|pillar| {
            let score = scored.pillar_scores.get(pillar);
            PillarDetail {
                key: pillar,
                label: pillar.label(),
                score,
                max: config.pillar_max,
                band: PillarBand::from_score(score),
                risk_note: risk_note(pillar, score, config.pillar_max),
            }
        })
        .collect();

    let constraint = scored.primary_constraint;
    let constraint_score = scored.pillar_scores.get(constraint);

    let flags = scored
        .flags
        .iter()
        .enumerate()
        .map(|(index, message)| FlagEntry {
            key: format!("flag_{}", index + 1),
            message: message.clone(),
            severity: FlagSeverity::Medium,
        })
        .collect();

    ScoringDetail {
        overall_score: scored.total,
        max_score: config.max_total(),
        band: scored.band.clone(),
        pillars,
        primary_constraint: PrimaryConstraintDetail {
            key: constraint,
            label: constraint.label(),
            score: constraint_score,
            explanation: explain_constraint(constraint, constraint_score, config.pillar_max),
        },
        flags,
    }
}

fn exec_tier_section() -> ExecTierSection {
    ExecTierSection {
        next_30_days: EXEC_NEXT_30_DAYS.to_vec(),
        upgrade_offer: UpgradeOffer {
            product: "Full Revenue Alignment Audit",
            price_usd: 1500,
            description: "Pillar-by-pillar audit with SWOT, competitive review, pricing audit, and a 90-day roadmap.",
            call_to_action: "Reply to this email to upgrade to the full audit.",
        },
    }
}

fn full_tier_section(answers: &AnswerSet) -> FullTierSection {
    let appendix = answers
        .iter()
        .map(|(question, answer)| AppendixEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            notes: None,
        })
        .collect();

    FullTierSection {
        appendix,
        ..FullTierSection::default()
    }
}
