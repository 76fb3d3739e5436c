use super::domain::{normalize_text, AnswerSet, Pillar, PillarScores, ScoredResult};
use super::rules::{Rule, RuleConfig};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Stateless evaluator that applies a shared rule table to answer sets.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: Arc<RuleConfig>,
}

impl ScoringEngine {
    pub fn new(config: Arc<RuleConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn score(&self, answers: &AnswerSet) -> ScoredResult {
        score(answers, &self.config)
    }
}

/// Score `answers` against `config`. Never fails: missing or malformed answers
/// simply leave their rules unfired.
pub fn score(answers: &AnswerSet, config: &RuleConfig) -> ScoredResult {
    let normalized = answers.normalized_index();
    let mut pillar_scores = PillarScores::default();
    let mut flags = Vec::new();

    for pillar in Pillar::ordered() {
        let mut running = i32::from(config.base_score);
        for rule in config.rules_for(pillar) {
            if !rule_fires(rule, answers, &normalized) {
                continue;
            }
            running = running.saturating_add(rule.delta);
            if let Some(flag) = &rule.flag {
                flags.push(flag.clone());
            }
        }

        let clamped = running.clamp(i32::from(config.pillar_min), i32::from(config.pillar_max));
        pillar_scores.set(pillar, clamped as u8);
    }

    let total = pillar_scores.total();
    let band = config.band_for(total).to_string();
    let primary_constraint = Pillar::ordered()
        .into_iter()
        .min_by_key(|pillar| pillar_scores.get(*pillar))
        .unwrap_or(Pillar::Positioning);

    ScoredResult {
        total,
        max_total: config.max_total(),
        band,
        pillar_scores,
        pillar_max: config.pillar_max,
        primary_constraint,
        flags,
    }
}

fn rule_fires(rule: &Rule, answers: &AnswerSet, normalized: &BTreeMap<String, &str>) -> bool {
    let answer = answers
        .get(rule.question.trim())
        .or_else(|| normalized.get(&normalize_text(&rule.question)).copied());

    match answer {
        Some(answer) => normalize_text(answer) == normalize_text(&rule.equals),
        None => false,
    }
}
