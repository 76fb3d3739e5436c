use super::domain::Pillar;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Label returned when no band covers a total.
pub const UNKNOWN_BAND: &str = "Unknown";

const PILLAR_COUNT: u16 = Pillar::ordered().len() as u16;

/// Field name / question text pairs projected into the report's normalized answers.
pub const QUESTIONNAIRE: [(&str, &str); 20] = [
    ("icp_definition", "How clearly defined is your ideal customer profile (ICP)?"),
    ("win_reason", "Why do you most often win deals?"),
    ("competitive_parity", "How often do prospects say you look like the competition?"),
    ("messaging_consistency", "Is your messaging consistent across sales, marketing, and the website?"),
    ("roi_quantified", "Can you quantify ROI for most customers?"),
    ("value_metric", "Do you have a clear value metric your pricing scales with?"),
    ("case_studies", "How many quantified customer case studies do you have?"),
    ("outcome_tracking", "Do you track customer outcomes after the sale?"),
    ("gross_margin", "What is your gross margin (%)?"),
    ("discounting", "How often do deals close with a discount above 15%?"),
    ("last_price_review", "When did you last review pricing?"),
    ("packaging_tiers", "How is your offer packaged?"),
    ("primary_channel", "What is your primary acquisition channel?"),
    ("segments_pursued", "How many customer segments are you actively pursuing?"),
    ("sales_cycle", "What is your average sales cycle length?"),
    ("pipeline_alignment", "Do sales and marketing share pipeline targets?"),
    ("forecast_accuracy", "Are revenue forecasts accurate within 10%?"),
    ("cac_payback", "Do you know your CAC payback period?"),
    ("net_revenue_retention", "Do you track net revenue retention (NRR)?"),
    ("revenue_source_of_truth", "Do you have a single source of truth for revenue data?"),
];

/// One condition on a single answer. Fires when the normalized answer equals `equals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub question: String,
    pub equals: String,
    pub delta: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Rule {
    fn new(question: &str, equals: &str, delta: i32) -> Self {
        Self {
            question: question.to_string(),
            equals: equals.to_string(),
            delta,
            flag: None,
        }
    }

    fn flagged(question: &str, equals: &str, delta: i32, flag: &str) -> Self {
        Self {
            flag: Some(flag.to_string()),
            ..Self::new(question, equals, delta)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRules {
    pub pillar: Pillar,
    pub rules: Vec<Rule>,
}

/// Inclusive total-score range mapped to a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub label: String,
    pub min: u8,
    pub max: u8,
}

impl Band {
    fn new(label: &str, min: u8, max: u8) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, total: u8) -> bool {
        self.min <= total && total <= self.max
    }
}

/// Immutable rule table shared by every scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub base_score: u8,
    pub pillar_min: u8,
    pub pillar_max: u8,
    pub pillars: Vec<PillarRules>,
    pub bands: Vec<Band>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("failed to read rule table {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rule table {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("rule table defines no bands")]
    NoBands,
    #[error("band '{label}' has min {min} above max {max}")]
    InvertedBand { label: String, min: u8, max: u8 },
    #[error("pillar range {min}..={max} is inverted")]
    InvertedPillarRange { min: u8, max: u8 },
    #[error("base score {base} falls outside pillar range {min}..={max}")]
    BaseOutOfRange { base: u8, min: u8, max: u8 },
    #[error("total {total} matches {matches} bands; expected exactly one")]
    BandCoverage { total: u8, matches: usize },
    #[error("pillar max {max} puts the total above {}", u8::MAX)]
    TotalOutOfRange { max: u8 },
}

impl RuleConfig {
    pub fn standard() -> Self {
        Self {
            base_score: 3,
            pillar_min: 0,
            pillar_max: 5,
            pillars: standard_pillar_rules(),
            bands: vec![
                Band::new("Structural Misalignment", 0, 11),
                Band::new("Strategic Leakage", 12, 17),
                Band::new("Operational Friction", 18, 23),
                Band::new("Aligned Growth Engine", 24, 30),
            ],
        }
    }

    /// Load and validate a JSON rule table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RuleConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| RuleConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RuleConfigError> {
        if self.pillar_min > self.pillar_max {
            return Err(RuleConfigError::InvertedPillarRange {
                min: self.pillar_min,
                max: self.pillar_max,
            });
        }
        if u16::from(self.pillar_max) * PILLAR_COUNT > u16::from(u8::MAX) {
            return Err(RuleConfigError::TotalOutOfRange {
                max: self.pillar_max,
            });
        }
        if self.base_score < self.pillar_min || self.base_score > self.pillar_max {
            return Err(RuleConfigError::BaseOutOfRange {
                base: self.base_score,
                min: self.pillar_min,
                max: self.pillar_max,
            });
        }
        if self.bands.is_empty() {
            return Err(RuleConfigError::NoBands);
        }
        if let Some(band) = self.bands.iter().find(|band| band.min > band.max) {
            return Err(RuleConfigError::InvertedBand {
                label: band.label.clone(),
                min: band.min,
                max: band.max,
            });
        }

        for total in self.min_total()..=self.max_total() {
            let matches = self.bands.iter().filter(|band| band.contains(total)).count();
            if matches != 1 {
                return Err(RuleConfigError::BandCoverage { total, matches });
            }
        }

        Ok(())
    }

    /// Rules for `pillar` in declared order, across every entry naming it.
    pub fn rules_for(&self, pillar: Pillar) -> impl Iterator<Item = &Rule> {
        self.pillars
            .iter()
            .filter(move |entry| entry.pillar == pillar)
            .flat_map(|entry| entry.rules.iter())
    }

    pub fn band_for(&self, total: u8) -> &str {
        self.bands
            .iter()
            .find(|band| band.contains(total))
            .map(|band| band.label.as_str())
            .unwrap_or(UNKNOWN_BAND)
    }

    pub fn min_total(&self) -> u8 {
        self.pillar_min.saturating_mul(PILLAR_COUNT as u8)
    }

    pub fn max_total(&self) -> u8 {
        self.pillar_max.saturating_mul(PILLAR_COUNT as u8)
    }
}

fn question(field: &str) -> &'static str {
    QUESTIONNAIRE
        .iter()
        .find(|(key, _)| *key == field)
        .map(|(_, text)| *text)
        .unwrap_or_default()
}

fn standard_pillar_rules() -> Vec<PillarRules> {
    vec![
        PillarRules {
            pillar: Pillar::Positioning,
            rules: vec![
                Rule::new(question("icp_definition"), "Documented and used by every team", 1),
                Rule::flagged(
                    question("icp_definition"),
                    "Loosely defined",
                    -1,
                    "ICP is loosely defined, so targeting drifts between teams.",
                ),
                Rule::flagged(
                    question("icp_definition"),
                    "Not defined",
                    -2,
                    "No documented ICP; targeting and messaging are guesswork.",
                ),
                Rule::new(question("win_reason"), "Clear differentiation", 2),
                Rule::flagged(
                    question("win_reason"),
                    "Price",
                    -1,
                    "Deals are won on price, a sign of weak differentiation.",
                ),
                Rule::flagged(
                    question("competitive_parity"),
                    "Often",
                    -2,
                    "Prospects often cannot tell you apart from competitors.",
                ),
                Rule::new(question("competitive_parity"), "Rarely", 1),
                Rule::flagged(
                    question("messaging_consistency"),
                    "No",
                    -1,
                    "Messaging is inconsistent across sales, marketing, and web.",
                ),
            ],
        },
        PillarRules {
            pillar: Pillar::ValueArchitecture,
            rules: vec![
                Rule::new(question("roi_quantified"), "Yes — documented & repeatable", 3),
                Rule::new(question("roi_quantified"), "Sometimes", 1),
                Rule::flagged(
                    question("roi_quantified"),
                    "No",
                    -2,
                    "Customer ROI is not quantified, which weakens pricing power.",
                ),
                Rule::flagged(
                    question("value_metric"),
                    "No",
                    -1,
                    "No value metric ties price to customer outcomes.",
                ),
                Rule::new(question("value_metric"), "Yes", 1),
                Rule::flagged(
                    question("case_studies"),
                    "None",
                    -1,
                    "No quantified case studies to prove value.",
                ),
                Rule::flagged(
                    question("outcome_tracking"),
                    "No",
                    -1,
                    "Customer outcomes are not tracked after the sale.",
                ),
            ],
        },
        PillarRules {
            pillar: Pillar::PricingPackaging,
            rules: vec![
                Rule::new(question("gross_margin"), "75%+", 2),
                Rule::flagged(
                    question("gross_margin"),
                    "Under 50%",
                    -2,
                    "Gross margin under 50% limits room to invest in growth.",
                ),
                Rule::flagged(
                    question("discounting"),
                    "Most deals",
                    -2,
                    "Heavy discounting is eroding realized price.",
                ),
                Rule::new(question("discounting"), "Rarely", 1),
                Rule::flagged(
                    question("last_price_review"),
                    "More than 2 years ago",
                    -1,
                    "Pricing has not been reviewed in over two years.",
                ),
                Rule::flagged(
                    question("packaging_tiers"),
                    "Custom for every deal",
                    -1,
                    "Every deal is custom-packaged, which slows sales cycles.",
                ),
            ],
        },
        PillarRules {
            pillar: Pillar::GtmFocus,
            rules: vec![
                Rule::flagged(
                    question("primary_channel"),
                    "No dominant channel",
                    -1,
                    "No dominant acquisition channel; GTM effort is spread thin.",
                ),
                Rule::flagged(
                    question("segments_pursued"),
                    "4 or more",
                    -2,
                    "Pursuing four or more segments dilutes GTM focus.",
                ),
                Rule::new(question("segments_pursued"), "1-2", 1),
                Rule::new(question("sales_cycle"), "More than 6 months", -1),
                Rule::flagged(
                    question("pipeline_alignment"),
                    "No",
                    -1,
                    "Sales and marketing do not share pipeline targets.",
                ),
                Rule::new(question("pipeline_alignment"), "Yes", 1),
            ],
        },
        PillarRules {
            pillar: Pillar::Measurement,
            rules: vec![
                // Keyed without the questionnaire's trailing '?'; matched through the normalized index.
                Rule::flagged(
                    "Are revenue forecasts accurate within 10%",
                    "No",
                    -2,
                    "Forecasts miss by more than 10%, undermining planning.",
                ),
                Rule::new("Are revenue forecasts accurate within 10%", "Yes", 1),
                Rule::flagged(
                    question("cac_payback"),
                    "No",
                    -1,
                    "CAC payback period is unknown.",
                ),
                Rule::flagged(
                    question("net_revenue_retention"),
                    "No",
                    -1,
                    "Net revenue retention is not tracked.",
                ),
                Rule::new(question("revenue_source_of_truth"), "No", -1),
                Rule::new(question("revenue_source_of_truth"), "Yes", 1),
            ],
        },
    ]
}
