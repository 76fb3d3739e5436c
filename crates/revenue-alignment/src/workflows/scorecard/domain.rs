use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The five evaluation dimensions, in the order rules are evaluated and ties broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Positioning,
    ValueArchitecture,
    PricingPackaging,
    GtmFocus,
    Measurement,
}

impl Pillar {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Positioning,
            Self::ValueArchitecture,
            Self::PricingPackaging,
            Self::GtmFocus,
            Self::Measurement,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Positioning => "positioning",
            Self::ValueArchitecture => "value_architecture",
            Self::PricingPackaging => "pricing_packaging",
            Self::GtmFocus => "gtm_focus",
            Self::Measurement => "measurement",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positioning => "Positioning & Differentiation",
            Self::ValueArchitecture => "Value Architecture",
            Self::PricingPackaging => "Pricing & Packaging",
            Self::GtmFocus => "Go-to-Market Focus",
            Self::Measurement => "Revenue Measurement",
        }
    }
}

/// Output mode for the rendered copy and report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Exec,
    Audit,
}

impl Tier {
    /// `"audit"` and its legacy alias `"full"` select the audit tier; everything else is exec.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("audit") | Some("full") => Self::Audit,
            _ => Self::Exec,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exec => "exec",
            Self::Audit => "audit",
        }
    }
}

/// Trim, lower-case and drop trailing sentence punctuation so that `"Yes."`,
/// `" yes "` and `"YES"` compare equal.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .trim_end_matches(['.', ',', ';', ':', '!', '?'])
        .trim_end()
        .to_string()
}

/// Questionnaire answers keyed by the full question text, kept in submission
/// order. Re-inserting a question replaces its answer in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(Vec<(String, String)>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce a JSON object into answers: strings verbatim, numbers and booleans
    /// as text, anything else as an empty answer that never matches a rule.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        map.iter()
            .map(|(question, value)| (question.as_str(), coerce_answer(value)))
            .collect()
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == question) {
            Some(slot) => slot.1 = answer,
            None => self.0.push((question, answer)),
        }
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == question)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of `normalize_text(question) -> answer`. When two questions
    /// normalize to the same key the first submitted wins.
    pub(crate) fn normalized_index(&self) -> BTreeMap<String, &str> {
        let mut index = BTreeMap::new();
        for (question, answer) in self.iter() {
            index.entry(normalize_text(question)).or_insert(answer);
        }
        index
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (question, answer) in iter {
            answers.insert(question, answer);
        }
        answers
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

fn coerce_answer(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Clamped per-pillar scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScores {
    pub positioning: u8,
    pub value_architecture: u8,
    pub pricing_packaging: u8,
    pub gtm_focus: u8,
    pub measurement: u8,
}

impl PillarScores {
    pub fn get(&self, pillar: Pillar) -> u8 {
        match pillar {
            Pillar::Positioning => self.positioning,
            Pillar::ValueArchitecture => self.value_architecture,
            Pillar::PricingPackaging => self.pricing_packaging,
            Pillar::GtmFocus => self.gtm_focus,
            Pillar::Measurement => self.measurement,
        }
    }

    pub(crate) fn set(&mut self, pillar: Pillar, score: u8) {
        let slot = match pillar {
            Pillar::Positioning => &mut self.positioning,
            Pillar::ValueArchitecture => &mut self.value_architecture,
            Pillar::PricingPackaging => &mut self.pricing_packaging,
            Pillar::GtmFocus => &mut self.gtm_focus,
            Pillar::Measurement => &mut self.measurement,
        };
        *slot = score;
    }

    pub fn total(&self) -> u8 {
        Pillar::ordered()
            .into_iter()
            .fold(0u8, |total, pillar| total.saturating_add(self.get(pillar)))
    }
}

/// Outcome of scoring one answer set against a rule configuration.
/// `max_total` and `pillar_max` carry the scale the scores were clamped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub total: u8,
    pub max_total: u8,
    pub band: String,
    pub pillar_scores: PillarScores,
    pub pillar_max: u8,
    pub primary_constraint: Pillar,
    pub flags: Vec<String>,
}
