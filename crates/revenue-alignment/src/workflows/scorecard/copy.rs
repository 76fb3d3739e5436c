use super::domain::{ScoredResult, Tier};
use serde::{Deserialize, Serialize};

pub const NO_FLAGS_LINE: &str = "No major red flags surfaced in your answers.";

const EXEC_FLAG_LIMIT: usize = 2;

/// Email subject and plain-text body for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCopy {
    pub subject: String,
    pub body_text: String,
}

pub fn render(tier: Tier, scored: &ScoredResult, client_name: &str) -> RenderedCopy {
    let name = match client_name.trim() {
        "" => "there",
        trimmed => trimmed,
    };
    let constraint = scored.primary_constraint.label();

    match tier {
        Tier::Exec => {
            let flags = flag_lines(scored.flags.iter().take(EXEC_FLAG_LIMIT));
            RenderedCopy {
                subject: format!(
                    "Your Revenue Alignment Snapshot: {} ({}/{})",
                    scored.band, scored.total, scored.max_total
                ),
                body_text: format!(
                    "Hi {name},\n\n\
                     Thanks for completing the Revenue Alignment Scorecard.\n\n\
                     Overall score: {total}/{max_total}\n\
                     Alignment band: {band}\n\
                     Primary constraint: {constraint}\n\n\
                     What stood out:\n{flags}\n\n\
                     Your executive summary is attached. If you want the full audit with a \
                     pricing review and 90-day roadmap, reply to this email and we will set it up.\n",
                    total = scored.total,
                    max_total = scored.max_total,
                    band = scored.band,
                ),
            }
        }
        Tier::Audit => {
            let flags = flag_lines(scored.flags.iter());
            RenderedCopy {
                subject: format!(
                    "Your Revenue Alignment Audit: {} ({}/{})",
                    scored.band, scored.total, scored.max_total
                ),
                body_text: format!(
                    "Hi {name},\n\n\
                     Your full Revenue Alignment Audit is ready.\n\n\
                     Overall score: {total}/{max_total}\n\
                     Alignment band: {band}\n\
                     Primary constraint: {constraint}\n\n\
                     Every red flag from your answers:\n{flags}\n\n\
                     The attached report walks through each pillar, the evidence behind your \
                     primary constraint, and the roadmap we recommend. Book a review call when \
                     you are ready to walk through it together.\n",
                    total = scored.total,
                    max_total = scored.max_total,
                    band = scored.band,
                ),
            }
        }
    }
}

fn flag_lines<'a>(flags: impl Iterator<Item = &'a String>) -> String {
    let lines: Vec<String> = flags.map(|flag| format!("- {flag}")).collect();
    if lines.is_empty() {
        format!("- {NO_FLAGS_LINE}")
    } else {
        lines.join("\n")
    }
}
