use crate::infra::{load_rules, read_payload};
use chrono::Utc;
use clap::Args;
use revenue_alignment::config::AppConfig;
use revenue_alignment::error::AppError;
use revenue_alignment::workflows::scorecard::{ScorecardRequest, ScorecardService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding either a full request payload or a bare question -> answer map
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Output tier: exec (default) or audit/full
    #[arg(long)]
    pub(crate) tier: Option<String>,
    /// Client name used in the rendered copy
    #[arg(long, default_value = "")]
    pub(crate) client_name: String,
    /// Client email recorded on the report
    #[arg(long, default_value = "")]
    pub(crate) client_email: String,
    /// Rule table JSON overriding SCORECARD_RULES_PATH and the built-in table
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Rule table JSON overriding SCORECARD_RULES_PATH and the built-in table
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        tier,
        client_name,
        client_email,
        rules,
    } = args;

    let config = AppConfig::load()?;
    let rules = load_rules(rules.or(config.scorecard.rules_path).as_deref())?;

    let mut payload = read_payload(&answers)?;
    if let Some(tier) = tier {
        payload["tier"] = tier.into();
    }
    if !client_name.is_empty() {
        payload["client_name"] = client_name.into();
    }
    if !client_email.is_empty() {
        payload["client_email"] = client_email.into();
    }

    let request = ScorecardRequest::from_payload(&payload)?;
    let service = ScorecardService::new(Arc::new(rules));
    let response = service.evaluate(request, Utc::now())?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let rules = load_rules(args.rules.or(config.scorecard.rules_path).as_deref())?;

    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(())
}
