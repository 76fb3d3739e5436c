use crate::commands::{run_rules, run_score, RulesArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use revenue_alignment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Revenue Alignment Scorecard",
    about = "Score revenue alignment questionnaires over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answers JSON file and print the full response
    Score(ScoreArgs),
    /// Print the active rule table as JSON
    Rules(RulesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Rules(args) => run_rules(args),
    }
}
