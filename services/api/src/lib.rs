mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use revenue_alignment::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
