pub mod cli;
pub mod dialog;
pub mod dispatch;
pub mod job;
pub mod model;
pub mod session;

pub async fn run_cli() -> Result<(), String> {
    cli::run_cli().await
}
