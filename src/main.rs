mod catalog;
mod clients;
mod domain;
mod permissions;
mod screen_flow;
mod screens;
mod shell;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod session_actor;

use tokio::io::BufReader;
use tracing::info;

use crate::app_system::{setup_tracing, AppError, Config, PosSystem};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env()?;
    info!(currency = %config.currency_symbol, "Starting furniture POS");

    let mut system = PosSystem::new(&config);

    let stdin = BufReader::new(tokio::io::stdin());
    let shell_result = shell::run_shell(&system.session_client, &mut system.notices, stdin, tokio::io::stdout()).await;

    // Shutdown system gracefully, even when the terminal failed
    let session = system.shutdown().await?;
    shell_result?;
    info!(screen = %session.current_screen(), "Application completed successfully");
    Ok(())
}
