mod app;
mod client;
mod config;
mod error;
mod expense_form;
mod export;
mod ui;

use crate::error::Result;

/// Logs go to a file; stdout is owned by the terminal UI.
fn init_tracing(path: &str) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config.log_file)?;
    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
