use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Display currency code (INR, USD, EUR, GBP).
    pub currency: String,
    /// Monthly budget in major units.
    pub budget: f64,
    pub notifications: bool,
    pub dark: bool,
    /// Log destination; stdout belongs to the dashboard.
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api/".to_string(),
            currency: "INR".to_string(),
            budget: 50_000.0,
            notifications: true,
            dark: true,
            log_file: "outgo-tui.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "outgo_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:5000/api/).
    #[arg(long)]
    base_url: Option<String>,
    /// Override display currency code.
    #[arg(long)]
    currency: Option<String>,
    /// Override monthly budget (major units).
    #[arg(long)]
    budget: Option<f64>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("OUTGO_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(budget) = args.budget {
        settings.budget = budget;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}
