//! Command-line login client for the caseworker portal.
//!
//! # Usage
//!
//! ```bash
//! # Log in, prompting for anything not given
//! cw-login login
//!
//! # Non-interactive login against another portal
//! cw-login --base-url https://his.example.gov login -u caseworker -p 1234 --no-wait
//!
//! # Show the resolved configuration
//! cw-login config
//! ```
//!
//! # Exit Codes
//!
//! - `0` - credentials accepted
//! - `1` - credentials rejected
//! - `2` - the request failed (details in the log)

use caseworker_login::application::services::LoginService;
use caseworker_login::config::{self, Config};
use caseworker_login::infrastructure::http::HttpLoginTransport;
use caseworker_login::infrastructure::terminal::{ConsoleNavigator, ConsoleNotifier, PromptForm};
use caseworker_login::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;

/// Login client for the caseworker portal.
#[derive(Parser)]
#[command(name = "cw-login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Portal root URL (overrides PORTAL_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Log in to the portal
    Login {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Print messages without waiting for Enter
        #[arg(long)]
        no_wait: bool,
    },

    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.portal_base_url = base_url;
    }
    config.validate().context("Invalid configuration")?;

    telemetry::init(&config.log_level, &config.log_format);

    match cli.command {
        Commands::Login {
            username,
            password,
            no_wait,
        } => run_login(&config, username, password, no_wait).await,
        Commands::Config => {
            show_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs one login invocation with terminal adapters.
async fn run_login(
    config: &Config,
    username: Option<String>,
    password: Option<String>,
    no_wait: bool,
) -> Result<ExitCode> {
    let base_url = config.base_url()?;

    let transport = HttpLoginTransport::new(&base_url, &config.login_endpoint)
        .context("Failed to set up the login transport")?;

    println!("{}", "🔐 Caseworker Login".bright_blue().bold());
    println!(
        "  Portal: {}",
        config::mask_url_credentials(&config.portal_base_url).cyan()
    );
    println!();

    let service = LoginService::new(
        Arc::new(PromptForm::new(username, password)),
        Arc::new(transport),
        Arc::new(ConsoleNotifier::new(!no_wait)),
        Arc::new(ConsoleNavigator::new(base_url)),
        config.routes(),
    );

    let handle = service.dispatch().context("Failed to read the login form")?;
    let settlement = handle.await.context("Login task panicked")?;

    Ok(ExitCode::from(settlement.exit_status()))
}

/// Prints the configuration without secrets.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!(
        "  Portal:          {}",
        config::mask_url_credentials(&config.portal_base_url).cyan()
    );
    println!("  Login endpoint:  {}", config.login_endpoint.cyan());
    println!("  Dashboard:       {}", config.dashboard_path.cyan());
    println!("  Admin dashboard: {}", config.admin_dashboard_path.cyan());
    println!("  Log level:       {}", config.log_level.bright_black());
    println!("  Log format:      {}", config.log_format.bright_black());
    println!();

    config.print_summary();
}
