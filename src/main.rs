//! SpaceX Dash - interactive launch records dashboard
//!
//! Loads a static launch records CSV once at startup and serves a
//! single-page dashboard: a pie chart of launch successes driven by a
//! site dropdown, and a payload/outcome scatter plot driven by a payload
//! range slider.
//!
//! Exit codes:
//!   0 - Clean shutdown (or --check / --snapshot / --init-config done)
//!   1 - Startup error (bad arguments, config, unreadable dataset, bind failure)

mod analysis;
mod charts;
mod cli;
mod config;
mod dashboard;
mod dataset;
mod models;
mod server;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use dashboard::Dashboard;
use dataset::Dataset;
use server::Server;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    info!("SpaceX Dash v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args).await {
        error!("Dashboard failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .spacex-dash.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// `RUST_LOG`, when set, takes precedence over the CLI verbosity flags.
fn init_logging(args: &Args) -> Result<()> {
    let level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Load everything, then either report and exit or serve until shutdown.
async fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    config.validate()?;

    // Startup is all-or-nothing: an unreadable dataset aborts here.
    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("Failed to load dataset {}", config.data.path.display()))?;

    if args.check {
        print_check(&dataset);
        return Ok(());
    }

    let dashboard = Arc::new(Dashboard::new(
        Arc::new(dataset),
        config.dashboard.title.clone(),
        config.slider.clone(),
    ));

    if args.snapshot {
        let layout = dashboard.layout(&dashboard.initial_controls());
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    let addr = config.server.socket_addr()?;
    Server::new(dashboard, addr).run().await
}

/// Handle --check: print dataset totals per site.
fn print_check(dataset: &Dataset) {
    println!("\n🚀 Dataset check\n");
    println!("   Records: {}", dataset.len());
    println!(
        "   Payload range: {} – {} kg",
        dataset.min_payload(),
        dataset.max_payload()
    );
    println!("   Sites: {}\n", dataset.sites().len());

    for summary in analysis::site_totals(dataset.records()) {
        println!(
            "     📍 {:<14} {:>3} launches, {:>3} successes ({:.0}%)",
            summary.site,
            summary.launches,
            summary.successes,
            summary.success_rate() * 100.0
        );
    }

    println!("\n✅ Dataset loaded successfully.");
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
