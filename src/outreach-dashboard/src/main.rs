//! Outreach Dashboard — synthetic email-outreach analytics service.
//!
//! Main entry point that loads configuration, kicks off the delayed feed
//! load, and starts the HTTP server.

use clap::Parser;
use outreach_api::{spawn_delayed_load, ApiServer, DashboardState};
use outreach_core::config::AppConfig;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "outreach-dashboard")]
#[command(about = "Email-outreach campaign analytics dashboard service")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "OUTREACH__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "OUTREACH__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Generated window in days, anchor day included (overrides config)
    #[arg(long, env = "OUTREACH__FEED__WINDOW_DAYS")]
    window_days: Option<u32>,

    /// Feed RNG seed for reproducible data (overrides config)
    #[arg(long, env = "OUTREACH__FEED__SEED")]
    seed: Option<u64>,

    /// Simulated load latency in milliseconds (overrides config)
    #[arg(long, env = "OUTREACH__FEED__LOAD_DELAY_MS")]
    load_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outreach_dashboard=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Outreach Dashboard starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(window_days) = cli.window_days {
        config.feed.window_days = window_days;
    }
    if let Some(seed) = cli.seed {
        config.feed.seed = Some(seed);
    }
    if let Some(delay) = cli.load_delay_ms {
        config.feed.load_delay_ms = delay;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        window_days = config.feed.window_days,
        load_delay_ms = config.feed.load_delay_ms,
        "Configuration loaded"
    );

    // Kick off the one-shot feed load behind the simulated latency
    let dashboard = DashboardState::new();
    spawn_delayed_load(dashboard.clone(), config.feed.clone());

    // Start API server
    let api_server = ApiServer::new(config.clone(), dashboard);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Outreach Dashboard is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
