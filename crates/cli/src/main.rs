//! # Cinder CDN
//!
//! Cache index and purge coordination service for the CDN admin panel.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use cinder_cdn_domain::CliOverrides;
use cinder_cdn_jobs::{BandwidthRetentionJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "cinder-cdn")]
#[command(version)]
#[command(about = "CDN cache index and purge coordination service")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// HTTP API port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Edge cache endpoint URL
    #[arg(long)]
    edge: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        http_port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
        edge_endpoint: cli.edge,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        http_port = config.server.http_port,
        bind = %config.server.bind_address,
        edge = %config.edge.endpoint,
        "Cinder CDN starting"
    );

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool, &config)?;
    let services = di::Services::new(repos, &config);

    let shutdown = CancellationToken::new();
    let retention_job = BandwidthRetentionJob::new(
        services.prune_bandwidth.clone(),
        config.retention.bandwidth_days,
    )
    .with_cancellation(shutdown.clone());

    JobRunner::new()
        .with_bandwidth_retention(retention_job)
        .start()
        .await;

    let app = server::create_app(services.state, &config);
    server::start_web_server(app, &config).await?;

    shutdown.cancel();
    info!("Cinder CDN stopped");

    Ok(())
}
