//! Entry point for the Kinship HTTP API.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kinship_api::{create_app, run_server, AppState};
use kinship_core::KinshipConfig;
use kinship_graph::{GraphClient, GraphConfig};

#[derive(Parser)]
#[command(name = "kinship-api")]
#[command(about = "HTTP API over the Kinship people graph")]
struct Cli {
    /// Config file prefix (default: kinship).
    #[arg(short, long, default_value = "kinship")]
    config: String,

    /// Listen port, overrides config and PORT.
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let mut config = KinshipConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let graph = GraphClient::connect(&GraphConfig::from(&config.neo4j)).await?;
    if config.neo4j.enforce_unique_names {
        graph.ensure_schema().await?;
    }

    let app = create_app(AppState::new(Arc::new(graph)), &config.server.cors_origins);
    run_server(app, &config.server.bind_addr()).await
}
