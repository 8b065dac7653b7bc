//! Logdash CLI
//!
//! Serves the log analyzer dashboard, or renders the chart configs once.

use std::path::PathBuf;

use clap::Parser;
use logdash::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "logdash")]
#[command(about = "Error timeline and top-hosts dashboard for the log analyzer")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    /// Render the chart configs once, print them as JSON and exit
    #[arg(long)]
    print_charts: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}, print_charts={}",
        args.config,
        args.port,
        args.log_level,
        args.print_charts
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    if args.print_charts {
        println!("{}", logdash::render_charts_json(&config).await?);
        return Ok(());
    }

    tracing::info!("Starting log dashboard");
    logdash::run(config).await?;

    Ok(())
}
