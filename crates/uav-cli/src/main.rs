//! UAV Configurator CLI
//!
//! Loads a configuration file and prints its cruise performance estimate,
//! computed by the API or locally.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uav_cli::{configure_local, load_configuration, report, ConfiguratorClient};

#[derive(Parser, Debug)]
#[command(name = "uav-configure")]
#[command(about = "Estimate UAV cruise thrust, power and endurance")]
struct Args {
    /// Configuration JSON file
    config: PathBuf,

    /// Configure endpoint
    #[arg(long, default_value = "http://localhost:8080/configure")]
    api_url: String,

    /// Evaluate in-process instead of calling the API
    #[arg(long)]
    local: bool,

    /// Print the raw JSON result
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("uav_cli=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let payload = load_configuration(&args.config)?;

    let result = if args.local {
        info!("Evaluating {} locally", args.config.display());
        configure_local(payload)?
    } else {
        let client = ConfiguratorClient::new(args.api_url);
        info!("Posting {} to {}", args.config.display(), client.endpoint());
        client.configure(&payload).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }

    Ok(())
}
