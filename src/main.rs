//! tchai main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tchai_api::start_server;
use tchai_config::Config;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "tchai")]
#[command(version = "0.1.0")]
#[command(about = "Record transfers between people and query their balances", long_about = None)]
struct Args {
    /// Configuration file path (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Host to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Transaction file, overrides the config file and TCHAI_DATA_FILE
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    config.apply_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_file) = args.data_file {
        config.storage.data_file = data_file;
    }
    config.validate().context("Invalid configuration")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!(
        "Config loaded: bind={}, data_file={}",
        config.bind_address(),
        config.storage.data_file.display()
    );

    let rt = Runtime::new()?;
    rt.block_on(start_server(config))?;

    Ok(())
}
