//! daas-token server
//!
//! Serves the login/logout endpoints behind the token filter

use clap::Parser;
use daas_token::config::Config;
use daas_token::server;
use daas_token::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "daas-token", version, about = "Token authentication server")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "DAAS_TOKEN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long, env = "DAAS_TOKEN_LOG_JSON")]
    log_json: bool,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref()).await?;
    if let Some(host) = args.host {
        config.security.server.host = host;
    }
    if let Some(port) = args.port {
        config.security.server.port = port;
    }
    config.validate()?;

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging("info", args.log_json);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
