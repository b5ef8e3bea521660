//! Command-line front end for the restpool client.
//!
//! Loads an optional pool configuration, performs one call and prints the
//! resulting Response as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use restpool::config::{load_config, ClientConfig};
use restpool::observability::logging::init_logging;
use restpool::{Method, RestClient};

#[derive(Parser)]
#[command(name = "restpool")]
#[command(about = "Issue REST calls through configured connection pools", long_about = None)]
struct Cli {
    /// Pool configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Target {
    /// Target URL (may be relative to a pool's base URL).
    url: String,

    /// Header as `Name: value`; repeatable.
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,
}

#[derive(clap::Args)]
struct TargetWithBody {
    #[command(flatten)]
    target: Target,

    /// Request body.
    #[arg(short, long, default_value = "")]
    body: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request
    Get(Target),
    /// Send a POST request
    Post(TargetWithBody),
    /// Send a PUT request
    Put(TargetWithBody),
    /// Send a DELETE request
    Delete(Target),
    /// Send a HEAD request
    Head(Target),
    /// Send an OPTIONS request
    Options(Target),
}

fn parse_header(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once(':')?;
    Some((name.trim(), value.trim()))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability);

    let client = RestClient::from_config(&config)?;

    let (method, target, body) = match &cli.command {
        Commands::Get(t) => (Method::GET, t, ""),
        Commands::Post(t) => (Method::POST, &t.target, t.body.as_str()),
        Commands::Put(t) => (Method::PUT, &t.target, t.body.as_str()),
        Commands::Delete(t) => (Method::DELETE, t, ""),
        Commands::Head(t) => (Method::HEAD, t, ""),
        Commands::Options(t) => (Method::OPTIONS, t, ""),
    };

    let mut headers = Vec::with_capacity(target.headers.len());
    for raw in &target.headers {
        match parse_header(raw) {
            Some(pair) => headers.push(pair),
            None => return Err(format!("invalid header '{raw}', expected 'Name: value'").into()),
        }
    }

    match client.execute(method, &target.url, body, &headers).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            println!("{}", serde_json::to_string_pretty(e.response())?);
            Ok(ExitCode::FAILURE)
        }
    }
}
