//! trustscan - URL trustworthiness scanner
//!
//! Assesses a URL by inspecting its TLS certificate and domain registration
//! age, fuses both signals into a 1-100 risk score and persists the result
//! for later retrieval.

use clap::Parser;
use console::style;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use trustscan::cli::{Cli, Commands, OutputFormat};
use trustscan::config::Settings;
use trustscan::output;
use trustscan::store::SqliteStore;
use trustscan::utils::Result;
use trustscan::Scanner;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(ref path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    if let Some(timeout) = cli.timeout {
        settings.ssl.connect_timeout_secs = timeout;
        settings.ssl.handshake_timeout_secs = timeout;
        settings.whois.timeout_secs = timeout;
    }

    let database_url = cli
        .db
        .clone()
        .unwrap_or_else(|| settings.store.database_url.clone());
    let store = Arc::new(SqliteStore::connect(&database_url).await?);
    let scanner = Scanner::new(settings, store);

    match cli.command {
        Some(Commands::Scan { url }) => scan(&scanner, &url, cli.format).await,
        Some(Commands::Show { scan_id }) => show(&scanner, scan_id, cli.format).await,
        None => match cli.url {
            Some(url) => scan(&scanner, &url, cli.format).await,
            None => {
                println!("{}", style("trustscan").cyan().bold());
                println!("URL trustworthiness scanner\n");
                println!("Usage: trustscan [OPTIONS] [URL]");
                println!("       trustscan <COMMAND>\n");
                println!("Run 'trustscan --help' for more information.");
                Ok(())
            }
        },
    }
}

async fn scan(scanner: &Scanner, url: &str, format: OutputFormat) -> Result<()> {
    let outcome = scanner.assess(url).await?;
    match format {
        OutputFormat::Json => output::print_json(&outcome.summary())?,
        OutputFormat::Text => output::print_outcome(&outcome),
    }
    Ok(())
}

async fn show(scanner: &Scanner, scan_id: i64, format: OutputFormat) -> Result<()> {
    match scanner.fetch(scan_id).await? {
        Some(record) => match format {
            OutputFormat::Json => output::print_json(&record)?,
            OutputFormat::Text => output::print_stored(&record),
        },
        None => {
            println!("{}", style(format!("No scan found with id {scan_id}")).yellow());
        }
    }
    Ok(())
}
