//! Scholar-Harvest main entry point
//!
//! This is the command-line interface for the literature discovery pipeline.

use clap::Parser;
use scholar_harvest::config::Config;
use scholar_harvest::download::download_all;
use scholar_harvest::enrich::enrich_records;
use scholar_harvest::notify::send_report;
use scholar_harvest::output::{write_report, OutputBundle};
use scholar_harvest::search::{default_options, SearchClient};
use tracing_subscriber::EnvFilter;

/// Scholar-Harvest: automated literature discovery
///
/// Searches a scholarly API for a topic, enriches every open-access result
/// with a canonical source link and a PDF link scraped from its landing page,
/// optionally downloads the PDFs, writes a semicolon-delimited CSV report,
/// and optionally emails the bundled output.
#[derive(Parser, Debug)]
#[command(name = "scholar-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Automated literature discovery", long_about = None)]
struct Cli {
    /// Topic to search for (quote multi-word topics)
    #[arg(long, required = true)]
    topic: String,

    /// Number of result pages to request
    #[arg(long, required = true, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Download a PDF for every record with a retrievable link
    #[arg(long)]
    pdf: bool,

    /// Email the zipped output bundle to this address
    #[arg(long, value_name = "ADDRESS")]
    email: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials may live in a .env file, matching deployment convention
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::from_env()?;
    let http = build_http_client()?;

    let bundle = OutputBundle::create(&std::env::current_dir()?, &cli.topic)?;

    tracing::info!(
        "Searching for \"{}\" ({} page{})",
        cli.topic,
        cli.pages,
        if cli.pages == 1 { "" } else { "s" }
    );

    let search = SearchClient::new(http.clone(), config.search.clone());
    let mut records = search
        .search(&cli.topic, cli.pages, &default_options())
        .await?;

    tracing::info!("Enriching {} records with paper links", records.len());
    enrich_records(&http, &mut records).await?;

    if cli.pdf {
        download_all(&http, bundle.dir(), &records).await;
    }

    write_report(bundle.dir(), &records)?;

    if let Some(recipient) = &cli.email {
        let zip_path = send_report(&config.smtp, bundle.dir(), &cli.topic, recipient).await?;
        println!(
            "✓ Report emailed to {} (archive at {})",
            recipient,
            zip_path.display()
        );
    }

    println!(
        "✓ {} records written to {}",
        records.len(),
        bundle.report_path().display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("scholar_harvest=info,warn"),
            1 => EnvFilter::new("scholar_harvest=debug,info"),
            2 => EnvFilter::new("scholar_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the HTTP client shared by the search, enrichment, and download stages
fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    let user_agent = format!("scholar-harvest/{}", env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}
