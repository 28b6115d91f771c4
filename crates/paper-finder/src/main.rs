//! PubMed Paper Finder - Entry Point
//!
//! Fetches PubMed papers for a query and reports those with pharmaceutical or
//! biotech author affiliations.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_finder::{
    AffiliationClassifier, KeywordConfig, PubMedClient,
    config::{Config, api},
    filter_non_academic_authors,
    formatters::{self, NO_MATCHES_MESSAGE},
};

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(
    about = "PubMed Paper Filter: fetch papers and keep those with non-academic pharma/biotech authors"
)]
#[command(version)]
struct Cli {
    /// PubMed search query (e.g. 'cancer immunotherapy'); prompted for when
    /// omitted or blank
    query: Option<String>,

    /// Enable debug logging during execution
    #[arg(short, long)]
    debug: bool,

    /// Filename to save results as CSV; results are printed to the console when omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Maximum number of PubMed records to fetch
    #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// JSON file replacing the bundled affiliation keyword lists
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// NCBI API key (optional, enables higher rate limits)
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Contact e-mail sent to NCBI with each request
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(debug: bool, json: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only the results table.
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

/// Trimmed command-line query; `None` when missing or blank.
fn query_argument(query: Option<&str>) -> Option<String> {
    query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_string)
}

/// Ask for a query on stdin. Returns `None` for blank input.
fn prompt_for_query() -> std::io::Result<Option<String>> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Enter a PubMed search query: ")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let query = line.trim();
    Ok((!query.is_empty()).then(|| query.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let query = match query_argument(cli.query.as_deref()) {
        Some(q) => q,
        None => match prompt_for_query()? {
            Some(q) => q,
            None => {
                println!("No query provided. Exiting.");
                return Ok(());
            }
        },
    };

    init_tracing(cli.debug, cli.json_logs);

    let keywords = match &cli.keywords {
        Some(path) => KeywordConfig::load(path)?,
        None => KeywordConfig::bundled(),
    };
    let classifier = AffiliationClassifier::new(keywords);

    let config = Config::new(cli.api_key).with_email(cli.email).with_max_results(cli.max_results);
    let client = PubMedClient::new(config)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        keywords_version = classifier.keywords().version,
        query = %query,
        "Searching PubMed"
    );

    let papers = client.fetch_papers(&query).await.context("PubMed fetch failed")?;
    let filtered = filter_non_academic_authors(&papers, &classifier);

    if filtered.is_empty() {
        println!("{NO_MATCHES_MESSAGE}");
        return Ok(());
    }

    match cli.file {
        Some(name) => {
            let path = formatters::ensure_csv_extension(&name);
            formatters::save_to_csv(&filtered, &path)
                .with_context(|| format!("Cannot save results to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Results saved");
        }
        None => formatters::print_to_console(&filtered)?,
    }

    Ok(())
}
