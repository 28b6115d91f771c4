//! PubMed Paper Finder
//!
//! Searches PubMed through the NCBI E-utilities, keeps the papers that list at
//! least one author with a pharmaceutical or biotech affiliation, and reports
//! them as a console table or a CSV file.
//!
//! # Pipeline
//!
//! - **Fetch**: ESearch for PMIDs, then EFetch for the article XML
//! - **Filter**: rule-based affiliation classifier driven by a versioned keyword list
//! - **Present**: fixed-schema CSV or a plain-text table
//!
//! # Example
//!
//! ```no_run
//! use paper_finder::{
//!     classify::AffiliationClassifier, client::PubMedClient, config::Config,
//!     filter::filter_non_academic_authors, formatters,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env()?)?;
//!     let classifier = AffiliationClassifier::default();
//!
//!     let papers = client.fetch_papers("crispr therapeutics").await?;
//!     let filtered = filter_non_academic_authors(&papers, &classifier);
//!     formatters::print_to_console(&filtered)?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatters;
pub mod models;

pub use classify::{AffiliationClassifier, AffiliationKind, KeywordConfig};
pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, ConfigError, OutputError};
pub use filter::filter_non_academic_authors;
