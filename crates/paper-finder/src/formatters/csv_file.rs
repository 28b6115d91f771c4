//! CSV output.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::OutputError;
use crate::models::FilteredPaperRecord;

/// Column headers, in order.
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PubmedID")]
    pmid: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Publication Date")]
    publication_date: &'a str,
    #[serde(rename = "Non-academic Author(s)")]
    authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    companies: String,
    #[serde(rename = "Corresponding Author Email")]
    email: &'a str,
}

impl<'a> From<&'a FilteredPaperRecord> for CsvRow<'a> {
    fn from(record: &'a FilteredPaperRecord) -> Self {
        Self {
            pmid: &record.paper.pmid,
            title: &record.paper.title,
            publication_date: &record.paper.publication_date,
            authors: record.author_names(),
            companies: record.company_names(),
            email: record.email_or_default(),
        }
    }
}

/// Write filtered papers as CSV to any writer.
///
/// The header row is written even when `papers` is empty.
pub fn write_csv<W: Write>(papers: &[FilteredPaperRecord], writer: W) -> Result<(), OutputError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for record in papers {
        wtr.serialize(CsvRow::from(record))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save filtered papers to a CSV file, replacing any existing file.
pub fn save_to_csv(papers: &[FilteredPaperRecord], path: &Path) -> Result<(), OutputError> {
    let file = std::fs::File::create(path)?;
    write_csv(papers, std::io::BufWriter::new(file))?;

    info!(path = %path.display(), rows = papers.len(), "Saved CSV");
    Ok(())
}

/// Append `.csv` unless the name already ends with it (case-insensitive).
#[must_use]
pub fn ensure_csv_extension(name: &str) -> PathBuf {
    // Plain suffix check: `Path::extension` is `None` for names like ".csv"
    if name.to_ascii_lowercase().ends_with(".csv") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.csv"))
    }
}
