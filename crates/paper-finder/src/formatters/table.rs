//! Plain-text table output for the terminal.

use std::borrow::Cow;
use std::io::Write;

use crate::models::FilteredPaperRecord;

use super::NO_MATCHES_MESSAGE;

/// Column header and maximum display width.
const COLUMNS: [(&str, usize); 6] = [
    ("PubmedID", 10),
    ("Title", 50),
    ("Publication Date", 16),
    ("Non-academic Author(s)", 30),
    ("Company Affiliation(s)", 30),
    ("Corresponding Author Email", 30),
];

const SEPARATOR: &str = "  ";

/// Render filtered papers as a fixed-width table.
#[must_use]
pub fn format_table(papers: &[FilteredPaperRecord]) -> String {
    if papers.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }

    let rows: Vec<[String; 6]> = papers.iter().map(row_cells).collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, (header, max))| {
            let content = rows.iter().map(|r| r[i].chars().count()).max().unwrap_or(0);
            content.max(header.chars().count()).min(*max)
        })
        .collect();

    let mut output = String::new();

    let header: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();
    output.push_str(&format_line(&header, &widths));
    output.push_str(&format_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));

    for row in &rows {
        output.push_str(&format_line(row, &widths));
    }

    output.push_str(&format!("\n{} paper(s) with non-academic authors\n", papers.len()));
    output
}

/// Print the table to standard output.
pub fn print_to_console(papers: &[FilteredPaperRecord]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_table(papers).as_bytes())?;
    if papers.is_empty() {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

fn row_cells(record: &FilteredPaperRecord) -> [String; 6] {
    [
        record.paper.pmid.clone(),
        record.paper.title.clone(),
        record.paper.publication_date.clone(),
        record.author_names(),
        record.company_names(),
        record.email_or_default().to_string(),
    ]
}

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", truncate(cell.as_ref(), *width), width = *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}\n", line.trim_end())
}

/// Truncate to `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    let keep = max.saturating_sub(3);
    let cut: String = text.chars().take(keep).collect();
    Cow::Owned(format!("{cut}..."))
}
