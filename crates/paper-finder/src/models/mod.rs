//! Data models for PubMed records and E-utilities responses.

mod esearch;
mod paper;

pub use esearch::{SearchResponse, SearchResult};
pub use paper::{AuthorRecord, FilteredPaperRecord, PaperRecord};
