//! Fuzzing library for paper-finder.
//!
//! This crate provides fuzzing targets for the PubMed response parsers and
//! the affiliation classifier.
//!
//! # Usage
//!
//! ```bash
//! cd crates/paper-finder-fuzz
//! cargo +nightly fuzz run fuzz_efetch_parse -- -max_total_time=60
//! ```

pub use paper_finder::{classify, client, models};
