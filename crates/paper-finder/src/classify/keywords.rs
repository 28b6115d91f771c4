//! Versioned keyword lists for the affiliation classifier.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Keyword list shipped with the binary.
pub const BUNDLED_KEYWORDS: &str = include_str!("../../keywords.json");

/// Keyword lists driving [`super::AffiliationClassifier`].
///
/// Lists missing from a user-supplied file are empty rather than falling back
/// to the bundled values, so a replacement file fully describes the policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordConfig {
    /// Version of the list, reported in logs.
    pub version: u32,

    /// Substrings marking an academic or public-sector affiliation.
    #[serde(default)]
    pub academic: Vec<String>,

    /// E-mail domain labels marking an academic address (`edu` in `mit.edu`).
    #[serde(default)]
    pub academic_email_labels: Vec<String>,

    /// Substrings marking a company affiliation.
    #[serde(default)]
    pub company_indicators: Vec<String>,

    /// Whole words marking a company affiliation (legal suffixes and the like).
    #[serde(default)]
    pub company_words: Vec<String>,

    /// Mail providers that say nothing about the employer.
    #[serde(default)]
    pub generic_email_domains: Vec<String>,
}

impl KeywordConfig {
    /// Parse keyword lists from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Load keyword lists from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    /// The bundled keyword lists.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_KEYWORDS).expect("bundled keywords.json is valid")
    }

    /// Lowercase and trim every entry, dropping blanks and duplicates.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.academic,
            &mut self.academic_email_labels,
            &mut self.company_indicators,
            &mut self.company_words,
            &mut self.generic_email_domains,
        ] {
            let mut seen = Vec::with_capacity(list.len());
            for entry in list.drain(..) {
                let entry = entry.trim().to_lowercase();
                if !entry.is_empty() && !seen.contains(&entry) {
                    seen.push(entry);
                }
            }
            *list = seen;
        }
        self
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::bundled()
    }
}
