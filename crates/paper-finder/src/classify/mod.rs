//! Rule-based affiliation classifier.
//!
//! Affiliations are classified in this order:
//! 1. blank -> [`AffiliationKind::Unknown`]
//! 2. academic keyword substring -> [`AffiliationKind::Academic`]
//! 3. e-mail with an academic domain label -> [`AffiliationKind::Academic`]
//! 4. company indicator substring or company word -> [`AffiliationKind::NonAcademic`]
//! 5. e-mail on a non-generic, non-academic domain -> [`AffiliationKind::NonAcademic`]
//! 6. anything else -> [`AffiliationKind::Unknown`]
//!
//! All matching is case-insensitive. The lists come from [`KeywordConfig`].

mod keywords;

use std::sync::LazyLock;

use regex::Regex;

pub use keywords::{BUNDLED_KEYWORDS, KeywordConfig};

use crate::models::{AuthorRecord, FilteredPaperRecord, PaperRecord};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid e-mail regex")
});

/// Classification of a single affiliation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationKind {
    /// University, hospital, public research institute.
    Academic,
    /// Pharmaceutical, biotech or other company.
    NonAcademic,
    /// Blank or ambiguous; never counts as non-academic.
    Unknown,
}

/// Classifies free-text affiliations as academic or industry.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    keywords: KeywordConfig,
}

impl AffiliationClassifier {
    /// Create a classifier from keyword lists.
    #[must_use]
    pub fn new(keywords: KeywordConfig) -> Self {
        Self { keywords: keywords.normalized() }
    }

    /// The keyword lists in use.
    #[must_use]
    pub const fn keywords(&self) -> &KeywordConfig {
        &self.keywords
    }

    /// Classify one affiliation string.
    #[must_use]
    pub fn classify(&self, affiliation: &str) -> AffiliationKind {
        let text = affiliation.trim();
        if text.is_empty() {
            return AffiliationKind::Unknown;
        }

        let lower = text.to_lowercase();
        if self.keywords.academic.iter().any(|k| lower.contains(k.as_str())) {
            return AffiliationKind::Academic;
        }

        let domain = extract_email(text).and_then(|email| email_domain(&email));
        if domain.as_deref().is_some_and(|d| self.is_academic_domain(d)) {
            return AffiliationKind::Academic;
        }

        if self.has_company_marker(&lower) {
            return AffiliationKind::NonAcademic;
        }

        match domain {
            Some(d) if !self.is_generic_domain(&d) => AffiliationKind::NonAcademic,
            _ => AffiliationKind::Unknown,
        }
    }

    /// Classify an author across all of their affiliations.
    ///
    /// One non-academic affiliation is enough; otherwise academic if any
    /// affiliation is academic; otherwise unknown.
    #[must_use]
    pub fn classify_author(&self, author: &AuthorRecord) -> AffiliationKind {
        let mut result = AffiliationKind::Unknown;
        for affiliation in &author.affiliations {
            match self.classify(affiliation) {
                AffiliationKind::NonAcademic => return AffiliationKind::NonAcademic,
                AffiliationKind::Academic => result = AffiliationKind::Academic,
                AffiliationKind::Unknown => {}
            }
        }
        result
    }

    /// Best-effort organization name from an affiliation.
    ///
    /// Picks the first comma/semicolon segment carrying a company marker and
    /// keeps a bare legal suffix next to it (`Genentech, Inc.`). Falls back to
    /// the first segment.
    #[must_use]
    pub fn extract_organization(&self, affiliation: &str) -> Option<String> {
        let segments: Vec<&str> = affiliation
            .split([',', ';'])
            .map(clean_segment)
            .filter(|s| !s.is_empty() && !is_contact_segment(s))
            .collect();

        let marked = segments.iter().position(|s| self.has_company_marker(&s.to_lowercase()));

        match marked {
            Some(i) if i > 0 && self.is_bare_company_word(segments[i]) => {
                Some(format!("{}, {}", segments[i - 1], segments[i]))
            }
            Some(i) => match segments.get(i + 1) {
                Some(next) if self.is_bare_company_word(next) => {
                    Some(format!("{}, {next}", segments[i]))
                }
                _ => Some(segments[i].to_string()),
            },
            None => segments.first().map(|s| (*s).to_string()),
        }
    }

    /// Keep papers with at least one non-academic author.
    #[must_use]
    pub fn filter(&self, papers: &[PaperRecord]) -> Vec<FilteredPaperRecord> {
        crate::filter::filter_non_academic_authors(papers, self)
    }

    fn has_company_marker(&self, lower: &str) -> bool {
        if self.keywords.company_indicators.iter().any(|k| lower.contains(k.as_str())) {
            return true;
        }
        words(lower).any(|w| self.keywords.company_words.iter().any(|k| k == w))
    }

    fn is_bare_company_word(&self, segment: &str) -> bool {
        let lower = segment.to_lowercase();
        let mut tokens = words(&lower).peekable();
        tokens.peek().is_some()
            && tokens.all(|w| self.keywords.company_words.iter().any(|k| k == w))
    }

    fn is_academic_domain(&self, domain: &str) -> bool {
        domain.split('.').any(|label| self.keywords.academic_email_labels.iter().any(|k| k == label))
    }

    fn is_generic_domain(&self, domain: &str) -> bool {
        self.keywords
            .generic_email_domains
            .iter()
            .any(|g| domain == g || domain.strip_suffix(g.as_str()).is_some_and(|p| p.ends_with('.')))
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(KeywordConfig::bundled())
    }
}

/// Find the first e-mail address in free text.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().trim_end_matches('.').to_string())
}

/// Lowercased domain part of an e-mail address.
#[must_use]
pub fn email_domain(email: &str) -> Option<String> {
    email.rsplit_once('@').map(|(_, d)| d.to_lowercase()).filter(|d| !d.is_empty())
}

fn words(lower: &str) -> impl Iterator<Item = &str> {
    lower.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

fn clean_segment(segment: &str) -> &str {
    segment.trim().trim_end_matches('.').trim_end()
}

fn is_contact_segment(segment: &str) -> bool {
    segment.contains('@') || segment.to_lowercase().starts_with("electronic address")
}
