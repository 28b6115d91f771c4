//! Paper and author records built from PubMed EFetch XML.

/// A PubMed article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRecord {
    /// PubMed identifier.
    pub pmid: String,

    /// Article title.
    pub title: String,

    /// Normalized publication date (`YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or the
    /// verbatim MedlineDate). Empty when PubMed has none.
    pub publication_date: String,

    /// Authors in byline order.
    pub authors: Vec<AuthorRecord>,

    /// First e-mail address found in the author affiliations.
    pub corresponding_email: Option<String>,
}

/// An author and their free-text affiliations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Display name (`ForeName LastName` or collective name).
    pub name: String,

    /// Affiliation strings, one per `AffiliationInfo` block.
    pub affiliations: Vec<String>,
}

impl AuthorRecord {
    /// Create an author with a single affiliation.
    #[must_use]
    pub fn new(name: impl Into<String>, affiliation: Option<&str>) -> Self {
        Self {
            name: name.into(),
            affiliations: affiliation.map(|a| vec![a.to_string()]).unwrap_or_default(),
        }
    }
}

/// A paper retained by the non-academic filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredPaperRecord {
    /// The source paper.
    pub paper: PaperRecord,

    /// Authors with at least one non-academic affiliation.
    pub non_academic_authors: Vec<AuthorRecord>,

    /// Organization names extracted from those affiliations, first-seen order.
    pub companies: Vec<String>,
}

impl FilteredPaperRecord {
    /// Non-academic author names joined with `"; "`.
    #[must_use]
    pub fn author_names(&self) -> String {
        join_names(&self.non_academic_authors)
    }

    /// Company names joined with `"; "`.
    #[must_use]
    pub fn company_names(&self) -> String {
        self.companies.join("; ")
    }

    /// Corresponding author e-mail or an empty string.
    #[must_use]
    pub fn email_or_default(&self) -> &str {
        self.paper.corresponding_email.as_deref().unwrap_or("")
    }
}

fn join_names(authors: &[AuthorRecord]) -> String {
    authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_new() {
        assert!(AuthorRecord::new("Jane Doe", None).affiliations.is_empty());
        assert_eq!(
            AuthorRecord::new("Jane Doe", Some("Pfizer Inc")).affiliations,
            vec!["Pfizer Inc"]
        );
    }

    #[test]
    fn test_filtered_joins() {
        let record = FilteredPaperRecord {
            paper: PaperRecord {
                pmid: "1".into(),
                title: "T".into(),
                ..Default::default()
            },
            non_academic_authors: vec![
                AuthorRecord::new("A One", Some("Pfizer Inc")),
                AuthorRecord::new("B Two", Some("Genentech, Inc.")),
            ],
            companies: vec!["Pfizer Inc".into(), "Genentech, Inc".into()],
        };
        assert_eq!(record.author_names(), "A One; B Two");
        assert_eq!(record.company_names(), "Pfizer Inc; Genentech, Inc");
        assert_eq!(record.email_or_default(), "");
    }
}
