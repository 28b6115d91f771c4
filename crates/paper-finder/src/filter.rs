//! Paper filter: keep papers with at least one non-academic author.

use tracing::{debug, info, instrument};

use crate::classify::{AffiliationClassifier, AffiliationKind};
use crate::models::{FilteredPaperRecord, PaperRecord};

/// Keep the papers that list at least one non-academic author.
///
/// Each retained paper carries the non-academic authors and the organization
/// names extracted from their non-academic affiliations. Authors without an
/// affiliation never cause inclusion. Input order is preserved.
#[instrument(skip_all, fields(papers = papers.len(), keywords_version = classifier.keywords().version))]
pub fn filter_non_academic_authors(
    papers: &[PaperRecord],
    classifier: &AffiliationClassifier,
) -> Vec<FilteredPaperRecord> {
    let filtered: Vec<FilteredPaperRecord> =
        papers.iter().filter_map(|paper| filter_paper(paper, classifier)).collect();

    info!(total = papers.len(), kept = filtered.len(), "Filtered papers by affiliation");
    filtered
}

fn filter_paper(paper: &PaperRecord, classifier: &AffiliationClassifier) -> Option<FilteredPaperRecord> {
    let mut non_academic_authors = Vec::new();
    let mut companies: Vec<String> = Vec::new();

    for author in &paper.authors {
        if classifier.classify_author(author) != AffiliationKind::NonAcademic {
            continue;
        }

        // Organization names come from the industry affiliations only
        for affiliation in &author.affiliations {
            if classifier.classify(affiliation) != AffiliationKind::NonAcademic {
                continue;
            }
            if let Some(org) = classifier.extract_organization(affiliation) {
                if !companies.iter().any(|c| c.eq_ignore_ascii_case(&org)) {
                    companies.push(org);
                }
            }
        }

        non_academic_authors.push(author.clone());
    }

    if non_academic_authors.is_empty() {
        debug!(pmid = %paper.pmid, authors = paper.authors.len(), "No non-academic authors");
        return None;
    }

    debug!(pmid = %paper.pmid, ?companies, "Paper has non-academic authors");
    Some(FilteredPaperRecord { paper: paper.clone(), non_academic_authors, companies })
}
