//! Property-based tests for the classifier, filter and CSV output.

use proptest::prelude::*;

use paper_finder::formatters::{ensure_csv_extension, write_csv};
use paper_finder::models::{AuthorRecord, FilteredPaperRecord, PaperRecord};
use paper_finder::{AffiliationClassifier, AffiliationKind, filter_non_academic_authors};

/// Generate arbitrary filtered records; names avoid the "; " join separator.
fn arb_record() -> impl Strategy<Value = FilteredPaperRecord> {
    (
        "[0-9]{1,9}",
        "[A-Za-z0-9 ,.\"'\n-]{1,120}",
        proptest::collection::vec("[A-Za-z ,.'-]{1,40}", 1..5),
        proptest::option::of("[a-z]{1,10}@[a-z]{1,10}\\.com"),
    )
        .prop_map(|(pmid, title, names, email)| FilteredPaperRecord {
            paper: PaperRecord {
                pmid,
                title,
                publication_date: "2024".to_string(),
                authors: vec![],
                corresponding_email: email,
            },
            non_academic_authors: names
                .into_iter()
                .map(|n| AuthorRecord::new(n.trim().to_string(), Some("Acme Pharma Ltd")))
                .filter(|a| !a.name.is_empty())
                .collect(),
            companies: vec!["Acme Pharma Ltd".to_string()],
        })
}

proptest! {
    /// Classification never panics on arbitrary text.
    #[test]
    fn classify_never_panics(text in ".*") {
        let classifier = AffiliationClassifier::default();
        let _ = classifier.classify(&text);
        let _ = classifier.extract_organization(&text);
    }

    /// Adding an academic keyword always wins over company markers.
    #[test]
    fn academic_keyword_dominates(prefix in "[A-Za-z ]{0,30}", suffix in "[A-Za-z ]{0,30}") {
        let classifier = AffiliationClassifier::default();
        let text = format!("{prefix} Pharma Inc, University of Somewhere {suffix}");
        prop_assert_eq!(classifier.classify(&text), AffiliationKind::Academic);
    }

    /// Authors without affiliations never make a paper pass the filter.
    #[test]
    fn missing_affiliations_never_match(names in proptest::collection::vec("[A-Za-z ]{1,20}", 0..6)) {
        let paper = PaperRecord {
            pmid: "1".to_string(),
            title: "t".to_string(),
            authors: names.into_iter().map(|n| AuthorRecord::new(n, None)).collect(),
            ..Default::default()
        };
        let filtered = filter_non_academic_authors(&[paper], &AffiliationClassifier::default());
        prop_assert!(filtered.is_empty());
    }

    /// CSV output parses back to the same identifiers, titles and author names.
    #[test]
    fn csv_round_trip(records in proptest::collection::vec(arb_record(), 0..8)) {
        let mut out = Vec::new();
        write_csv(&records, &mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        prop_assert_eq!(rows.len(), records.len());

        for (row, record) in rows.iter().zip(&records) {
            prop_assert_eq!(&row[0], record.paper.pmid.as_str());
            prop_assert_eq!(&row[1], record.paper.title.as_str());
            let names: Vec<&str> = if row[3].is_empty() { vec![] } else { row[3].split("; ").collect() };
            let expected: Vec<&str> = record.non_academic_authors.iter().map(|a| a.name.as_str()).collect();
            prop_assert_eq!(names, expected);
        }
    }

    /// `.csv` is appended exactly once.
    #[test]
    fn csv_extension_appended_once(stem in "(out/)?\\.?[A-Za-z0-9_-]{0,20}") {
        let once = ensure_csv_extension(&stem);
        let twice = ensure_csv_extension(once.to_str().unwrap());
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.to_str().unwrap().ends_with(".csv"));
        prop_assert!(!once.to_str().unwrap().ends_with(".csv.csv"));
    }
}
