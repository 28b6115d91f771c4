//! PubMed EFetch XML parsing.
//!
//! Handles the `<PubmedArticleSet><PubmedArticle>` structure. Element text is
//! captured with its inline markup children (`<i>`, `<sup>`) and whitespace
//! collapsed.

use chrono::{Month, NaiveDate};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::classify::extract_email;
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorRecord, PaperRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pmid,
    Title,
    Year,
    Month,
    Day,
    MedlineDate,
    LastName,
    ForeName,
    CollectiveName,
    Affiliation,
}

#[derive(Default)]
struct PaperBuilder {
    pmid: String,
    title: String,
    year: String,
    month: String,
    day: String,
    medline_date: String,
    authors: Vec<AuthorRecord>,
}

impl PaperBuilder {
    fn build(self) -> Option<PaperRecord> {
        if self.pmid.is_empty() || self.title.is_empty() {
            return None;
        }

        let corresponding_email = self
            .authors
            .iter()
            .flat_map(|a| a.affiliations.iter())
            .find_map(|affiliation| extract_email(affiliation));

        let publication_date =
            normalize_date(&self.year, &self.month, &self.day, &self.medline_date);

        Some(PaperRecord {
            pmid: self.pmid,
            title: self.title,
            publication_date,
            authors: self.authors,
            corresponding_email,
        })
    }
}

#[derive(Default)]
struct AuthorBuilder {
    last_name: String,
    fore_name: String,
    collective_name: String,
    affiliations: Vec<String>,
}

impl AuthorBuilder {
    fn build(self) -> Option<AuthorRecord> {
        let name = match (self.fore_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.fore_name, self.last_name),
            (true, false) => self.last_name,
            _ if !self.collective_name.is_empty() => self.collective_name,
            _ => return None,
        };
        Some(AuthorRecord { name, affiliations: self.affiliations })
    }
}

/// Parse an EFetch `PubmedArticleSet` document into paper records.
///
/// Articles without a PMID or title are skipped with a warning.
///
/// # Errors
///
/// Returns [`ClientError::Xml`] for malformed or truncated XML.
pub fn parse_efetch_xml(xml: &str) -> ClientResult<Vec<PaperRecord>> {
    let mut reader = Reader::from_str(xml);

    let mut papers = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut paper: Option<PaperBuilder> = None;
    let mut author: Option<AuthorBuilder> = None;
    // Field being captured and the depth of its element
    let mut capture: Option<(Field, usize)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let parent = path.last().map(String::as_str);

                match name.as_str() {
                    "PubmedArticle" => paper = Some(PaperBuilder::default()),
                    "Author" if parent == Some("AuthorList") && paper.is_some() => {
                        author = Some(AuthorBuilder::default());
                    }
                    _ => {}
                }

                if capture.is_none() && paper.is_some() {
                    if let Some(field) = field_for(&name, parent, author.is_some()) {
                        capture = Some((field, path.len() + 1));
                        text.clear();
                    }
                }

                path.push(name);
            }
            Event::End(_) => {
                let depth = path.len();
                let name = path.pop().unwrap_or_default();

                if let Some((field, field_depth)) = capture {
                    if field_depth == depth {
                        capture = None;
                        let value = collapse_whitespace(&text);
                        commit(field, value, paper.as_mut(), author.as_mut());
                    }
                }

                match name.as_str() {
                    "Author" => {
                        if let (Some(done), Some(p)) = (author.take(), paper.as_mut()) {
                            p.authors.extend(done.build());
                        }
                    }
                    "PubmedArticle" => {
                        if let Some(done) = paper.take() {
                            let pmid = done.pmid.clone();
                            match done.build() {
                                Some(record) => papers.push(record),
                                None => warn!(pmid = %pmid, "Skipping article without PMID or title"),
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if capture.is_some() {
                    let unescaped = e.unescape().map_err(|err| ClientError::xml(err.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if capture.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = path.last() {
        return Err(ClientError::xml(format!("document ended inside <{open}>")));
    }

    Ok(papers)
}

fn field_for(name: &str, parent: Option<&str>, in_author: bool) -> Option<Field> {
    let field = match (name, parent) {
        ("PMID", Some("MedlineCitation")) => Field::Pmid,
        ("ArticleTitle", Some("Article")) => Field::Title,
        ("Year", Some("PubDate")) => Field::Year,
        ("Month", Some("PubDate")) => Field::Month,
        ("Day", Some("PubDate")) => Field::Day,
        ("MedlineDate", Some("PubDate")) => Field::MedlineDate,
        ("LastName", Some("Author")) if in_author => Field::LastName,
        ("ForeName", Some("Author")) if in_author => Field::ForeName,
        ("CollectiveName", Some("Author")) if in_author => Field::CollectiveName,
        ("Affiliation", Some("AffiliationInfo")) if in_author => Field::Affiliation,
        _ => return None,
    };
    Some(field)
}

fn commit(
    field: Field,
    value: String,
    paper: Option<&mut PaperBuilder>,
    author: Option<&mut AuthorBuilder>,
) {
    match field {
        Field::LastName | Field::ForeName | Field::CollectiveName | Field::Affiliation => {
            let Some(author) = author else { return };
            match field {
                Field::LastName => author.last_name = value,
                Field::ForeName => author.fore_name = value,
                Field::CollectiveName => author.collective_name = value,
                _ if !value.is_empty() => author.affiliations.push(value),
                _ => {}
            }
        }
        _ => {
            let Some(paper) = paper else { return };
            match field {
                Field::Pmid if paper.pmid.is_empty() => paper.pmid = value,
                Field::Title => paper.title = value,
                Field::Year => paper.year = value,
                Field::Month => paper.month = value,
                Field::Day => paper.day = value,
                Field::MedlineDate => paper.medline_date = value,
                _ => {}
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a PubMed `PubDate` to `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
///
/// Falls back to the verbatim `MedlineDate` when there is no usable year.
fn normalize_date(year: &str, month: &str, day: &str, medline_date: &str) -> String {
    let Ok(y) = year.parse::<i32>() else {
        return medline_date.to_string();
    };
    let Some(m) = parse_month(month) else {
        return format!("{y:04}");
    };

    day.parse::<u32>()
        .ok()
        .and_then(|d| NaiveDate::from_ymd_opt(y, m, d))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{y:04}-{m:02}"))
}

fn parse_month(month: &str) -> Option<u32> {
    let month = month.trim();
    if let Ok(n) = month.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    month.parse::<Month>().ok().map(|m| m.number_from_month())
}
