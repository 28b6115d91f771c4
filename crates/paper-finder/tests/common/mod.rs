//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use serde_json::json;
use wiremock::MockServer;

use paper_finder::client::PubMedClient;
use paper_finder::config::Config;

/// Create a client pointing at the mock server.
pub fn setup_client(mock_server: &MockServer) -> PubMedClient {
    PubMedClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

/// ESearch JSON body for the given PMIDs.
pub fn esearch_json(ids: &[&str]) -> serde_json::Value {
    json!({
        "header": {"type": "esearch", "version": "0.3"},
        "esearchresult": {
            "count": ids.len().to_string(),
            "retmax": ids.len().to_string(),
            "retstart": "0",
            "idlist": ids,
            "translationset": [],
            "querytranslation": "test"
        }
    })
}

/// One `<PubmedArticle>` with the given authors as `(fore, last, affiliation)`.
pub fn article_xml(pmid: &str, title: &str, authors: &[(&str, &str, Option<&str>)]) -> String {
    let mut author_xml = String::new();
    for (fore, last, affiliation) in authors {
        author_xml.push_str(&format!(
            "<Author ValidYN=\"Y\"><LastName>{last}</LastName><ForeName>{fore}</ForeName>"
        ));
        if let Some(affiliation) = affiliation {
            author_xml.push_str(&format!(
                "<AffiliationInfo><Affiliation>{affiliation}</Affiliation></AffiliationInfo>"
            ));
        }
        author_xml.push_str("</Author>");
    }

    format!(
        "<PubmedArticle><MedlineCitation Status=\"MEDLINE\" Owner=\"NLM\">\
         <PMID Version=\"1\">{pmid}</PMID>\
         <Article PubModel=\"Print-Electronic\">\
         <Journal><JournalIssue><PubDate><Year>2024</Year><Month>Mar</Month></PubDate></JournalIssue></Journal>\
         <ArticleTitle>{title}</ArticleTitle>\
         <AuthorList CompleteYN=\"Y\">{author_xml}</AuthorList>\
         </Article></MedlineCitation></PubmedArticle>"
    )
}

/// Wrap articles in a `PubmedArticleSet` document.
pub fn article_set(articles: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\n<PubmedArticleSet>{}</PubmedArticleSet>",
        articles.concat()
    )
}
