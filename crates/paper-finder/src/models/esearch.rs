//! ESearch JSON response (`retmode=json`).

use serde::Deserialize;

/// Top-level ESearch response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Search result block.
    #[serde(default)]
    pub esearchresult: SearchResult,

    /// Service-level error (e.g. invalid API key).
    #[serde(default)]
    pub error: Option<String>,
}

/// The `esearchresult` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    /// Total hit count, as a decimal string.
    #[serde(default)]
    pub count: Option<String>,

    /// PMIDs for this page of results.
    #[serde(default)]
    pub idlist: Vec<String>,

    /// Query-level error reported by ESearch.
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Get the first error reported anywhere in the response.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.esearchresult.error.as_deref())
    }

    /// Total number of hits, 0 if absent or unparseable.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.esearchresult.count.as_deref().and_then(|c| c.parse().ok()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_idlist() {
        let json = r#"{"header":{"type":"esearch","version":"0.3"},
            "esearchresult":{"count":"2","retmax":"2","retstart":"0","idlist":["38000001","38000002"]}}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.esearchresult.idlist, vec!["38000001", "38000002"]);
        assert_eq!(resp.total(), 2);
        assert!(resp.error_message().is_none());
    }

    #[test]
    fn test_parse_error_field() {
        let json = r#"{"esearchresult":{"ERROR":"Empty term and query_key - nothing todo"}}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_message(), Some("Empty term and query_key - nothing todo"));
        assert!(resp.esearchresult.idlist.is_empty());
    }

    #[test]
    fn test_parse_service_error() {
        let json = r#"{"error":"API key invalid","api-key":"x","type":"invalid"}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_message(), Some("API key invalid"));
    }
}
