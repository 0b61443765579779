//! Search API client
//!
//! Issues the single GET request to the paper search endpoint, decodes the
//! JSON body, and projects every open-access item into a [`PaperRecord`].
//! Network failures, non-2xx statuses, and malformed or incomplete JSON all
//! propagate as fatal errors; there is no retry and no partial result.

use serde::Deserialize;

use crate::config::{SearchConfig, SEARCH_FIELDS};
use crate::model::PaperRecord;
use crate::search::query::{build_search_url, QueryOptions};
use crate::{HarvestError, Result};

/// Raw search response envelope
#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<ApiPaper>,
}

/// One item of the search response
///
/// Fields without a default are required; a response item missing one of them
/// fails the whole run, matching the upstream API's documented guarantees.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPaper {
    title: String,
    url: String,
    #[serde(default)]
    r#abstract: Option<String>,
    citation_count: u64,
    is_open_access: bool,
    authors: Vec<ApiAuthor>,
}

#[derive(Debug, Deserialize)]
struct ApiAuthor {
    name: String,
}

/// Client for the paper search endpoint
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

/// Returns the default filter option bag sent with every search
///
/// Carries the `fields` projection listing the attributes each result must
/// include.
pub fn default_options() -> QueryOptions {
    QueryOptions::new().set_list("fields", SEARCH_FIELDS.to_vec())
}

impl SearchClient {
    /// Creates a search client using the given HTTP client and configuration
    pub fn new(http: reqwest::Client, config: SearchConfig) -> Self {
        Self { http, config }
    }

    /// Searches for open-access papers on a topic
    ///
    /// Builds the request URL from the topic, page count, and option bag,
    /// issues one GET, and returns a [`PaperRecord`] for every item flagged
    /// `isOpenAccess`. Response order is preserved.
    ///
    /// # Errors
    ///
    /// * [`HarvestError::Http`] - network failure
    /// * [`HarvestError::ApiStatus`] - non-2xx response
    /// * [`HarvestError::ApiDecode`] - malformed JSON or missing fields
    pub async fn search(
        &self,
        topic: &str,
        pages: u32,
        options: &QueryOptions,
    ) -> Result<Vec<PaperRecord>> {
        let url = build_search_url(
            &self.config.base_url,
            topic,
            pages,
            self.config.page_size,
            options,
        );

        tracing::debug!("Search request: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(|source| HarvestError::Http {
            url: url.clone(),
            source,
        })?;

        let parsed: ApiResponse = serde_json::from_str(&body)?;

        let records = parsed
            .data
            .into_iter()
            .filter(|paper| paper.is_open_access)
            .map(PaperRecord::from)
            .collect::<Vec<_>>();

        tracing::info!("Search returned {} open-access records", records.len());

        Ok(records)
    }
}

impl From<ApiPaper> for PaperRecord {
    fn from(paper: ApiPaper) -> Self {
        let authors = paper
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: paper.title,
            authors,
            description: paper.r#abstract.unwrap_or_default(),
            citations: paper.citation_count,
            // Landing-page URL; replaced with the canonical link during
            // enrichment.
            source: paper.url,
            pdf: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<PaperRecord>> {
        let parsed: ApiResponse = serde_json::from_str(body)?;
        Ok(parsed
            .data
            .into_iter()
            .filter(|paper| paper.is_open_access)
            .map(PaperRecord::from)
            .collect())
    }

    #[test]
    fn test_open_access_filtering() {
        let body = r#"{"data": [
            {"title": "A", "url": "https://example.org/a", "abstract": "first",
             "citationCount": 3, "isOpenAccess": true,
             "authors": [{"name": "Ada Lovelace"}]},
            {"title": "B", "url": "https://example.org/b", "abstract": "second",
             "citationCount": 1, "isOpenAccess": false,
             "authors": [{"name": "Charles Babbage"}]},
            {"title": "C", "url": "https://example.org/c", "abstract": null,
             "citationCount": 0, "isOpenAccess": true,
             "authors": [{"name": "Grace Hopper"}, {"name": "Alan Turing"}]}
        ]}"#;

        let records = parse(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[1].title, "C");
    }

    #[test]
    fn test_authors_joined_with_comma_space() {
        let body = r#"{"data": [
            {"title": "C", "url": "https://example.org/c", "abstract": null,
             "citationCount": 0, "isOpenAccess": true,
             "authors": [{"name": "Grace Hopper"}, {"name": "Alan Turing"}]}
        ]}"#;

        let records = parse(body).unwrap();
        assert_eq!(records[0].authors, "Grace Hopper, Alan Turing");
    }

    #[test]
    fn test_null_abstract_becomes_empty_string() {
        let body = r#"{"data": [
            {"title": "C", "url": "https://example.org/c", "abstract": null,
             "citationCount": 0, "isOpenAccess": true,
             "authors": [{"name": "Grace Hopper"}]}
        ]}"#;

        let records = parse(body).unwrap();
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        // No citationCount
        let body = r#"{"data": [
            {"title": "A", "url": "https://example.org/a", "abstract": "x",
             "isOpenAccess": true, "authors": []}
        ]}"#;

        assert!(matches!(parse(body), Err(HarvestError::ApiDecode(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse("not json at all"),
            Err(HarvestError::ApiDecode(_))
        ));
    }

    #[test]
    fn test_record_starts_with_landing_page_source_and_empty_pdf() {
        let body = r#"{"data": [
            {"title": "A", "url": "https://example.org/a", "abstract": "x",
             "citationCount": 2, "isOpenAccess": true,
             "authors": [{"name": "Ada Lovelace"}]}
        ]}"#;

        let records = parse(body).unwrap();
        assert_eq!(records[0].source, "https://example.org/a");
        assert_eq!(records[0].pdf, "");
    }

    #[test]
    fn test_default_options_carry_field_projection() {
        let options = default_options();
        let (name, value) = options.present().next().unwrap();
        assert_eq!(name, "fields");
        assert_eq!(
            value,
            "title,authors,url,abstract,citationCount,fieldsOfStudy,isOpenAccess"
        );
    }
}
