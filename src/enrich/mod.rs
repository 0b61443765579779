//! Detail enrichment stage
//!
//! For each record, fetches the HTML at its landing-page URL and replaces the
//! `source` and `pdf` fields with the links scraped from the page. One GET
//! per record, strictly sequential; responses are not cached across records
//! even when URLs repeat.

mod parser;

pub use parser::{extract_paper_links, PaperLinks};

use crate::model::PaperRecord;
use crate::{HarvestError, Result};

/// Enriches every record with scraped source and PDF links
///
/// Fetch failures propagate as fatal errors. A page with no matching anchors
/// degrades silently: both link fields become empty strings and the record
/// stays in the sequence.
///
/// # Errors
///
/// * [`HarvestError::Http`] - a landing-page fetch failed
pub async fn enrich_records(client: &reqwest::Client, records: &mut [PaperRecord]) -> Result<()> {
    for record in records.iter_mut() {
        let url = record.source.clone();

        tracing::debug!("Fetching landing page: {}", url);

        let html = client
            .get(&url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.clone(),
                source,
            })?
            .text()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.clone(),
                source,
            })?;

        let links = extract_paper_links(&html);

        if links.source.is_empty() && links.pdf.is_empty() {
            tracing::debug!("No paper links found on {}", url);
        }

        record.source = links.source;
        record.pdf = links.pdf;
    }

    Ok(())
}
