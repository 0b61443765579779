//! In-memory record types shared across the pipeline stages

/// One open-access paper as it flows through the pipeline
///
/// Created by the search client, mutated in place by the detail enricher
/// (`source` and `pdf` are overwritten with scraped links), and read-only
/// afterward. Records carry no identity beyond their position in the ordered
/// sequence; CSV rows are emitted in the same order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    /// Paper title
    pub title: String,

    /// Author names joined with ", "
    pub authors: String,

    /// Abstract text (empty when the API reports none)
    pub description: String,

    /// Citation count reported by the search API
    pub citations: u64,

    /// Landing-page URL at first, replaced by the canonical source link
    /// during enrichment (empty if none was found)
    pub source: String,

    /// Direct PDF link discovered during enrichment (empty if none)
    pub pdf: String,
}
