//! Search stage: query construction and the search API client
//!
//! This module builds the single GET request sent to the paper search
//! endpoint and projects the JSON response into [`PaperRecord`]s, keeping
//! only open-access results.
//!
//! [`PaperRecord`]: crate::model::PaperRecord

mod client;
mod query;

pub use client::{default_options, SearchClient};
pub use query::{build_search_url, FilterValue, QueryOptions};
