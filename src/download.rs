//! PDF download stage
//!
//! Streams each record's PDF link to `<bundle>/<sanitized title>.pdf`.
//! Downloads are strictly sequential, and a failed download is reported and
//! skipped rather than aborting the batch.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::model::PaperRecord;
use crate::DownloadError;

/// Longest file stem kept after sanitizing a title
const MAX_STEM_LEN: usize = 150;

/// Outcome of a single record's download attempt
#[derive(Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// PDF saved to the given path
    Saved(PathBuf),

    /// Record has no PDF link; nothing to do
    NoLink,
}

/// Saved/skipped/failed counts for a download batch
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Derives a safe file name stem from a paper title
///
/// Alphanumeric characters, spaces, and `-` are kept; everything else becomes
/// `_`. Whitespace runs collapse to a single `_`, and overlong stems are
/// truncated at a character boundary.
pub fn sanitize_title(title: &str) -> String {
    let sanitized = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    if sanitized.is_empty() {
        return "untitled".to_string();
    }

    sanitized.chars().take(MAX_STEM_LEN).collect()
}

/// Downloads one record's PDF into the bundle directory
///
/// A record without a PDF link yields [`DownloadOutcome::NoLink`] — a no-op,
/// not a failure. Otherwise the body is streamed to disk chunk by chunk.
///
/// # Errors
///
/// * [`DownloadError::Network`] - request or stream failure
/// * [`DownloadError::Status`] - non-200 response
/// * [`DownloadError::Io`] - file creation or write failure
pub async fn download_pdf(
    client: &reqwest::Client,
    dir: &Path,
    record: &PaperRecord,
) -> Result<DownloadOutcome, DownloadError> {
    if record.pdf.is_empty() {
        tracing::info!("No PDF link for \"{}\", skipping download", record.title);
        return Ok(DownloadOutcome::NoLink);
    }

    let url = record.pdf.clone();

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| DownloadError::Network {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(DownloadError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let path = dir.join(format!("{}.pdf", sanitize_title(&record.title)));

    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|source| DownloadError::Network {
            url: url.clone(),
            source,
        })?;

        file.write_all(&chunk)
            .await
            .map_err(|source| DownloadError::Io {
                path: path.clone(),
                source,
            })?;
    }

    file.flush().await.map_err(|source| DownloadError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(DownloadOutcome::Saved(path))
}

/// Downloads PDFs for every record in the batch
///
/// Per-record failures are logged with the record's title and the batch
/// continues; only the final counts distinguish how many records actually
/// produced a file.
pub async fn download_all(
    client: &reqwest::Client,
    dir: &Path,
    records: &[PaperRecord],
) -> DownloadReport {
    let mut report = DownloadReport::default();

    for record in records {
        match download_pdf(client, dir, record).await {
            Ok(DownloadOutcome::Saved(path)) => {
                tracing::info!("Saved {}", path.display());
                report.saved += 1;
            }
            Ok(DownloadOutcome::NoLink) => {
                report.skipped += 1;
            }
            Err(error) => {
                tracing::warn!("Cannot download pdf for \"{}\": {}", record.title, error);
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        "Downloads finished: {} saved, {} skipped, {} failed",
        report.saved,
        report.skipped,
        report.failed
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, pdf: &str) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            authors: "Ada Lovelace".to_string(),
            description: String::new(),
            citations: 0,
            source: String::new(),
            pdf: pdf.to_string(),
        }
    }

    #[test]
    fn test_sanitize_plain_title() {
        assert_eq!(sanitize_title("Graph Neural Networks"), "Graph_Neural_Networks");
    }

    #[test]
    fn test_sanitize_path_separators() {
        assert_eq!(sanitize_title("TCP/IP: a survey"), "TCP_IP__a_survey");
    }

    #[test]
    fn test_sanitize_keeps_hyphens() {
        assert_eq!(sanitize_title("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn test_sanitize_empty_title() {
        assert_eq!(sanitize_title(""), "untitled");
        assert_eq!(sanitize_title("   "), "untitled");
    }

    #[test]
    fn test_sanitize_truncates_long_titles() {
        let long = "a".repeat(400);
        assert_eq!(sanitize_title(&long).chars().count(), MAX_STEM_LEN);
    }

    #[tokio::test]
    async fn test_empty_pdf_link_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();

        let outcome = download_pdf(&client, dir.path(), &record("No PDF", ""))
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::NoLink);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_batch_counts_no_link_records_as_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let client = reqwest::Client::new();
        let records = vec![record("A", ""), record("B", "")];

        let report = download_all(&client, dir.path(), &records).await;

        assert_eq!(
            report,
            DownloadReport {
                saved: 0,
                skipped: 2,
                failed: 0
            }
        );
    }
}
