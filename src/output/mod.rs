//! Output stage: the per-run bundle directory and the CSV report
//!
//! Every run writes into its own directory named from the topic and a unix
//! timestamp. The directory collects any downloaded PDFs and exactly one
//! `data.csv` report, and is what the notifier archives for email delivery.

mod csv_report;

pub use csv_report::{write_report, CSV_FILE_NAME, CSV_HEADER};

use std::path::{Path, PathBuf};

use crate::Result;

/// Per-run output directory
#[derive(Debug, Clone)]
pub struct OutputBundle {
    dir: PathBuf,
}

impl OutputBundle {
    /// Creates the bundle directory `<base>/<topic_with_underscores>_<unix_ts>/`
    ///
    /// # Errors
    ///
    /// Directory creation failure is fatal.
    pub fn create(base: &Path, topic: &str) -> Result<Self> {
        let name = format!(
            "{}_{}",
            topic.replace(' ', "_"),
            chrono::Utc::now().timestamp()
        );
        let dir = base.join(name);

        std::fs::create_dir(&dir)?;
        tracing::info!("Output directory: {}", dir.display());

        Ok(Self { dir })
    }

    /// Opens an existing directory as a bundle (used by tests and the notifier)
    pub fn from_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the bundle directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the CSV report inside the bundle
    pub fn report_path(&self) -> PathBuf {
        self.dir.join(CSV_FILE_NAME)
    }
}
