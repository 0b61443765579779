//! Bundle archiving
//!
//! Packs the flat bundle directory (CSV report plus any PDFs) into a single
//! zip file for email delivery.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::Result;

/// Archives every regular file in `dir` into a zip at `zip_path`
///
/// The bundle directory is flat, so entries are stored by file name without
/// any directory prefix. Subdirectories, if any appear, are skipped.
///
/// # Errors
///
/// Any I/O or zip encoding failure is fatal.
pub fn archive_bundle(dir: &Path, zip_path: &Path) -> Result<()> {
    let file = File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = std::fs::read_dir(dir)?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();

    // Stable archive layout regardless of directory iteration order
    entries.sort();

    for path in &entries {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        zip.start_file(name, options)?;
        let mut reader = File::open(path)?;
        io::copy(&mut reader, &mut zip)?;
    }

    let mut file = zip.finish()?;
    file.flush()?;

    tracing::info!(
        "Archived {} files into {}",
        entries.len(),
        zip_path.display()
    );

    Ok(())
}
