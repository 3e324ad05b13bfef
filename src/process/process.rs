//! This module walks a music directory and feeds every tagged audio file into
//! the catalog.
//!
//! A single bad file never stops the walk: read failures and malformed tags
//! are logged with the file path, counted in the [`ScanSummary`], and skipped.

use crate::foundation::catalog::{ingest, Catalog, CatalogMode, IngestOutcome, TrackRecord};
use crate::tags::TagReader;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Recognized audio file extensions, compared case-insensitively.
pub const AUDIO_EXTENSIONS: [&str; 7] = ["mp3", "flac", "ogg", "m4a", "wav", "wma", "aac"];

/// Counters for one walk over the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Audio files found by extension.
    pub visited: usize,
    /// Files the tag reader could parse.
    pub parsed: usize,
    pub added: usize,
    pub duplicates: usize,
    pub skipped_by_letter: usize,
    /// Files rejected by the reader or for missing tags.
    pub failed: usize,
}

/// Process the root directory of the music collection.
///
/// Every audio file below `root` is read with `reader` and folded into
/// `catalog`, in path order. The progress bar is only drawn when
/// `show_progress` is set.
///
/// # Arguments
///
/// * `root` - The path to the root directory of the music collection.
/// * `reader` - Tag reader used for each audio file.
/// * `catalog` - The catalog being built.
/// * `mode` - Whether to ingest everything or one artist per starting letter.
/// * `show_progress` - Draw a progress bar while walking.
///
pub fn process_root<R: TagReader + ?Sized>(
    root: &Path,
    reader: &R,
    catalog: &mut Catalog,
    mode: CatalogMode,
    show_progress: bool,
) -> io::Result<ScanSummary> {
    let files = collect_audio_files(root)?;
    info!("Found {} audio files under {}", files.len(), root.display());

    let progress = if show_progress {
        create_progress_bar(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut summary = ScanSummary {
        visited: files.len(),
        ..Default::default()
    };

    for path in &files {
        progress.suspend(|| process_file(path, reader, catalog, mode, &mut summary));
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(summary)
}

/// Reads and ingests a single file, recording the result in `summary`.
fn process_file<R: TagReader + ?Sized>(
    path: &Path,
    reader: &R,
    catalog: &mut Catalog,
    mode: CatalogMode,
    summary: &mut ScanSummary,
) {
    let tags = match reader.read(path) {
        Ok(tags) => tags,
        Err(e) => {
            error!("{}: {}", path.display(), e);
            summary.failed += 1;
            return;
        }
    };
    summary.parsed += 1;

    let record = match TrackRecord::from_tags(path, tags) {
        Ok(record) => record,
        Err(e) => {
            error!("Error parsing {}: {}", path.display(), e);
            summary.failed += 1;
            return;
        }
    };

    match ingest(catalog, record, mode) {
        IngestOutcome::Added => summary.added += 1,
        IngestOutcome::Duplicate => {
            debug!("Duplicate song skipped: {}", path.display());
            summary.duplicates += 1;
        }
        IngestOutcome::SkippedByLetter => {
            debug!("Artist letter already taken, skipped: {}", path.display());
            summary.skipped_by_letter += 1;
        }
    }
}

/// Recursively collect every audio file below `root`, sorted by path.
///
/// Entries that cannot be read are logged and skipped; only a missing or
/// unreadable root is an error.
pub fn collect_audio_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Library root is not a directory: {}", root.display()),
        ));
    }

    let files = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to read directory entry. Details: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_audio_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    Ok(files)
}

/// Check if a file is an audio file based on its extension.
///
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let progress = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{elapsed_precise} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}
