//! # The Main Entry Point of Cataloging
//!
//! This module drives one run of the tool, from the directory walk to the
//! two manifest files. A run always recomputes the catalog from scratch.
//!
//! # Steps:
//! 1. Walks the library root and ingests every tagged audio file
//! 2. Backfills missing album track totals
//! 3. Writes the full manifest
//! 4. Strips fields the compact manifest does not carry
//! 5. Shuffles the artists and optionally drops a leading fraction
//! 6. Writes the compact manifest

use crate::configuration::Settings;
use crate::foundation::catalog::{Catalog, CatalogMode};
use crate::process::{self, ScanSummary};
use crate::tags::{LoftyTagReader, TagReader};
use crate::{output, post_process};
use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

pub fn run(settings: &Settings) -> Result<ScanSummary> {
    run_with_reader(settings, &LoftyTagReader::new(), &mut rand::rng())
}

/// Runs the whole pipeline with the given tag reader and shuffle source.
pub fn run_with_reader<T, R>(settings: &Settings, reader: &T, rng: &mut R) -> Result<ScanSummary>
where
    T: TagReader + ?Sized,
    R: Rng + ?Sized,
{
    let mode = if settings.alphabetical {
        CatalogMode::Alphabetical
    } else {
        CatalogMode::Full
    };
    let paths = settings.output_paths();

    info!("Walking music folder {}...", settings.library_root.display());
    let mut catalog = Catalog::new();
    let summary = process::process_root(
        &settings.library_root,
        reader,
        &mut catalog,
        mode,
        !settings.silent,
    )
    .with_context(|| {
        format!(
            "Failed to process the root directory {}",
            settings.library_root.display()
        )
    })?;
    info!(
        "Scanned {} files: {} added, {} duplicates, {} skipped by letter, {} failed",
        summary.visited,
        summary.added,
        summary.duplicates,
        summary.skipped_by_letter,
        summary.failed
    );

    let filled = post_process::backfill_total_tracks(&mut catalog);
    info!("Backfilled track totals on {} albums", filled);

    output::write_full(&catalog, &paths.full)?;
    log_written(&catalog, &paths.full.display().to_string());

    info!("Post-processing...");
    post_process::strip_compact_fields(&mut catalog);

    info!("Shuffling...");
    let dropped = post_process::shuffle_and_truncate(&mut catalog, settings.denom, rng);
    if let Some(denom) = settings.denom {
        info!("Chopped off the first 1/{} of it ({} artists)", denom, dropped);
    }

    output::write_compact(&catalog, &paths.compact)?;
    log_written(&catalog, &paths.compact.display().to_string());

    Ok(summary)
}

fn log_written(catalog: &Catalog, path: &str) {
    info!(
        "Wrote {} ({} artists, {} albums, {} songs)",
        path,
        catalog.len(),
        catalog.album_count(),
        catalog.song_count()
    );
}
