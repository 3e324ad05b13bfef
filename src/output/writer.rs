use crate::foundation::catalog::Catalog;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the full manifest, pretty-printed, overwriting `path`.
pub fn write_full(catalog: &Catalog, path: &Path) -> Result<()> {
    write_json(catalog, path, true)
}

/// Writes the compact manifest with no extra whitespace, overwriting `path`.
pub fn write_compact(catalog: &Catalog, path: &Path) -> Result<()> {
    write_json(catalog, path, false)
}

fn write_json(catalog: &Catalog, path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, catalog)
    } else {
        serde_json::to_writer(&mut writer, catalog)
    }
    .with_context(|| format!("Failed to serialize manifest to {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
