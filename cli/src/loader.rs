//! CSV loading into the core dataset model

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tabdiff_core::{Dataset, Row};

/// Read a CSV file into a [`Dataset`].
///
/// Records are read flexibly: a row shorter than the header list simply
/// lacks those columns (the engine reads them as empty), and extra
/// fields beyond the headers are dropped. No trimming happens here; the
/// engine applies its own normalization policy.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read headers from '{}'", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to read record from '{}'", path.display()))?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    log::debug!("loaded '{source}': {} rows, {} columns", rows.len(), headers.len());
    Ok(Dataset::new(source, headers, rows))
}
