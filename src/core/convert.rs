use crate::domain::model::{ConversionStats, KeyMapping};
use crate::utils::error::{KeymapError, Result};
use csv::ReaderBuilder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads the CSV at `path` into a mapping of column 2 → column 1.
///
/// Every row is data (no header). Rows with fewer than two fields are
/// skipped; a later row with the same key replaces the earlier value.
/// A leading UTF-8 BOM is dropped. Any failure to open or read the file
/// yields `KeymapError::ReadError` and nothing built so far is returned.
pub fn convert(path: impl AsRef<Path>) -> Result<KeyMapping> {
    convert_with_stats(path).map(|(mapping, _)| mapping)
}

pub fn convert_with_stats(path: impl AsRef<Path>) -> Result<(KeyMapping, ConversionStats)> {
    let path = path.as_ref();
    tracing::debug!("Reading CSV file: {}", path.display());

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| KeymapError::read(path, e))?;

    collect_rows(reader).map_err(|e| KeymapError::read(path, e))
}

/// Same as [`convert`] but over any reader; errors are the raw CSV errors.
pub fn convert_reader<R: Read>(
    input: R,
) -> std::result::Result<(KeyMapping, ConversionStats), csv::Error> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(
    mut reader: csv::Reader<R>,
) -> std::result::Result<(KeyMapping, ConversionStats), csv::Error> {
    let mut mapping = KeyMapping::new();
    let mut stats = ConversionStats::default();

    for record in reader.records() {
        let record = record?;
        stats.rows_read += 1;

        match (record.get(0), record.get(1)) {
            (Some(value), Some(key)) => {
                if mapping.insert(key.to_string(), value.to_string()).is_some() {
                    stats.keys_overwritten += 1;
                }
            }
            _ => stats.rows_skipped += 1,
        }
    }

    if stats.rows_skipped > 0 {
        tracing::debug!("Skipped {} rows with fewer than two fields", stats.rows_skipped);
    }
    if stats.keys_overwritten > 0 {
        tracing::debug!("{} duplicate keys overwritten", stats.keys_overwritten);
    }

    Ok((mapping, stats))
}

/// Pretty-printed JSON object, two-space indentation.
pub fn render_json(mapping: &KeyMapping) -> Result<String> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// Creates or truncates `output_path` and writes the mapping as JSON.
pub fn write_json(mapping: &KeyMapping, output_path: impl AsRef<Path>) -> Result<()> {
    let json = render_json(mapping)?;
    fs::write(output_path.as_ref(), json)?;
    tracing::debug!(
        "Wrote {} keys to {}",
        mapping.len(),
        output_path.as_ref().display()
    );
    Ok(())
}
