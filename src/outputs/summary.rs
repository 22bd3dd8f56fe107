//! Summary CSV writer and reader.
//!
//! The summary is a single UTF-8 CSV with a fixed header
//! (`filename,title,date,keyword1,keyword2,keyword3`) and one row per article.
//! Fields containing commas, quotes or newlines are quoted.

use crate::models::SummaryRow;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize rows into CSV bytes, header first.
pub fn rows_to_csv(rows: &[SummaryRow]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    if rows.is_empty() {
        // serde only emits the header alongside the first record
        writer.write_record(["filename", "title", "date", "keyword1", "keyword2", "keyword3"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// Parse CSV bytes produced by [`rows_to_csv`].
pub fn rows_from_csv(bytes: &[u8]) -> Result<Vec<SummaryRow>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Write the summary CSV, creating the parent directory if needed.
#[instrument(level = "info", skip_all, fields(path = %path.display(), rows = rows.len()))]
pub async fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<(), Box<dyn Error>> {
    let bytes = rows_to_csv(rows)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    fs::write(path, bytes).await?;
    info!("Wrote summary CSV");
    Ok(())
}

/// Read a summary CSV back into rows.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_summary(path: &Path) -> Result<Vec<SummaryRow>, Box<dyn Error>> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| format!("failed to read summary {}: {}", path.display(), e))?;
    rows_from_csv(&bytes)
}
