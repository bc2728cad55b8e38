//! CSV persistence for paper records
//!
//! Files are UTF-8 with a leading BOM so spreadsheet tools pick the encoding
//! up correctly. Column order is fixed by the `Paper` field order: title,
//! authors, year, conference, link.

use anyhow::{Context, Result};
use futures::TryStreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::models::Paper;

/// UTF-8 byte order mark, for spreadsheet compatibility
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write paper records to a CSV file
///
/// Skips writing entirely (with a log message) when there are no records.
/// The header row is emitted from the `Paper` field names.
pub async fn write_papers(path: &Path, papers: &[Paper]) -> Result<()> {
    if papers.is_empty() {
        tracing::info!(path = %path.display(), "No paper records to save, skipping CSV");
        return Ok(());
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .await
        .context("Failed to write BOM")?;

    let mut writer = csv_async::AsyncWriterBuilder::new().create_serializer(file);
    for paper in papers {
        writer
            .serialize(paper)
            .await
            .with_context(|| format!("Failed to write record to {}", path.display()))?;
    }
    writer.flush().await.context("Failed to flush CSV writer")?;

    tracing::info!(
        path = %path.display(),
        records = papers.len(),
        "Saved paper records to CSV"
    );

    Ok(())
}

/// Read paper records back from a CSV file written by [`write_papers`]
///
/// Tolerates the leading BOM.
pub async fn read_papers(path: &Path) -> Result<Vec<Paper>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = csv_async::AsyncReaderBuilder::new().create_deserializer(body);
    let papers: Vec<Paper> = reader
        .deserialize::<Paper>()
        .try_collect()
        .await
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

    Ok(papers)
}
