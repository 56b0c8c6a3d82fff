//! Document I/O for composed output

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Serialize a document to PDF bytes
pub fn pdf_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Save the composed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = tokio::task::spawn_blocking(move || pdf_bytes(&mut doc)).await??;
    tokio::fs::write(path.as_ref(), bytes).await?;
    Ok(())
}
