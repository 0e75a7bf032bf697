//! Upload format detection and validation.
//!
//! The quality service only accepts Word documents, so uploads are gated
//! on the `.docx` extension and the container's magic bytes before any
//! network traffic happens.

use crate::error::{Error, Result};
use std::path::Path;

/// ZIP local-file-header magic bytes; a .docx file is a ZIP package.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check whether a byte buffer looks like a .docx (ZIP) container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Check whether a path carries the `.docx` extension (case-insensitive).
pub fn has_docx_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false)
}

/// Validate an upload before sending it to the quality service.
///
/// # Arguments
/// * `filename` - Name the file will be uploaded under
/// * `data` - File contents
///
/// # Returns
/// * `Ok(())` if the name and contents both look like a .docx document
/// * `Err(Error::UnknownFormat)` otherwise
pub fn ensure_docx(filename: &str, data: &[u8]) -> Result<()> {
    if !has_docx_extension(filename) || !is_docx_bytes(data) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}
