//! CCT Document Extraction
//!
//! Thin wrapper over the `pdf-extract` crate that turns a PDF file into its
//! full plain text. Encrypted, corrupt, and image-only (scanned) documents
//! surface as errors; the orchestrator aborts the run when extraction
//! fails, since every downstream analysis consumes this text.

#![warn(missing_docs)]

use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while extracting document text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be read or parsed as a PDF
    #[error("Could not extract text from {path}: {source}")]
    Parse {
        /// Path of the offending document
        path: String,
        /// Underlying extraction error
        #[source]
        source: pdf_extract::OutputError,
    },

    /// The document yielded no text at all (scanned or image-only PDF)
    #[error("No extractable text in {path}; the document may be scanned")]
    Empty {
        /// Path of the offending document
        path: String,
    },
}

/// Extract the full plain text of a PDF document
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text(path).map_err(|source| ExtractError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(ExtractError::Empty {
            path: path.display().to_string(),
        });
    }

    info!("Extracted {} chars from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_parse_error() {
        let result = extract_text(Path::new("/no/such/document.pdf"));
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }

    #[test]
    fn test_garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_pdf.pdf");
        std::fs::write(&path, "plain text pretending to be a pdf").unwrap();

        let result = extract_text(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message_names_the_file() {
        let err = extract_text(Path::new("/no/such/document.pdf")).unwrap_err();
        assert!(err.to_string().contains("/no/such/document.pdf"));
    }
}
