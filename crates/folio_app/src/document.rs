//! CV document endpoint

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document {path} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResponse {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Serves one fixed file
#[derive(Debug, Clone)]
pub struct DocumentEndpoint {
    path: PathBuf,
}

impl DocumentEndpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. The file is read on every request.
    pub fn fetch(&self) -> Result<DocumentResponse, DocumentError> {
        let body = fs::read(&self.path).map_err(|source| DocumentError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = body.len(), "document served");
        Ok(DocumentResponse {
            content_type: PDF_CONTENT_TYPE,
            body,
        })
    }
}
