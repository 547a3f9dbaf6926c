//! Writes the course document into the course root

use anyhow::{Context, Result};
use course_core::CourseDocument;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serializes the document to a fixed filename inside the course root
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    filename: String,
}

impl DocumentWriter {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    pub fn output_path(&self, course_root: &Path) -> PathBuf {
        course_root.join(&self.filename)
    }

    /// Write pretty-printed JSON, replacing any earlier output
    pub fn write(&self, document: &CourseDocument, course_root: &Path) -> Result<PathBuf> {
        let path = self.output_path(course_root);
        document
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} chapters to {}", document.chapters().len(), path.display());
        Ok(path)
    }
}
