//! Result types returned by [`crate::convert`] and [`crate::inspect`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of a successful conversion run.
///
/// `files` holds one path per page, in ascending page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// The validated source PDF.
    pub source: PathBuf,
    /// Directory the page files were written to.
    pub output_dir: PathBuf,
    /// Directory extracted images were written to.
    pub images_dir: PathBuf,
    /// Number of pages in the source document.
    pub total_pages: usize,
    /// Written Markdown files, page 1 first.
    pub files: Vec<PathBuf>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

impl ConversionReport {
    /// The written Markdown files in page order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Path of the file for a 1-indexed page number.
    pub fn page_file(&self, page_num: usize) -> Option<&Path> {
        page_num
            .checked_sub(1)
            .and_then(|i| self.files.get(i))
            .map(PathBuf::as_path)
    }
}

/// Document-level metadata extracted from the PDF info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}
