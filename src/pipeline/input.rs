//! Source validation: turn a user-supplied path into a [`SourceDocument`].
//!
//! Both checks run before anything touches the filesystem or pdfium, so a
//! rejected input leaves no directories or files behind.

use crate::error::SplitError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source PDF that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    stem: String,
}

impl SourceDocument {
    /// Path to the PDF as supplied by the caller.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its extension; the prefix of every output name.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Directory containing the PDF, `.` for a bare file name.
    pub fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Validate that `path` exists and carries a `.pdf` extension (any case).
///
/// Existence is checked first: a missing `notes.txt` is reported as not
/// found, not as the wrong type.
pub fn validate_source(path: impl AsRef<Path>) -> Result<SourceDocument, SplitError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(SplitError::FileNotFound { path });
    }

    if !has_pdf_extension(&path) {
        return Err(SplitError::NotAPdf { path });
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Validated source PDF: {}", path.display());
    Ok(SourceDocument { path, stem })
}

/// Case-insensitive `.pdf` extension check.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("a.pdf")));
        assert!(has_pdf_extension(Path::new("Report.PDF")));
        assert!(has_pdf_extension(Path::new("dir/x.Pdf")));
        assert!(!has_pdf_extension(Path::new("report.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
        assert!(!has_pdf_extension(Path::new(".pdf")));
        assert!(!has_pdf_extension(Path::new("archive.pdf.gz")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.pdf");
        let err = validate_source(&missing).unwrap_err();
        assert!(matches!(err, SplitError::FileNotFound { .. }));
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[test]
    fn missing_non_pdf_is_still_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = validate_source(tmp.path().join("notes.txt")).unwrap_err();
        assert!(matches!(err, SplitError::FileNotFound { .. }));
    }

    #[test]
    fn empty_path_is_not_found() {
        let err = validate_source("").unwrap_err();
        assert!(matches!(err, SplitError::FileNotFound { .. }));
    }

    #[test]
    fn existing_txt_is_rejected_regardless_of_content() {
        let tmp = TempDir::new().unwrap();
        let txt = tmp.path().join("report.txt");
        std::fs::write(&txt, b"%PDF-1.7 looks like a pdf").unwrap();
        let err = validate_source(&txt).unwrap_err();
        assert!(matches!(err, SplitError::NotAPdf { .. }));
    }

    #[test]
    fn stem_and_parent() {
        let tmp = TempDir::new().unwrap();
        let pdf = tmp.path().join("Report.PDF");
        std::fs::write(&pdf, b"").unwrap();
        let doc = validate_source(&pdf).unwrap();
        assert_eq!(doc.stem(), "Report");
        assert_eq!(doc.parent_dir(), tmp.path());
        assert_eq!(doc.path(), pdf.as_path());
    }

    #[test]
    fn bare_file_name_parent_is_current_dir() {
        let doc = SourceDocument {
            path: PathBuf::from("a.pdf"),
            stem: "a".into(),
        };
        assert_eq!(doc.parent_dir(), PathBuf::from("."));
    }
}
