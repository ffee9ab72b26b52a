//! Error types for the pdf2md-pages library.
//!
//! Every failure is fatal for the run: conversion stops at the first error
//! and pages already written stay on disk. [`SplitError::kind`] folds the
//! variants into the three categories the command line reports on:
//!
//! * [`ErrorKind::NotFound`] — the source path does not exist.
//! * [`ErrorKind::InvalidInput`] — the source exists but is not a `.pdf`.
//! * [`ErrorKind::ConversionFailure`] — everything that happens after
//!   validation (pdfium, rendering, directory creation, file writes).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2md-pages library.
#[derive(Debug, Error)]
pub enum SplitError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("PDF file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Source exists but its extension is not `.pdf` (any case).
    #[error("File does not appear to be a PDF: {}", path.display())]
    NotAPdf { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{}' could not be opened: {detail}", path.display())]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{}' is encrypted and requires a password (use --password)", path.display())]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{}'", path.display())]
    WrongPassword { path: PathBuf },

    /// pdfium failed on a specific page (1-indexed).
    #[error("Rendering failed for page {page}: {detail}")]
    PageRenderFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output or images directory.
    #[error("Failed to create directory '{}': {source}", path.display())]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write a page's Markdown file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not encode or write an extracted image.
    #[error("Failed to write image '{}': {source}", path.display())]
    ImageWriteFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Place libpdfium next to the binary or install it on the system library path."
    )]
    PdfiumBindingFailed(String),
}

/// The user-facing category of a [`SplitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    ConversionFailure,
}

impl SplitError {
    /// Classify this error for exit-code and message-prefix selection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::FileNotFound { .. } => ErrorKind::NotFound,
            SplitError::NotAPdf { .. } => ErrorKind::InvalidInput,
            _ => ErrorKind::ConversionFailure,
        }
    }
}
