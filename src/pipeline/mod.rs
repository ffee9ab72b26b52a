//! Pipeline stages for page-by-page PDF-to-Markdown conversion.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own and the rendering backend can be swapped without touching the rest.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ markdown ──▶ postprocess ──▶ write
//! (path)    (pdfium)   (headings,   (cleanup)       (page files)
//!                       image links)
//! ```
//!
//! 1. [`input`]       — validate existence and `.pdf` extension
//! 2. [`render`]      — the [`render::PageRenderer`] seam; pdfium reads text,
//!    font sizes and images for one page at a time
//! 3. [`markdown`]    — recover headings from font sizes, link images
//! 4. [`postprocess`] — deterministic whitespace/Unicode cleanup
//! 5. [`write`]       — directory creation, page naming, file writes

pub mod input;
pub mod markdown;
pub mod postprocess;
pub mod render;
pub mod write;
