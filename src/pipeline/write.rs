//! Output stage: directory preparation, page file naming and writing.

use crate::config::IMAGES_DIR_NAME;
use crate::error::SplitError;
use std::path::{Path, PathBuf};

/// File name for a 1-indexed page: `{stem}_page_{page:03}.md`.
///
/// Pages past 999 widen to four or more digits rather than truncating.
pub fn page_file_name(stem: &str, page_num: usize) -> String {
    format!("{stem}_page_{page_num:03}.md")
}

/// File name for the `n`-th (1-indexed) image extracted from a page.
pub fn image_file_name(stem: &str, page_num: usize, image_num: usize) -> String {
    format!("{stem}_page_{page_num:03}_img_{image_num:03}.png")
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), SplitError> {
    std::fs::create_dir_all(dir).map_err(|e| SplitError::OutputDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Create the images directory under `output_dir` and return its path.
pub fn ensure_images_dir(output_dir: &Path) -> Result<PathBuf, SplitError> {
    let images_dir = output_dir.join(IMAGES_DIR_NAME);
    ensure_dir(&images_dir)?;
    Ok(images_dir)
}

/// Write one page's Markdown as UTF-8, replacing any existing file.
pub fn write_page(path: &Path, markdown: &str) -> Result<(), SplitError> {
    std::fs::write(path, markdown.as_bytes()).map_err(|e| SplitError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
