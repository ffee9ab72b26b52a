//! Configuration types for page-by-page conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. There is no configuration file and no
//! environment lookup: the command line maps its arguments onto the builder.

use crate::error::SplitError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Name of the subdirectory (inside the output directory) receiving images.
pub const IMAGES_DIR_NAME: &str = "images";

/// Configuration for a PDF-to-Markdown page split.
///
/// # Example
/// ```rust
/// use pdf2md_pages::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .output_dir("out")
///     .build()
///     .unwrap();
/// assert_eq!(config.output_dir.as_deref(), Some(std::path::Path::new("out")));
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Directory for the per-page Markdown files.
    ///
    /// `None` writes next to the source PDF. When set, the directory and any
    /// missing parents are created before the first page is written.
    pub output_dir: Option<PathBuf>,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Write embedded images to the images directory and link them from the
    /// page Markdown. Default: true.
    pub extract_images: bool,

    /// Receives run and per-page events. `None` runs silently.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            password: None,
            extract_images: true,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("output_dir", &self.output_dir)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("extract_images", &self.extract_images)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn extract_images(mut self, v: bool) -> Self {
        self.config.extract_images = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, SplitError> {
        let c = &self.config;
        if c.password.as_deref() == Some("") {
            return Err(SplitError::InvalidConfig(
                "password must not be empty when set".into(),
            ));
        }
        if c.output_dir.as_ref().is_some_and(|d| d.as_os_str().is_empty()) {
            return Err(SplitError::InvalidConfig(
                "output directory must not be an empty path".into(),
            ));
        }
        Ok(self.config)
    }
}
