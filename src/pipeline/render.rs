//! Page rendering: the [`PageRenderer`] seam and its pdfium implementation.
//!
//! The converter only needs two things from a PDF backend: how many pages a
//! document has, and one page's Markdown (with its images written to disk).
//! Keeping that behind a trait lets the orchestration be tested with a fake
//! backend and no pdfium library present.
//!
//! [`PdfiumRenderer`] loads the document afresh for every call. Nothing is
//! held open between the page count and the per-page loop.

use crate::error::SplitError;
use crate::output::DocumentMetadata;
use crate::pipeline::{markdown, postprocess, write};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// A backend that turns single PDF pages into Markdown.
pub trait PageRenderer {
    /// Open `source`, count its pages, close it.
    fn page_count(&self, source: &Path) -> Result<usize, SplitError>;

    /// Render exactly one page (0-indexed) to Markdown, writing any images
    /// it extracts into `images_dir` under page-qualified names.
    fn render_page(
        &self,
        source: &Path,
        page_index: usize,
        images_dir: &Path,
    ) -> Result<String, SplitError>;
}

/// [`PageRenderer`] backed by the pdfium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
    password: Option<String>,
    extract_images: bool,
}

impl PdfiumRenderer {
    /// Bind pdfium from the working directory, falling back to the system
    /// library path.
    pub fn bind() -> Result<Self, SplitError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| SplitError::PdfiumBindingFailed(format!("{:?}", e)))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
            password: None,
            extract_images: true,
        })
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    pub fn with_image_extraction(mut self, extract_images: bool) -> Self {
        self.extract_images = extract_images;
        self
    }

    fn open<'a>(&'a self, source: &Path) -> Result<PdfDocument<'a>, SplitError> {
        let password = self.password.as_deref();
        self.pdfium
            .load_pdf_from_file(source, password)
            .map_err(|e| {
                let err_str = format!("{:?}", e);
                if err_str.contains("Password") || err_str.contains("password") {
                    if password.is_some() {
                        SplitError::WrongPassword {
                            path: source.to_path_buf(),
                        }
                    } else {
                        SplitError::PasswordRequired {
                            path: source.to_path_buf(),
                        }
                    }
                } else {
                    SplitError::CorruptPdf {
                        path: source.to_path_buf(),
                        detail: err_str,
                    }
                }
            })
    }

    /// Extract document metadata without rendering pages.
    pub fn metadata(&self, source: &Path) -> Result<DocumentMetadata, SplitError> {
        let document = self.open(source)?;
        let metadata = document.metadata();

        let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
            metadata.get(tag).and_then(|t| {
                let v = t.value().to_string();
                if v.is_empty() {
                    None
                } else {
                    Some(v)
                }
            })
        };

        Ok(DocumentMetadata {
            title: get_meta(PdfDocumentMetadataTagType::Title),
            author: get_meta(PdfDocumentMetadataTagType::Author),
            subject: get_meta(PdfDocumentMetadataTagType::Subject),
            creator: get_meta(PdfDocumentMetadataTagType::Creator),
            producer: get_meta(PdfDocumentMetadataTagType::Producer),
            creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
            modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
            page_count: document.pages().len() as usize,
            pdf_version: format!("{:?}", document.version()),
        })
    }
}

/// Text sizes and decoded images gathered from one page's object tree.
#[derive(Default)]
struct PageObjects {
    sized_text: Vec<(String, f32)>,
    images: Vec<DynamicImage>,
}

/// Form XObjects nested deeper than this are not descended into.
const MAX_FORM_DEPTH: usize = 8;

impl PdfiumRenderer {
    /// Collect text sizes and images from `object`, descending into Form
    /// XObjects so nested content is not lost.
    fn visit_object(
        &self,
        object: &PdfPageObject,
        page_num: usize,
        depth: usize,
        collected: &mut PageObjects,
    ) {
        if let Some(text_object) = object.as_text_object() {
            collected
                .sized_text
                .push((text_object.text(), text_object.scaled_font_size().value));
        } else if let Some(image_object) = object.as_image_object() {
            if !self.extract_images {
                return;
            }
            match image_object.get_raw_image() {
                Ok(image) => collected.images.push(image),
                Err(e) => warn!("Skipping unreadable image on page {}: {:?}", page_num, e),
            }
        } else if let Some(form) = object.as_x_object_form_object() {
            if depth >= MAX_FORM_DEPTH {
                warn!("Form XObject nesting too deep on page {}, skipping", page_num);
                return;
            }
            for child in form.iter() {
                self.visit_object(&child, page_num, depth + 1, collected);
            }
        }
    }
}

impl PageRenderer for PdfiumRenderer {
    fn page_count(&self, source: &Path) -> Result<usize, SplitError> {
        let document = self.open(source)?;
        let total = document.pages().len() as usize;
        info!("PDF loaded: {} pages", total);
        Ok(total)
    }

    fn render_page(
        &self,
        source: &Path,
        page_index: usize,
        images_dir: &Path,
    ) -> Result<String, SplitError> {
        let page_num = page_index + 1;
        let render_err = |e: PdfiumError| SplitError::PageRenderFailed {
            page: page_num,
            detail: format!("{:?}", e),
        };

        let document = self.open(source)?;
        let pages = document.pages();
        let page = pages.get(page_index as u16).map_err(render_err)?;
        let text = page.text().map_err(render_err)?.all();

        let mut collected = PageObjects::default();
        for object in page.objects().iter() {
            self.visit_object(&object, page_num, 0, &mut collected);
        }
        let PageObjects { sized_text, images } = collected;

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut image_names = Vec::with_capacity(images.len());
        for (i, image) in images.into_iter().enumerate() {
            let name = write::image_file_name(&stem, page_num, i + 1);
            save_png(image, &images_dir.join(&name))?;
            image_names.push(name);
        }

        let headings = markdown::heading_candidates(&sized_text);
        let md = markdown::assemble_page(&text, &headings, &image_names);
        debug!(
            "Rendered page {} → {} chars, {} headings, {} images",
            page_num,
            md.len(),
            headings.len(),
            image_names.len()
        );

        Ok(postprocess::clean_markdown(&md))
    }
}

/// Write an extracted image as PNG, widening float formats PNG cannot hold.
fn save_png(image: DynamicImage, path: &Path) -> Result<(), SplitError> {
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(image.to_rgba8())
        }
        other => other,
    };
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SplitError::ImageWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
}
