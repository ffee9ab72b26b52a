//! Markdown assembly from a page's text layer, heading candidates and
//! extracted image names.
//!
//! pdfium returns the page text in reading order but with no structure.
//! Headings are recovered from font sizes: a text object set noticeably
//! larger than the page's body text marks the matching line as a heading.

use crate::config::IMAGES_DIR_NAME;
use std::collections::{BTreeMap, HashMap};

/// Ratio to the body font size at or above which a line becomes `#`.
const H1_RATIO: f32 = 1.6;
/// Ratio at or above which a line becomes `##`.
const H2_RATIO: f32 = 1.25;
/// Longer lines are paragraphs in a large font, not headings.
const MAX_HEADING_CHARS: usize = 120;

/// A text fragment set in a heading-sized font.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    pub text: String,
    pub level: u8,
}

/// Most common font size on a page, weighted by visible characters.
///
/// Sizes are bucketed to a tenth of a point; ties go to the smaller size.
/// Blank fragments and non-positive sizes carry no weight.
pub fn body_font_size(objects: &[(String, f32)]) -> Option<f32> {
    let mut weights: BTreeMap<u32, usize> = BTreeMap::new();
    for (text, size) in objects {
        if !size.is_finite() || *size <= 0.0 {
            continue;
        }
        let chars = text.chars().filter(|c| !c.is_whitespace()).count();
        if chars == 0 {
            continue;
        }
        *weights.entry((size * 10.0).round() as u32).or_default() += chars;
    }

    weights
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(tenths, _)| tenths as f32 / 10.0)
}

/// Heading level for a font size relative to the body size.
pub fn heading_level(size: f32, body: f32) -> Option<u8> {
    if body <= 0.0 {
        return None;
    }
    let ratio = size / body;
    if ratio >= H1_RATIO {
        Some(1)
    } else if ratio >= H2_RATIO {
        Some(2)
    } else {
        None
    }
}

/// Pick heading candidates out of `(text, font_size)` pairs.
pub fn heading_candidates(objects: &[(String, f32)]) -> Vec<HeadingCandidate> {
    let Some(body) = body_font_size(objects) else {
        return Vec::new();
    };

    objects
        .iter()
        .filter_map(|(text, size)| {
            let text = text.trim();
            if text.is_empty() || text.chars().count() > MAX_HEADING_CHARS {
                return None;
            }
            heading_level(*size, body).map(|level| HeadingCandidate {
                text: text.to_string(),
                level,
            })
        })
        .collect()
}

/// Build the page Markdown.
///
/// Lines whose trimmed text equals a heading candidate get the heading
/// prefix; images are linked after the text, relative to the page file.
pub fn assemble_page(text: &str, headings: &[HeadingCandidate], images: &[String]) -> String {
    let mut levels: HashMap<&str, u8> = HashMap::with_capacity(headings.len());
    for h in headings {
        levels.entry(h.text.as_str()).or_insert(h.level);
    }

    let mut md = String::with_capacity(text.len() + images.len() * 48);
    for line in text.lines() {
        let trimmed = line.trim();
        match levels.get(trimmed) {
            Some(&level) if !trimmed.is_empty() => {
                md.push_str(&"#".repeat(level as usize));
                md.push(' ');
                md.push_str(trimmed);
            }
            _ => md.push_str(line),
        }
        md.push('\n');
    }

    for name in images {
        md.push('\n');
        md.push_str(&format!("![]({IMAGES_DIR_NAME}/{name})"));
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(items: &[(&str, f32)]) -> Vec<(String, f32)> {
        items.iter().map(|(t, s)| (t.to_string(), *s)).collect()
    }

    #[test]
    fn body_size_weighted_by_characters() {
        let objects = sized(&[
            ("Title", 24.0),
            ("Sub", 16.0),
            ("A", 24.0),
            ("a long run of ordinary body text", 10.0),
        ]);
        assert_eq!(body_font_size(&objects), Some(10.0));
    }

    #[test]
    fn body_size_ignores_blank_and_invalid() {
        let objects = sized(&[("   ", 30.0), ("body", 11.0), ("x", 0.0), ("y", f32::NAN)]);
        assert_eq!(body_font_size(&objects), Some(11.0));
        assert_eq!(body_font_size(&sized(&[("  ", 12.0)])), None);
        assert_eq!(body_font_size(&[]), None);
    }

    #[test]
    fn body_size_tie_prefers_smaller() {
        assert_eq!(body_font_size(&sized(&[("abcd", 14.0), ("wxyz", 9.5)])), Some(9.5));
    }

    #[test]
    fn heading_levels() {
        assert_eq!(heading_level(20.0, 10.0), Some(1));
        assert_eq!(heading_level(13.0, 10.0), Some(2));
        assert_eq!(heading_level(11.0, 10.0), None);
        assert_eq!(heading_level(11.0, 0.0), None);
    }

    #[test]
    fn candidates_skip_body_and_long_lines() {
        let long = "x".repeat(200);
        let paragraph = "lorem ipsum dolor sit amet ".repeat(12);
        let objects = vec![
            ("Introduction".to_string(), 20.0),
            ("Body text here".to_string(), 10.0),
            ("More body".to_string(), 10.0),
            (paragraph, 10.0),
            (long, 20.0),
            ("  ".to_string(), 20.0),
        ];
        let c = heading_candidates(&objects);
        assert_eq!(
            c,
            vec![HeadingCandidate {
                text: "Introduction".into(),
                level: 1
            }]
        );
    }

    #[test]
    fn single_body_line_outweighs_several_headings() {
        let objects = sized(&[
            ("Annual Report", 24.0),
            ("Overview", 16.0),
            (
                "Revenue grew in every region during the fiscal year we report.",
                10.0,
            ),
        ]);
        let c = heading_candidates(&objects);
        assert_eq!(c.len(), 2, "{c:?}");
        assert_eq!(
            c[0],
            HeadingCandidate {
                text: "Annual Report".into(),
                level: 1
            }
        );
        assert_eq!(c[1].text, "Overview");
    }

    #[test]
    fn assemble_marks_headings_and_links_images() {
        let headings = vec![HeadingCandidate {
            text: "Results".into(),
            level: 2,
        }];
        let images = vec!["doc_page_002_img_001.png".to_string()];
        let md = assemble_page("Results\nAll good.", &headings, &images);
        assert_eq!(
            md,
            "## Results\nAll good.\n\n![](images/doc_page_002_img_001.png)\n"
        );
    }

    #[test]
    fn assemble_plain_text_unchanged() {
        assert_eq!(assemble_page("one\ntwo", &[], &[]), "one\ntwo\n");
        assert_eq!(assemble_page("", &[], &[]), "");
    }
}
