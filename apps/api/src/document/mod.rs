//! Paginated output of a render: an ordered display list per page.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page; text
//! positions are baselines. The PDF writer converts to points at export time.

pub mod encoding;
pub mod pdf;
pub mod photo;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::layout::font_metrics::{text_width_mm, Font};

pub use photo::{Photo, PhotoError, Pixels};

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor x; interpreted according to `align`.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub font: Font,
    pub size_pt: f32,
    pub color: Rgb,
    pub align: Align,
}

impl TextRun {
    pub fn width(&self) -> f32 {
        text_width_mm(&self.text, self.font, self.size_pt)
    }

    /// X of the run's left edge after alignment.
    pub fn left_x(&self) -> f32 {
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - self.width() / 2.0,
            Align::Right => self.x - self.width(),
        }
    }
}

/// How an image is masked when placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageClip {
    None,
    Circle,
    /// Rounded square with the given corner radius in mm.
    Rounded(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        /// Corner radius; 0 for square corners.
        radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Image {
        photo: Arc<Photo>,
        x: f32,
        y: f32,
        size: f32,
        clip: ImageClip,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Pages and documents
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    page_size: PageSize,
    pages: Vec<Page>,
}

impl Document {
    /// A document with a single blank page.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: vec![Page::default()],
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Appends a blank page and returns its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    /// Pushes onto page `index`. Callers only pass indices they created.
    pub fn push(&mut self, index: usize, op: DrawOp) {
        self.pages[index].push(op);
    }

    /// All text runs in reading order, with their page index.
    pub fn text_runs(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.text_runs().map(move |run| (i, run)))
    }

    /// Serializes to a PDF byte stream. Identical documents give identical bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, ExportError> {
        pdf::write_pdf(self)
    }

    /// Writes the PDF to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = self.to_pdf_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}

/// `Jane  Doe` → `Jane_Doe_Resume.pdf`.
pub fn suggested_filename(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_space = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    format!("{stem}_Resume.pdf")
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF serialization failed: {0}")]
    Pdf(String),

    #[error("could not write PDF file: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, align: Align) -> TextRun {
        TextRun {
            text: text.to_string(),
            x: 105.0,
            y: 20.0,
            font: Font::HELVETICA,
            size_pt: 10.0,
            color: Rgb(0, 0, 0),
            align,
        }
    }

    #[test]
    fn test_suggested_filename_collapses_whitespace() {
        assert_eq!(suggested_filename("Jane Doe"), "Jane_Doe_Resume.pdf");
        assert_eq!(suggested_filename("Mary  Ann\tLee"), "Mary_Ann_Lee_Resume.pdf");
        assert_eq!(suggested_filename("Prince"), "Prince_Resume.pdf");
    }

    #[test]
    fn test_text_run_alignment() {
        let left = run("Education", Align::Left);
        let center = run("Education", Align::Center);
        let right = run("Education", Align::Right);
        assert_eq!(left.left_x(), 105.0);
        assert!((center.left_x() - (105.0 - left.width() / 2.0)).abs() < 1e-4);
        assert!((right.left_x() + right.width() - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_new_document_has_one_blank_page() {
        let mut doc = Document::new(PageSize::A4);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages()[0].ops().is_empty());
        assert_eq!(doc.add_page(), 1);
        doc.push(1, DrawOp::Text(run("x", Align::Left)));
        let runs: Vec<(usize, &TextRun)> = doc.text_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0, 1);
    }

    #[test]
    fn test_save_writes_pdf_file() {
        let mut doc = Document::new(PageSize::A4);
        doc.push(0, DrawOp::Text(run("Jane Doe", Align::Left)));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(suggested_filename("Jane Doe"));
        doc.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
