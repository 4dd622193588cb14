//! Display list → PDF bytes, via lopdf.
//!
//! Output is fully determined by the input: no creation date, no document ID,
//! objects numbered in insertion order.

use std::sync::Arc;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream, StringFormat};

use super::encoding::encode_win_ansi;
use super::{Document, DrawOp, ExportError, ImageClip, Photo, Pixels, Rgb, Stroke, TextRun};
use crate::layout::font_metrics::Font;

const PT_PER_MM: f32 = 72.0 / 25.4;
/// Control-point distance for a quarter circle drawn as a cubic bezier.
const KAPPA: f32 = 0.552_284_8;

pub fn write_pdf(document: &Document) -> Result<Vec<u8>, ExportError> {
    let mut pdf = lopdf::Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let fonts_id = pdf.add_object(fonts);

    let size = document.page_size();
    let page_h = size.height_mm * PT_PER_MM;
    let mut images: Vec<(Arc<Photo>, ObjectId, String)> = Vec::new();
    let mut kids: Vec<Object> = Vec::with_capacity(document.page_count());

    for page in document.pages() {
        let mut painter = Painter::new(page_h);
        let mut xobjects = Dictionary::new();

        for op in page.ops() {
            match op {
                DrawOp::Image { photo, x, y, size, clip } => {
                    let name = match images.iter().find(|(p, _, _)| Arc::ptr_eq(p, photo)) {
                        Some((_, id, name)) => {
                            xobjects.set(name.as_str(), *id);
                            name.clone()
                        }
                        None => {
                            let name = format!("Im{}", images.len() + 1);
                            let id = pdf.add_object(image_stream(photo));
                            xobjects.set(name.as_str(), id);
                            images.push((Arc::clone(photo), id, name.clone()));
                            name
                        }
                    };
                    painter.image(&name, *x, *y, *size, *clip);
                }
                other => painter.draw(other),
            }
        }

        let content = Content {
            operations: painter.ops,
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));

        let mut resources = dictionary! { "Font" => fonts_id };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }

        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(size.width_mm * PT_PER_MM),
                Object::Real(page_h),
            ],
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn image_stream(photo: &Photo) -> Stream {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => photo.width as i64,
        "Height" => photo.height as i64,
        "ColorSpace" => photo.color_space(),
        "BitsPerComponent" => 8_i64,
    };
    match &photo.pixels {
        Pixels::Jpeg(bytes) => {
            dict.set("Filter", "DCTDecode");
            let mut stream = Stream::new(dict, bytes.clone());
            stream.allows_compression = false;
            stream
        }
        // Raw samples pick up FlateDecode in `compress`.
        Pixels::Raw(samples) => Stream::new(dict, samples.clone()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content stream painter
// ────────────────────────────────────────────────────────────────────────────

/// Emits content-stream operations, converting top-left millimetres to
/// bottom-left points.
struct Painter {
    page_h: f32,
    ops: Vec<Operation>,
}

fn real(value: f32) -> Object {
    // Two decimals keeps streams small and stable across platforms.
    Object::Real((value * 100.0).round() / 100.0)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    vec![
        real(color.0 as f32 / 255.0),
        real(color.1 as f32 / 255.0),
        real(color.2 as f32 / 255.0),
    ]
}

impl Painter {
    fn new(page_h: f32) -> Self {
        Self {
            page_h,
            ops: Vec::new(),
        }
    }

    fn x(&self, mm: f32) -> f32 {
        mm * PT_PER_MM
    }

    fn y(&self, mm: f32) -> f32 {
        self.page_h - mm * PT_PER_MM
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text(run) => self.text(run),
            DrawOp::Line { from, to, stroke } => {
                self.set_stroke(*stroke);
                let (x1, y1) = (self.x(from.0), self.y(from.1));
                let (x2, y2) = (self.x(to.0), self.y(to.1));
                self.op("m", vec![real(x1), real(y1)]);
                self.op("l", vec![real(x2), real(y2)]);
                self.op("S", vec![]);
            }
            DrawOp::Rect { x, y, w, h, radius, fill, stroke } => {
                if fill.is_none() && stroke.is_none() {
                    return;
                }
                self.set_paint(*fill, *stroke);
                if *radius > 0.0 {
                    self.rounded_rect_path(*x, *y, *w, *h, *radius);
                } else {
                    let (px, py) = (self.x(*x), self.y(y + h));
                    self.op("re", vec![real(px), real(py), real(w * PT_PER_MM), real(h * PT_PER_MM)]);
                }
                self.paint(*fill, *stroke);
            }
            DrawOp::Circle { cx, cy, r, fill, stroke } => {
                if fill.is_none() && stroke.is_none() {
                    return;
                }
                self.set_paint(*fill, *stroke);
                self.circle_path(*cx, *cy, *r);
                self.paint(*fill, *stroke);
            }
            // Needs the XObject name; handled by the page loop.
            DrawOp::Image { .. } => {}
        }
    }

    fn text(&mut self, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        let x = self.x(run.left_x());
        let y = self.y(run.y);
        self.op("BT", vec![]);
        self.op("Tf", vec![Object::Name(run.font.resource_name().as_bytes().to_vec()), real(run.size_pt)]);
        self.op("rg", color_operands(run.color));
        self.op("Td", vec![real(x), real(y)]);
        self.op(
            "Tj",
            vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn image(&mut self, name: &str, x: f32, y: f32, size: f32, clip: ImageClip) {
        let side = size * PT_PER_MM;
        self.op("q", vec![]);
        match clip {
            ImageClip::None => {}
            ImageClip::Circle => {
                let r = size / 2.0;
                self.circle_path(x + r, y + r, r);
                self.op("W", vec![]);
                self.op("n", vec![]);
            }
            ImageClip::Rounded(radius) => {
                self.rounded_rect_path(x, y, size, size, radius);
                self.op("W", vec![]);
                self.op("n", vec![]);
            }
        }
        let (px, py) = (self.x(x), self.y(y + size));
        self.op(
            "cm",
            vec![real(side), Object::Integer(0), Object::Integer(0), real(side), real(px), real(py)],
        );
        self.op("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.op("Q", vec![]);
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.op("RG", color_operands(stroke.color));
        self.op("w", vec![real(stroke.width * PT_PER_MM)]);
    }

    fn set_paint(&mut self, fill: Option<Rgb>, stroke: Option<Stroke>) {
        if let Some(color) = fill {
            self.op("rg", color_operands(color));
        }
        if let Some(stroke) = stroke {
            self.set_stroke(stroke);
        }
    }

    fn paint(&mut self, fill: Option<Rgb>, stroke: Option<Stroke>) {
        let operator = match (fill.is_some(), stroke.is_some()) {
            (true, true) => "B",
            (true, false) => "f",
            _ => "S",
        };
        self.op(operator, vec![]);
    }

    fn circle_path(&mut self, cx: f32, cy: f32, r: f32) {
        let (cx, cy, r) = (self.x(cx), self.y(cy), r * PT_PER_MM);
        let k = r * KAPPA;
        self.op("m", vec![real(cx + r), real(cy)]);
        self.curve(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        self.curve(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
        self.curve(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
        self.curve(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        self.op("h", vec![]);
    }

    fn rounded_rect_path(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        let r = radius.min(w / 2.0).min(h / 2.0) * PT_PER_MM;
        let left = self.x(x);
        let right = self.x(x + w);
        let top = self.y(y);
        let bottom = self.y(y + h);
        let k = r * KAPPA;
        self.op("m", vec![real(left + r), real(bottom)]);
        self.op("l", vec![real(right - r), real(bottom)]);
        self.curve(right - r + k, bottom, right, bottom + r - k, right, bottom + r);
        self.op("l", vec![real(right), real(top - r)]);
        self.curve(right, top - r + k, right - r + k, top, right - r, top);
        self.op("l", vec![real(left + r), real(top)]);
        self.curve(left + r - k, top, left, top - r + k, left, top - r);
        self.op("l", vec![real(left), real(bottom + r)]);
        self.curve(left, bottom + r - k, left + r - k, bottom, left + r, bottom);
        self.op("h", vec![]);
    }

    fn curve(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.op(
            "c",
            vec![real(x1), real(y1), real(x2), real(y2), real(x3), real(y3)],
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
