use std::sync::Arc;

use crate::document::{DrawOp, ImageClip, Photo};
use crate::layout::flow::{Flow, Region};
use crate::layout::wrap::{join_present, wrap_text};
use crate::models::PersonalInfo;
use crate::templates::sheet::{
    Column, ContactField, Field, Header, HeaderItem, PhotoFrame, PhotoShape, PhotoX, PhotoY,
    TextStyle,
};

use super::{text_op, Resume};

/// Runs a header recipe. The header always fits on the first page, so it is
/// never paginated.
pub(super) fn render_header(flow: &mut Flow, header: &Header, resume: &Resume<'_>) {
    let region = header.region;
    let column = header.column;
    let personal = resume.personal;
    flow.set_y(region, header.top);

    for item in header.items {
        match *item {
            HeaderItem::Name {
                style,
                uppercase,
                after,
            } => {
                let name = personal.full_name.trim();
                if name.is_empty() {
                    continue;
                }
                let name = if uppercase {
                    name.to_uppercase()
                } else {
                    name.to_string()
                };
                text_block(flow, header, &name, style);
                flow.advance(region, after);
            }
            HeaderItem::Title {
                style,
                fallback,
                after,
            } => {
                let title = match (personal.professional_title.trim(), fallback) {
                    ("", Some(fallback)) => fallback,
                    ("", None) => continue,
                    (title, _) => title,
                };
                text_block(flow, header, title, style);
                flow.advance(region, after);
            }
            HeaderItem::Contact {
                fields,
                separator,
                style,
                after,
            } => {
                let values: Vec<String> = fields.iter().map(|f| contact_text(personal, f)).collect();
                let parts: Vec<&str> = values.iter().map(String::as_str).collect();
                let line = join_present(&parts, separator);
                if line.is_empty() {
                    continue;
                }
                text_block(flow, header, &line, style);
                flow.advance(region, after);
            }
            HeaderItem::ContactStack { fields, style, gap } => {
                for field in fields {
                    let value = contact_text(personal, field);
                    if value.is_empty() {
                        continue;
                    }
                    text_block(flow, header, &value, style);
                    flow.advance(region, gap);
                }
            }
            HeaderItem::Rule {
                x1,
                x2,
                stroke,
                after,
            } => {
                let y = flow.y(region);
                flow.push(
                    region,
                    DrawOp::Line {
                        from: (x1, y),
                        to: (x2, y),
                        stroke,
                    },
                );
                flow.advance(region, after);
            }
            HeaderItem::Photo(frame) => {
                if let Some(photo) = &resume.photo {
                    place_photo(flow, region, column, &frame, photo);
                }
            }
            HeaderItem::Gap(dy) => flow.advance(region, dy),
            HeaderItem::MoveTo(y) => flow.set_y(region, y),
        }
    }

    if let Some(y) = header.body_start {
        flow.set_y(Region::Main, y);
    }
}

fn contact_text(personal: &PersonalInfo, contact: &ContactField) -> String {
    let value = match contact.field {
        Field::Email => &personal.email,
        Field::Phone => &personal.phone,
        Field::Address => &personal.address,
        Field::Linkedin => &personal.linkedin,
        Field::Github => &personal.github,
    };
    let value = value.trim();
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}", contact.label, value)
    }
}

/// Wraps `text` to the header column and prints it line by line.
fn text_block(flow: &mut Flow, header: &Header, text: &str, style: TextStyle) {
    let x = header.column.anchor(header.align);
    for line in wrap_text(text, style.font, style.size, header.column.width) {
        let y = flow.y(header.region);
        flow.push(header.region, text_op(line, x, y, style, header.align));
        flow.advance(header.region, style.leading);
    }
}

fn place_photo(
    flow: &mut Flow,
    region: Region,
    column: Column,
    frame: &PhotoFrame,
    photo: &Arc<Photo>,
) {
    let size = frame.size;
    let x = match frame.x {
        PhotoX::At(x) => x,
        PhotoX::Centered => column.center() - size / 2.0,
    };
    let y = match frame.y {
        PhotoY::At(y) => y,
        PhotoY::Cursor => flow.y(region),
    };
    let r = size / 2.0;
    let (cx, cy) = (x + r, y + r);

    if let Some((color, extra)) = frame.halo {
        flow.push(
            region,
            DrawOp::Circle {
                cx,
                cy,
                r: r + extra,
                fill: Some(color),
                stroke: None,
            },
        );
    }

    let clip = match frame.shape {
        PhotoShape::Circle => ImageClip::Circle,
        PhotoShape::Rounded(radius) => ImageClip::Rounded(radius),
        PhotoShape::Square => ImageClip::None,
    };
    flow.push(
        region,
        DrawOp::Image {
            photo: Arc::clone(photo),
            x,
            y,
            size,
            clip,
        },
    );

    if let Some(border) = frame.border {
        let outline = match frame.shape {
            PhotoShape::Circle => DrawOp::Circle {
                cx,
                cy,
                r,
                fill: None,
                stroke: Some(border),
            },
            PhotoShape::Square => DrawOp::Rect {
                x,
                y,
                w: size,
                h: size,
                radius: 0.0,
                fill: None,
                stroke: Some(border),
            },
            PhotoShape::Rounded(radius) => DrawOp::Rect {
                x,
                y,
                w: size,
                h: size,
                radius,
                fill: None,
                stroke: Some(border),
            },
        };
        flow.push(region, outline);
    }

    if let Some(gap) = frame.advance {
        flow.advance(region, size + gap);
    }
}
