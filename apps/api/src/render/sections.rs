//! Summary and the five user-ordered sections.
//!
//! Every routine checks for page space before each printed line, never in
//! the middle of one, so a page break can fall between any two lines of an
//! entry but never drops or repeats one.

use crate::document::{Align, DrawOp};
use crate::layout::flow::{Flow, Region};
use crate::layout::wrap::{bullet_lines, join_present, split_blob, wrap_text};
use crate::models::{SectionKind, TextList};
use crate::templates::sheet::{
    BadgeStyle, Column, EntryLayout, EntryStyle, HeadingRule, Marker, SectionHeading,
    SectionStyles, SectionTitles, SkillsPresentation, StyleSheet, TextStyle,
};

use super::{text_op, Resume};

/// Distance a marker sits above the title baseline.
const MARKER_RISE: f32 = 2.0;
/// Distance a flanking rule sits above the heading baseline.
const FLANK_RISE: f32 = 2.0;
/// Distance from the badge text baseline to the badge's bottom edge.
const BADGE_DESCENT: f32 = 3.0;

/// Where, and with which styles, a section is printed.
pub(super) struct Target<'s> {
    pub region: Region,
    pub column: Column,
    pub styles: &'s SectionStyles,
    pub titles: &'s SectionTitles,
}

impl<'s> Target<'s> {
    pub fn for_kind(sheet: &'s StyleSheet, kind: SectionKind) -> Self {
        match (sheet.region_of(kind), &sheet.sidebar) {
            (Region::Sidebar, Some(sidebar)) => Target {
                region: Region::Sidebar,
                column: sidebar.column,
                styles: &sidebar.styles,
                titles: &sidebar.titles,
            },
            _ => Target {
                region: Region::Main,
                column: sheet.main,
                styles: &sheet.styles,
                titles: &sheet.titles,
            },
        }
    }
}

/// Title, organisation, date and description of one work or education entry.
struct EntryText<'a> {
    title: &'a str,
    org: &'a str,
    meta: String,
    description: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

pub(super) fn render_summary(flow: &mut Flow, sheet: &StyleSheet, resume: &Resume<'_>) {
    let text = resume.personal.summary.trim();
    if text.is_empty() {
        return;
    }
    let region = Region::Main;
    let column = sheet.main;
    if let Some(title) = sheet.titles.summary {
        heading(flow, region, column, &sheet.styles.heading, title);
    }

    let style = &sheet.summary;
    let body = style.body;
    let lines = split_blob(text, body.font, body.size, column.width - 2.0 * style.indent);
    let x = match style.align {
        Align::Left => column.x + style.indent,
        Align::Center => column.center(),
        Align::Right => column.right() - style.indent,
    };

    let Some(panel) = style.panel else {
        write_lines(flow, region, lines, body, x, style.align);
        flow.advance(region, style.after);
        return;
    };

    // One panel per page, sized to the lines that land on it.
    let mut rest = lines.as_slice();
    while !rest.is_empty() {
        flow.ensure_space(region, body.leading);
        let fit = (flow.remaining(region) / body.leading).floor() as usize;
        let (chunk, tail) = rest.split_at(fit.clamp(1, rest.len()));
        let top = flow.y(region);
        flow.push(
            region,
            DrawOp::Rect {
                x: column.x - panel.pad,
                y: top - panel.pad,
                w: column.width + 2.0 * panel.pad,
                h: chunk.len() as f32 * body.leading + panel.pad,
                radius: panel.radius,
                fill: Some(panel.fill),
                stroke: None,
            },
        );
        for line in chunk {
            let y = flow.y(region);
            flow.push(region, text_op(line.as_str(), x, y, body, style.align));
            flow.advance(region, body.leading);
        }
        rest = tail;
    }
    flow.advance(region, style.after);
}

// ────────────────────────────────────────────────────────────────────────────
// Ordered sections
// ────────────────────────────────────────────────────────────────────────────

/// Prints one section, or nothing at all when its data is empty.
pub(super) fn render_section(flow: &mut Flow, target: &Target<'_>, kind: SectionKind, resume: &Resume<'_>) {
    if !resume.has(kind) {
        return;
    }
    let styles = target.styles;
    heading(
        flow,
        target.region,
        target.column,
        &styles.heading,
        target.titles.title(kind),
    );

    match kind {
        SectionKind::WorkExperience => {
            for job in &resume.work {
                let text = EntryText {
                    title: &job.job_title,
                    org: &job.company,
                    meta: job.date_range(),
                    description: &job.description,
                };
                entry(flow, target, &styles.work, &text);
            }
        }
        SectionKind::Education => {
            for school in &resume.education {
                let text = EntryText {
                    title: &school.degree,
                    org: &school.institution,
                    meta: school.year.trim().to_string(),
                    description: &school.description,
                };
                entry(flow, target, &styles.education, &text);
            }
        }
        SectionKind::Skills => match styles.skills {
            SkillsPresentation::Lines => list(flow, target, &resume.skills),
            SkillsPresentation::Badges(badge) => badges(flow, target, &resume.skills, &badge),
        },
        SectionKind::Certifications => list(flow, target, &resume.certifications),
        SectionKind::References => references(flow, target, resume),
    }

    flow.advance(target.region, styles.section_after);
}

fn heading(flow: &mut Flow, region: Region, column: Column, heading: &SectionHeading, title: &str) {
    flow.ensure_space(region, heading.needed);
    let y = flow.y(region);
    let op = text_op(title, column.anchor(heading.align), y, heading.style, heading.align);

    if let DrawOp::Text(run) = &op {
        match heading.rule {
            HeadingRule::None => {}
            HeadingRule::Underline { offset, stroke } => {
                flow.push(
                    region,
                    DrawOp::Line {
                        from: (column.x, y + offset),
                        to: (column.right(), y + offset),
                        stroke,
                    },
                );
            }
            HeadingRule::Flanked { length, gap, stroke } => {
                let left = run.left_x();
                let right = left + run.width();
                let ry = y - FLANK_RISE;
                flow.push(
                    region,
                    DrawOp::Line {
                        from: (left - gap - length, ry),
                        to: (left - gap, ry),
                        stroke,
                    },
                );
                flow.push(
                    region,
                    DrawOp::Line {
                        from: (right + gap, ry),
                        to: (right + gap + length, ry),
                        stroke,
                    },
                );
            }
        }
    }

    flow.push(region, op);
    flow.advance(region, heading.after);
}

fn entry(flow: &mut Flow, target: &Target<'_>, style: &EntryStyle, text: &EntryText<'_>) {
    let region = target.region;
    let column = target.column;
    flow.ensure_space(region, style.needed);
    let start = flow.cursor(region);

    match style.marker {
        Marker::None => {}
        Marker::Glyph {
            text: glyph,
            style: glyph_style,
        } => {
            flow.push(region, text_op(glyph, column.x, start.y, glyph_style, Align::Left));
        }
        Marker::Dot { x, r, color, .. } => {
            flow.push(
                region,
                DrawOp::Circle {
                    cx: x,
                    cy: start.y - MARKER_RISE,
                    r,
                    fill: Some(color),
                    stroke: None,
                },
            );
        }
        Marker::Bar { x, w, h, color } => {
            flow.push(
                region,
                DrawOp::Rect {
                    x,
                    y: start.y - 3.0,
                    w,
                    h,
                    radius: 0.0,
                    fill: Some(color),
                    stroke: None,
                },
            );
        }
    }

    let title = text.title.trim();
    let org = text.org.trim();
    let meta = text.meta.trim();
    let mut x = column.x + style.indent;

    match style.layout {
        EntryLayout::DatesRight => {
            if !title.is_empty() || !meta.is_empty() {
                let y = flow.y(region);
                if !title.is_empty() {
                    flow.push(region, text_op(title, x, y, style.title, Align::Left));
                }
                if !meta.is_empty() {
                    flow.push(region, text_op(meta, column.right(), y, style.meta, Align::Right));
                }
                flow.advance(region, style.title.leading);
            }
            single_line(flow, region, org, x, style.org);
        }
        EntryLayout::Stacked => {
            single_line(flow, region, title, x, style.title);
            single_line(flow, region, org, x, style.org);
            single_line(flow, region, meta, x, style.meta);
        }
        EntryLayout::Inline { separator } => {
            single_line(flow, region, title, x, style.title);
            let joined = join_present(&[org, meta], separator);
            single_line(flow, region, &joined, x, style.org);
        }
        EntryLayout::DateColumn { offset } => {
            let date_x = x;
            x += offset;
            if !title.is_empty() || !meta.is_empty() {
                let y = flow.y(region);
                if !meta.is_empty() {
                    flow.push(region, text_op(meta, date_x, y, style.meta, Align::Left));
                }
                if !title.is_empty() {
                    flow.push(region, text_op(title, x, y, style.title, Align::Left));
                }
                flow.advance(region, style.title.leading);
            }
            single_line(flow, region, org, x, style.org);
        }
    }

    let description = text.description.trim();
    if !description.is_empty() {
        let body = style.body;
        let body_x = x + style.body_indent;
        let width = column.right() - body_x;
        if style.bullets {
            for line in bullet_lines(description, body.font, body.size, width, style.hanging) {
                flow.ensure_space(region, body.leading);
                let lx = if line.continuation {
                    body_x + style.hanging
                } else {
                    body_x
                };
                let y = flow.y(region);
                flow.push(region, text_op(line.text, lx, y, body, Align::Left));
                flow.advance(region, body.leading);
            }
        } else {
            let lines = split_blob(description, body.font, body.size, width);
            write_lines(flow, region, lines, body, body_x, Align::Left);
        }
        flow.advance(region, style.desc_after);
    }

    // The rail runs from this dot towards the next entry's, when both ends
    // are on the same page.
    if let Marker::Dot {
        x: rail_x,
        r,
        stem: Some(stroke),
        ..
    } = style.marker
    {
        let end = flow.cursor(region);
        let from = start.y - MARKER_RISE + r;
        let to = end.y + style.after - MARKER_RISE - r;
        if end.page == start.page && to > from {
            flow.push(
                region,
                DrawOp::Line {
                    from: (rail_x, from),
                    to: (rail_x, to),
                    stroke,
                },
            );
        }
    }

    flow.advance(region, style.after);
}

fn list(flow: &mut Flow, target: &Target<'_>, items: &TextList) {
    let style = &target.styles.list;
    let column = target.column;
    let width = column.width - style.indent;
    let x = match style.align {
        Align::Left => column.x + style.indent,
        Align::Center => column.center(),
        Align::Right => column.right(),
    };
    for item in items.lines() {
        let lines = wrap_text(item, style.body.font, style.body.size, width);
        write_lines(flow, target.region, lines, style.body, x, style.align);
    }
    flow.advance(target.region, style.after);
}

fn badges(flow: &mut Flow, target: &Target<'_>, items: &TextList, badge: &BadgeStyle) {
    let region = target.region;
    let column = target.column;
    let terms: Vec<&str> = items.terms().into_iter().take(badge.max).collect();
    let rows: Vec<&[&str]> = terms.chunks(badge.per_row.max(1)).collect();

    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            flow.advance(region, badge.step_y);
        }
        flow.ensure_space(region, badge.height);
        let y = flow.y(region);
        for (i, term) in row.iter().enumerate() {
            let x = column.x + i as f32 * badge.step_x;
            flow.push(
                region,
                DrawOp::Rect {
                    x,
                    y: y + BADGE_DESCENT - badge.height,
                    w: badge.width,
                    h: badge.height,
                    radius: badge.radius,
                    fill: Some(badge.fill),
                    stroke: None,
                },
            );
            let label: String = term.chars().take(badge.max_chars).collect();
            flow.push(
                region,
                text_op(label, x + badge.width / 2.0, y, badge.text, Align::Center),
            );
        }
    }
    flow.advance(region, badge.after);
}

fn references(flow: &mut Flow, target: &Target<'_>, resume: &Resume<'_>) {
    let region = target.region;
    let style = &target.styles.references;
    let x = target.column.x + style.indent;
    let width = target.column.right() - x;

    for reference in &resume.references {
        flow.ensure_space(region, style.needed);
        single_line(flow, region, reference.name.trim(), x, style.name);
        let contact = reference.contact.trim();
        if !contact.is_empty() {
            let lines = wrap_text(contact, style.contact.font, style.contact.size, width);
            write_lines(flow, region, lines, style.contact, x, Align::Left);
        }
        flow.advance(region, style.after);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line helpers
// ────────────────────────────────────────────────────────────────────────────

/// Prints one unwrapped line and advances by its leading; empty text prints
/// and advances nothing.
fn single_line(flow: &mut Flow, region: Region, text: &str, x: f32, style: TextStyle) {
    if text.is_empty() {
        return;
    }
    let y = flow.y(region);
    flow.push(region, text_op(text, x, y, style, Align::Left));
    flow.advance(region, style.leading);
}

/// Prints pre-wrapped lines, breaking the page before any line that would
/// not fit.
fn write_lines(
    flow: &mut Flow,
    region: Region,
    lines: Vec<String>,
    style: TextStyle,
    x: f32,
    align: Align,
) {
    for line in lines {
        flow.ensure_space(region, style.leading);
        let y = flow.y(region);
        flow.push(region, text_op(line, x, y, style, align));
        flow.advance(region, style.leading);
    }
}
