//! The rendering engine: one generic routine interpreting a `StyleSheet`.
//!
//! A render is a pure, synchronous pass: header, then the sheet's lead blocks,
//! then the caller's section order. Nothing is shared between calls, so any
//! number of renders may run side by side.

mod header;
mod sections;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::document::{Align, Document, DrawOp, ExportError, PageSize, Photo, TextRun};
use crate::layout::flow::{Decoration, Flow, Frame};
use crate::models::{
    EducationEntry, PersonalInfo, ReferenceEntry, ResumeSnapshot, SectionDescriptor, SectionKind,
    TextList, WorkExperienceEntry,
};
use crate::templates::sheet::{Band, Lead, StyleSheet, TextStyle};
use crate::templates::TemplateStyle;

use sections::Target;

// ────────────────────────────────────────────────────────────────────────────
// Render input
// ────────────────────────────────────────────────────────────────────────────

/// The snapshot as the renderer sees it: blank entries dropped, free-text
/// lists parsed, the photo decoded once.
pub(crate) struct Resume<'a> {
    pub personal: &'a PersonalInfo,
    pub work: Vec<&'a WorkExperienceEntry>,
    pub education: Vec<&'a EducationEntry>,
    pub references: Vec<&'a ReferenceEntry>,
    pub skills: TextList,
    pub certifications: TextList,
    pub photo: Option<Arc<Photo>>,
}

impl<'a> Resume<'a> {
    fn new(
        personal: &'a PersonalInfo,
        work: &'a [WorkExperienceEntry],
        education: &'a [EducationEntry],
        references: &'a [ReferenceEntry],
    ) -> Self {
        let photo = personal
            .photo_payload()
            .and_then(|payload| match Photo::from_data_url(payload) {
                Ok(photo) => Some(Arc::new(photo)),
                Err(e) => {
                    warn!("Skipping undecodable photo: {e}");
                    None
                }
            });

        Self {
            personal,
            work: work.iter().filter(|entry| !entry.is_blank()).collect(),
            education: education.iter().filter(|entry| !entry.is_blank()).collect(),
            references: references.iter().filter(|entry| !entry.is_blank()).collect(),
            skills: TextList::parse(&personal.skills),
            certifications: TextList::parse(&personal.certifications),
            photo,
        }
    }

    /// Whether the section has anything to print.
    pub fn has(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::WorkExperience => !self.work.is_empty(),
            SectionKind::Education => !self.education.is_empty(),
            SectionKind::Skills => !self.skills.is_empty(),
            SectionKind::Certifications => !self.certifications.is_empty(),
            SectionKind::References => !self.references.is_empty(),
        }
    }
}

/// A text op in `style` anchored at `x` according to `align`.
pub(crate) fn text_op(text: impl Into<String>, x: f32, y: f32, style: TextStyle, align: Align) -> DrawOp {
    DrawOp::Text(TextRun {
        text: text.into(),
        x,
        y,
        font: style.font,
        size_pt: style.size,
        color: style.color,
        align,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

pub fn render(style: TemplateStyle, snapshot: &ResumeSnapshot) -> Document {
    render_parts(
        style,
        &snapshot.personal_info,
        &snapshot.work_experience,
        &snapshot.education,
        &snapshot.references,
        &snapshot.section_order,
    )
}

/// Renders with a wire tag; unknown tags fall back to the default template.
pub fn render_tag(tag: &str, snapshot: &ResumeSnapshot) -> Document {
    render(TemplateStyle::parse_or_default(tag), snapshot)
}

pub fn render_to_pdf(style: TemplateStyle, snapshot: &ResumeSnapshot) -> Result<Vec<u8>, ExportError> {
    render(style, snapshot).to_pdf_bytes()
}

pub fn render_parts(
    style: TemplateStyle,
    personal: &PersonalInfo,
    work: &[WorkExperienceEntry],
    education: &[EducationEntry],
    references: &[ReferenceEntry],
    section_order: &[SectionDescriptor],
) -> Document {
    let sheet = style.sheet();
    let resume = Resume::new(personal, work, education, references);

    let main = Frame {
        top: sheet.top,
        bottom: sheet.bottom,
    };
    let sidebar = sheet.sidebar.map_or(main, |sidebar| Frame {
        top: sidebar.top,
        bottom: sidebar.bottom,
    });
    let decoration = Decoration {
        first_page: band_ops(sheet.bands.first_page),
        every_page: band_ops(sheet.bands.every_page),
        continuation: band_ops(sheet.bands.continuation),
    };
    let mut flow = Flow::new(PageSize::A4, main, sidebar, decoration);

    header::render_header(&mut flow, &sheet.header, &resume);

    let wants_education = section_order
        .iter()
        .any(|section| section.kind == SectionKind::Education);
    let mut printed: Vec<SectionKind> = Vec::with_capacity(SectionKind::ALL.len());

    for lead in sheet.lead {
        match lead {
            Lead::Summary => sections::render_summary(&mut flow, sheet, &resume),
            Lead::Education if wants_education => {
                render_kind(&mut flow, sheet, SectionKind::Education, &resume);
                printed.push(SectionKind::Education);
            }
            Lead::Education => {}
        }
    }

    for section in section_order {
        if printed.contains(&section.kind) {
            continue;
        }
        render_kind(&mut flow, sheet, section.kind, &resume);
        printed.push(section.kind);
    }

    debug!(template = %style, pages = flow.page_count(), "Rendered resume");
    flow.finish()
}

fn render_kind(flow: &mut Flow, sheet: &StyleSheet, kind: SectionKind, resume: &Resume<'_>) {
    let target = Target::for_kind(sheet, kind);
    sections::render_section(flow, &target, kind, resume);
}

fn band_ops(bands: &[Band]) -> Vec<DrawOp> {
    bands
        .iter()
        .map(|band| DrawOp::Rect {
            x: band.x,
            y: band.y,
            w: band.w,
            h: band.h,
            radius: 0.0,
            fill: Some(band.color),
            stroke: None,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Bulk preview
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of rendering one template during a bulk preview.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    pub template: TemplateStyle,
    pub pages: usize,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Renders the snapshot with every template, each independently.
pub fn render_all(snapshot: &ResumeSnapshot) -> Vec<RenderSummary> {
    TemplateStyle::ALL
        .into_iter()
        .map(|template| {
            let doc = render(template, snapshot);
            let pages = doc.page_count();
            match doc.to_pdf_bytes() {
                Ok(bytes) => RenderSummary {
                    template,
                    pages,
                    bytes: bytes.len(),
                    error: None,
                },
                Err(e) => {
                    warn!(%template, "PDF export failed: {e}");
                    RenderSummary {
                        template,
                        pages,
                        bytes: 0,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::photo::{tiny_jpeg_data_url, tiny_png_data_url};
    use crate::document::ImageClip;
    use crate::layout::flow::Region;

    fn jane() -> ResumeSnapshot {
        ResumeSnapshot {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                ..PersonalInfo::default()
            },
            work_experience: vec![WorkExperienceEntry {
                job_title: "Engineer".to_string(),
                company: "Acme".to_string(),
                start_date: "2020".to_string(),
                end_date: "Present".to_string(),
                description: "• Did X\n• Did Y".to_string(),
            }],
            education: Vec::new(),
            references: Vec::new(),
            section_order: vec![SectionDescriptor::new(SectionKind::WorkExperience)],
        }
    }

    fn order(kinds: &[SectionKind]) -> Vec<SectionDescriptor> {
        kinds.iter().copied().map(SectionDescriptor::new).collect()
    }

    fn texts(doc: &Document) -> Vec<String> {
        doc.text_runs().map(|(_, run)| run.text.clone()).collect()
    }

    fn count(doc: &Document, text: &str) -> usize {
        doc.text_runs().filter(|(_, run)| run.text == text).count()
    }

    /// Texts printed after the first run equal to `heading`.
    fn after_heading(doc: &Document, heading: &str) -> Vec<String> {
        texts(doc)
            .into_iter()
            .skip_while(|text| text != heading)
            .skip(1)
            .collect()
    }

    fn heading_index(doc: &Document, sheet: &StyleSheet, title: &str) -> Option<usize> {
        let font = sheet.styles.heading.style.font;
        doc.text_runs()
            .position(|(_, run)| run.text == title && run.font == font)
    }

    /// Empties the data behind one section kind.
    fn without_data(mut snapshot: ResumeSnapshot, kind: SectionKind) -> ResumeSnapshot {
        match kind {
            SectionKind::WorkExperience => {
                for entry in &mut snapshot.work_experience {
                    entry.job_title.clear();
                    entry.company.clear();
                }
            }
            SectionKind::Education => snapshot.education.clear(),
            SectionKind::Skills => snapshot.personal_info.skills = "  \n ".to_string(),
            SectionKind::Certifications => snapshot.personal_info.certifications.clear(),
            SectionKind::References => {
                for entry in &mut snapshot.references {
                    entry.name.clear();
                    entry.contact.clear();
                }
            }
        }
        snapshot
    }

    fn permutations(items: &[SectionKind]) -> Vec<Vec<SectionKind>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (i, first) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, *first);
                out.push(tail);
            }
        }
        out
    }

    // ── Worked examples ────────────────────────────────────────────────────

    #[test]
    fn test_classic_single_work_entry() {
        let doc = render(TemplateStyle::Classic, &jane());

        assert_eq!(doc.page_count(), 1);
        assert_eq!(count(&doc, "WORK EXPERIENCE"), 1);
        for absent in ["EDUCATION", "SKILLS", "CERTIFICATIONS", "REFERENCES"] {
            assert_eq!(count(&doc, absent), 0, "{absent}");
        }

        let body = after_heading(&doc, "WORK EXPERIENCE");
        let bullets: Vec<&String> = body.iter().filter(|text| text.starts_with('•')).collect();
        assert_eq!(bullets, ["• Did X", "• Did Y"]);
        assert!(body.contains(&"Engineer".to_string()));
        assert!(body.contains(&"Acme".to_string()));
        assert!(body.contains(&"2020 – Present".to_string()));
    }

    #[test]
    fn test_tech_decorates_heading_but_keeps_entry_content() {
        let classic = render(TemplateStyle::Classic, &jane());
        let tech = render(TemplateStyle::Tech, &jane());

        assert_eq!(count(&tech, "// WORK EXPERIENCE"), 1);
        assert_eq!(count(&tech, "WORK EXPERIENCE"), 0);

        let classic_body = after_heading(&classic, "WORK EXPERIENCE");
        let tech_body: Vec<String> = after_heading(&tech, "// WORK EXPERIENCE")
            .into_iter()
            .filter(|text| text != ">")
            .collect();
        assert_eq!(classic_body, tech_body);
        assert_eq!(tech.page_count(), 1);
    }

    #[test]
    fn test_empty_skills_first_in_order_contributes_nothing() {
        let mut snapshot = jane();
        snapshot.section_order = order(&[SectionKind::Skills, SectionKind::WorkExperience]);
        let doc = render(TemplateStyle::Classic, &snapshot);

        assert_eq!(count(&doc, "SKILLS"), 0);
        let sheet = TemplateStyle::Classic.sheet();
        assert!(heading_index(&doc, sheet, "WORK EXPERIENCE").is_some());
        assert_eq!(doc, render(TemplateStyle::Classic, &jane()));
    }

    // ── Properties ─────────────────────────────────────────────────────────

    #[test]
    fn test_rendering_is_byte_identical() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.personal_info.photo = Some(tiny_jpeg_data_url());
        for style in TemplateStyle::ALL {
            let first = render_to_pdf(style, &snapshot).unwrap();
            let second = render_to_pdf(style, &snapshot).unwrap();
            assert_eq!(first, second, "{style}");
        }
    }

    #[test]
    fn test_empty_section_equals_removed_section() {
        for style in TemplateStyle::ALL {
            for kind in SectionKind::ALL {
                let emptied = without_data(ResumeSnapshot::sample(), kind);
                let mut removed = ResumeSnapshot::sample();
                removed.section_order.retain(|section| section.kind != kind);

                assert_eq!(
                    render(style, &emptied),
                    render(style, &removed),
                    "{style} / {kind:?}"
                );
            }
        }
    }

    #[test]
    fn test_sections_follow_caller_order() {
        for style in TemplateStyle::ALL {
            let sheet = style.sheet();
            for kinds in permutations(&SectionKind::ALL) {
                let mut snapshot = ResumeSnapshot::sample();
                snapshot.section_order = order(&kinds);
                let doc = render(style, &snapshot);

                // Sidebar kinds and forced leads are placed by the sheet, not the caller.
                let main: Vec<SectionKind> = kinds
                    .iter()
                    .copied()
                    .filter(|kind| sheet.region_of(*kind) == Region::Main)
                    .filter(|kind| !(*kind == SectionKind::Education && sheet.lead.contains(&Lead::Education)))
                    .collect();
                let positions: Vec<usize> = main
                    .iter()
                    .map(|kind| {
                        heading_index(&doc, sheet, sheet.titles.title(*kind))
                            .unwrap_or_else(|| panic!("{style}: missing {kind:?}"))
                    })
                    .collect();
                assert!(
                    positions.windows(2).all(|pair| pair[0] < pair[1]),
                    "{style}: {main:?} printed as {positions:?}"
                );
            }
        }
    }

    #[test]
    fn test_academic_prints_education_before_summary() {
        let sheet = TemplateStyle::Academic.sheet();
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.section_order = order(&[
            SectionKind::Skills,
            SectionKind::WorkExperience,
            SectionKind::Education,
        ]);
        let doc = render(TemplateStyle::Academic, &snapshot);

        let education = heading_index(&doc, sheet, "EDUCATION").unwrap();
        let summary = heading_index(&doc, sheet, "RESEARCH INTERESTS").unwrap();
        let skills = heading_index(&doc, sheet, "SKILLS").unwrap();
        let work = heading_index(&doc, sheet, "PROFESSIONAL EXPERIENCE").unwrap();
        assert!(education < summary);
        assert!(summary < skills);
        assert!(skills < work);
        assert_eq!(count(&doc, "EDUCATION"), 1);
    }

    #[test]
    fn test_academic_skips_education_lead_when_not_ordered() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.section_order = order(&[SectionKind::Skills]);
        let doc = render(TemplateStyle::Academic, &snapshot);
        assert_eq!(count(&doc, "EDUCATION"), 0);
    }

    #[test]
    fn test_duplicate_sections_print_once() {
        let mut snapshot = jane();
        snapshot.section_order = order(&[SectionKind::WorkExperience, SectionKind::WorkExperience]);
        let doc = render(TemplateStyle::Classic, &snapshot);
        assert_eq!(count(&doc, "WORK EXPERIENCE"), 1);
    }

    #[test]
    fn test_long_description_continues_without_loss() {
        let lines: Vec<String> = (1..=80).map(|i| format!("• Shipped milestone {i:02}")).collect();
        let mut snapshot = jane();
        snapshot.work_experience[0].description = lines.join("\n");

        for style in TemplateStyle::ALL {
            let doc = render(style, &snapshot);
            assert!(doc.page_count() >= 2, "{style}");

            let printed: Vec<String> = texts(&doc)
                .into_iter()
                .filter(|text| text.contains("Shipped milestone"))
                .collect();
            assert_eq!(printed, lines, "{style}");

            let bytes = doc.to_pdf_bytes().unwrap();
            let reloaded = lopdf::Document::load_mem(&bytes).unwrap();
            assert_eq!(reloaded.get_pages().len(), doc.page_count(), "{style}");
        }
    }

    #[test]
    fn test_long_education_description_continues_without_loss() {
        let lines: Vec<String> = (1..=80).map(|i| format!("• Course {i:02}")).collect();
        let mut snapshot = jane();
        snapshot.education = vec![EducationEntry {
            degree: "BSc Physics".to_string(),
            institution: "State University".to_string(),
            year: "2016".to_string(),
            description: lines.join("\n"),
        }];
        snapshot.section_order = order(&[SectionKind::WorkExperience, SectionKind::Education]);

        for style in TemplateStyle::ALL {
            let doc = render(style, &snapshot);
            assert!(doc.page_count() >= 2, "{style}");

            let printed: Vec<String> = texts(&doc)
                .into_iter()
                .filter(|text| text.starts_with("• Course"))
                .collect();
            assert_eq!(printed, lines, "{style}");
            assert_eq!(count(&doc, "BSc Physics"), 1, "{style}");
        }
    }

    #[test]
    fn test_summary_panel_splits_across_pages() {
        let lines: Vec<String> = (1..=70).map(|i| format!("Summary line {i:02}")).collect();
        let mut snapshot = jane();
        snapshot.personal_info.summary = lines.join("\n");

        for style in [TemplateStyle::Creative, TemplateStyle::Infographic] {
            let sheet = style.sheet();
            let panel = sheet.summary.panel.unwrap();
            let doc = render(style, &snapshot);
            assert!(doc.page_count() >= 2, "{style}");

            let runs: Vec<(usize, &TextRun)> = doc
                .text_runs()
                .filter(|(_, run)| run.text.starts_with("Summary line"))
                .collect();
            let printed: Vec<&str> = runs.iter().map(|(_, run)| run.text.as_str()).collect();
            assert_eq!(printed, lines, "{style}");
            assert_eq!(runs[0].0, 0, "{style}: summary should start on page 1");

            for (index, page) in doc.pages().iter().enumerate() {
                let panels: Vec<(f32, f32)> = page
                    .ops()
                    .iter()
                    .filter_map(|op| match op {
                        DrawOp::Rect { x, y, h, radius, fill, .. }
                            if *fill == Some(panel.fill)
                                && *radius == panel.radius
                                && *x == sheet.main.x - panel.pad =>
                        {
                            Some((*y, *h))
                        }
                        _ => None,
                    })
                    .collect();
                for (y, h) in &panels {
                    assert!(y + h <= sheet.bottom + 1e-3, "{style}: panel runs off page {index}");
                }
                for (_, run) in runs.iter().filter(|(page, _)| *page == index) {
                    assert!(
                        panels.iter().any(|(y, h)| *y < run.y && run.y <= y + h),
                        "{style}: {:?} on page {index} sits outside every panel",
                        run.text
                    );
                }
            }
        }
    }

    #[test]
    fn test_persistent_decoration_repainted_on_new_pages() {
        let lines: Vec<String> = (1..=80).map(|i| format!("• Item {i}")).collect();
        let mut snapshot = jane();
        snapshot.work_experience[0].description = lines.join("\n");

        let executive = render(TemplateStyle::Executive, &snapshot);
        for page in executive.pages() {
            assert!(matches!(
                page.ops()[0],
                DrawOp::Rect { x, w, h, .. } if x == 0.0 && w == 70.0 && h == 297.0
            ));
        }

        let creative = render(TemplateStyle::Creative, &snapshot);
        assert!(matches!(creative.pages()[0].ops()[0], DrawOp::Rect { h, .. } if h == 40.0));
        for page in &creative.pages()[1..] {
            assert!(matches!(page.ops()[0], DrawOp::Rect { h, .. } if h == 8.0));
        }
    }

    #[test]
    fn test_name_and_email_only_renders_header() {
        let snapshot = ResumeSnapshot {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                ..PersonalInfo::default()
            },
            ..ResumeSnapshot::default()
        };
        let allowed = ["Jane Doe", "JANE DOE", "jane@x.com", "TECHNICAL PROFESSIONAL"];

        for style in TemplateStyle::ALL {
            let doc = render(style, &snapshot);
            assert_eq!(doc.page_count(), 1, "{style}");
            for text in texts(&doc) {
                assert!(allowed.contains(&text.as_str()), "{style}: unexpected {text:?}");
            }
            assert_eq!(count(&doc, "jane@x.com"), 1, "{style}");
            assert!(!doc
                .pages()
                .iter()
                .flat_map(|page| page.ops())
                .any(|op| matches!(op, DrawOp::Image { .. })));
        }
    }

    #[test]
    fn test_photo_embedded_for_every_style() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.personal_info.photo = Some(tiny_jpeg_data_url());
        for style in TemplateStyle::ALL {
            let doc = render(style, &snapshot);
            let images = doc.pages()[0]
                .ops()
                .iter()
                .filter(|op| matches!(op, DrawOp::Image { .. }))
                .count();
            assert_eq!(images, 1, "{style}");
        }
    }

    #[test]
    fn test_png_photo_embedded_for_every_style() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.personal_info.photo = Some(tiny_png_data_url());
        for style in TemplateStyle::ALL {
            let doc = render(style, &snapshot);
            let images = doc.pages()[0]
                .ops()
                .iter()
                .filter(|op| matches!(op, DrawOp::Image { .. }))
                .count();
            assert_eq!(images, 1, "{style}");

            let bytes = doc.to_pdf_bytes().unwrap();
            let reloaded = lopdf::Document::load_mem(&bytes).unwrap();
            assert_eq!(reloaded.get_pages().len(), doc.page_count(), "{style}");
        }
    }

    #[test]
    fn test_rounded_photo_frame_clips_rounded() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.personal_info.photo = Some(tiny_jpeg_data_url());
        let doc = render(TemplateStyle::Executive, &snapshot);
        let clip = doc.pages()[0]
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Image { clip, .. } => Some(*clip),
                _ => None,
            })
            .unwrap();
        assert!(matches!(clip, ImageClip::Rounded(radius) if radius > 0.0));
    }

    #[test]
    fn test_undecodable_photo_renders_without_it() {
        let mut broken = ResumeSnapshot::sample();
        broken.personal_info.photo = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
        let mut garbage = ResumeSnapshot::sample();
        garbage.personal_info.photo = Some("data:image/jpeg;base64,@@@".to_string());
        let plain = ResumeSnapshot::sample();

        for style in TemplateStyle::ALL {
            assert_eq!(render(style, &broken), render(style, &plain), "{style}");
            assert_eq!(render(style, &garbage), render(style, &plain), "{style}");
        }
    }

    #[test]
    fn test_unknown_tag_renders_classic() {
        let snapshot = ResumeSnapshot::sample();
        assert_eq!(
            render_tag("vaporwave", &snapshot),
            render(TemplateStyle::Classic, &snapshot)
        );
        assert_eq!(
            render_tag("cool2025", &snapshot),
            render(TemplateStyle::Cool2025, &snapshot)
        );
    }

    #[test]
    fn test_sidebar_paginates_independently() {
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.personal_info.skills = (1..=70)
            .map(|i| format!("Skill number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        snapshot.section_order = order(&[SectionKind::Skills, SectionKind::WorkExperience]);

        let doc = render(TemplateStyle::TwoColumn, &snapshot);
        assert!(doc.page_count() >= 2);
        // Work experience still starts on page 1 beside the overflowing sidebar.
        let sheet = TemplateStyle::TwoColumn.sheet();
        let work_title = sheet.titles.title(SectionKind::WorkExperience);
        let (page, _) = doc
            .text_runs()
            .find(|(_, run)| run.text == work_title)
            .unwrap();
        assert_eq!(page, 0);
        assert_eq!(count(&doc, "Skill number 70"), 1);
    }

    #[test]
    fn test_render_all_reports_every_template() {
        let summaries = render_all(&ResumeSnapshot::sample());
        assert_eq!(summaries.len(), TemplateStyle::ALL.len());
        for summary in &summaries {
            assert!(summary.error.is_none(), "{}", summary.template);
            assert!(summary.pages >= 1);
            assert!(summary.bytes > 0);
        }
    }
}
