//! Tech/Developer: green accents, `//` comment-style headings, `>` prompts.

use super::sheet::*;
use crate::document::{Align, Rgb, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const GREEN: Rgb = Rgb(16, 185, 129);
const MAIN: Column = Column::new(20.0, 170.0);

const ENTRY: EntryStyle = EntryStyle {
    marker: Marker::Glyph {
        text: ">",
        style: TextStyle::new(Font::HELVETICA_BOLD, 10.0, GREEN, 0.0),
    },
    indent: 5.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::HELVETICA_ITALIC, 10.0, SLATE_500, 6.0),
    meta: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 0.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
    ..super::classic::ENTRY
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 270.0,
    bands: Bands::NONE,
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Left,
        top: 25.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(165.0),
                y: PhotoY::At(25.0),
                size: 28.0,
                shape: PhotoShape::Square,
                border: Some(Stroke {
                    color: GREEN,
                    width: 1.0,
                }),
                halo: None,
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 22.0, GREEN, 8.0),
                uppercase: true,
                after: 0.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 11.0, SLATE_600, 12.0),
                fallback: Some("TECHNICAL PROFESSIONAL"),
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                    ContactField::plain(Field::Address),
                ],
                separator: " • ",
                style: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::labeled(Field::Github, "github: "),
                    ContactField::labeled(Field::Linkedin, "linkedin: "),
                ],
                separator: " • ",
                style: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
                after: 0.0,
            },
            HeaderItem::Gap(8.0),
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: None,
        after: 10.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA_BOLD, 12.0, GREEN, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 7.0,
            needed: 20.0,
        },
        work: ENTRY,
        education: ENTRY,
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
            indent: 0.0,
            align: Align::Left,
            after: 7.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
            indent: 5.0,
            after: 3.0,
            needed: 10.0,
        },
        section_after: 3.0,
    },
    titles: SectionTitles {
        summary: Some("// PROFESSIONAL SUMMARY"),
        work: "// WORK EXPERIENCE",
        education: "// EDUCATION",
        skills: "// TECHNICAL SKILLS",
        certifications: "// CERTIFICATIONS",
        references: "// REFERENCES",
    },
    sidebar: None,
};
