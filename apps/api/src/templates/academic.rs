//! Academic: serif, centred masthead, education ahead of research interests.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(20.0, 170.0);

const CONTACT: TextStyle = TextStyle::new(Font::TIMES, 9.0, SLATE_500, 4.0);

const ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::Inline { separator: ", " },
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::TIMES_BOLD, 11.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::TIMES, 10.0, SLATE_500, 5.0),
    meta: TextStyle::new(Font::TIMES, 10.0, SLATE_500, 5.0),
    body: TextStyle::new(Font::TIMES, 10.0, SLATE_600, 5.0),
    bullets: true,
    body_indent: 3.0,
    hanging: 3.0,
    desc_after: 2.0,
    after: 3.0,
    needed: 15.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 270.0,
    bands: Bands::NONE,
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Center,
        top: 30.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(168.0),
                y: PhotoY::At(25.0),
                size: 22.0,
                shape: PhotoShape::Square,
                border: Some(Stroke {
                    color: SLATE_500,
                    width: 0.5,
                }),
                halo: None,
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::TIMES_BOLD, 24.0, SLATE_900, 8.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::TIMES, 12.0, BLUE_600, 6.0),
                fallback: None,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[ContactField::plain(Field::Address)],
                separator: "",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                ],
                separator: " | ",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: LINKS_LINE,
                separator: "   ",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Gap(7.0),
            HeaderItem::Rule {
                x1: 20.0,
                x2: 190.0,
                stroke: Stroke {
                    color: BLUE_600,
                    width: 0.3,
                },
                after: 10.0,
            },
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::TIMES, 10.0, SLATE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: None,
        after: 10.0,
    },
    lead: &[Lead::Education, Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::TIMES_BOLD, 13.0, BLUE_600, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 7.0,
            needed: 20.0,
        },
        work: ENTRY,
        education: ENTRY,
        list: ListStyle {
            body: TextStyle::new(Font::TIMES, 10.0, SLATE_600, 5.0),
            indent: 0.0,
            align: Align::Left,
            after: 8.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::TIMES_BOLD, 11.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::TIMES, 10.0, SLATE_500, 5.0),
            indent: 0.0,
            after: 3.0,
            needed: 10.0,
        },
        section_after: 5.0,
    },
    titles: SectionTitles {
        summary: Some("RESEARCH INTERESTS"),
        work: "PROFESSIONAL EXPERIENCE",
        ..TITLES_UPPER
    },
    sidebar: None,
};
