//! Timeline: entries hang off a vertical rail of dots.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(20.0, 170.0);

const CONTACT: TextStyle = TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0);

const ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::Stacked,
    marker: Marker::Dot {
        x: 25.0,
        r: 2.0,
        color: BLUE_600,
        stem: Some(Stroke {
            color: BLUE_100,
            width: 1.0,
        }),
    },
    indent: 15.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 11.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 4.0),
    meta: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 6.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
    bullets: true,
    body_indent: 0.0,
    hanging: 3.0,
    desc_after: 4.0,
    after: 6.0,
    needed: 20.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 260.0,
    bands: Bands::NONE,
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Left,
        top: 25.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(165.0),
                y: PhotoY::At(20.0),
                size: 25.0,
                shape: PhotoShape::Circle,
                border: Some(Stroke {
                    color: BLUE_600,
                    width: 1.0,
                }),
                halo: None,
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 22.0, BLUE_600, 10.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 11.0, SLATE_600, 6.0),
                fallback: None,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                    ContactField::plain(Field::Address),
                ],
                separator: " | ",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: LINKS_LINE,
                separator: " | ",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Gap(10.0),
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: None,
        after: 15.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA_BOLD, 14.0, BLUE_600, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 10.0,
            needed: 25.0,
        },
        work: ENTRY,
        education: EntryStyle {
            marker: Marker::Dot {
                x: 25.0,
                r: 2.0,
                color: SLATE_500,
                stem: None,
            },
            ..ENTRY
        },
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 15.0,
            align: Align::Left,
            after: 8.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 15.0,
            after: 4.0,
            needed: 10.0,
        },
        section_after: 4.0,
    },
    titles: SectionTitles {
        work: "CAREER TIMELINE",
        ..TITLES_UPPER
    },
    sidebar: None,
};
