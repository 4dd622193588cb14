//! Elegant: narrow centred measure, hairline rule under the name.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(30.0, 150.0);

const CONTACT: TextStyle = TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 4.0);

const ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::Stacked,
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 11.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 4.0),
    meta: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 6.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
    bullets: false,
    body_indent: 0.0,
    hanging: 0.0,
    desc_after: 6.0,
    after: 3.0,
    needed: 15.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 265.0,
    bands: Bands::NONE,
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Center,
        top: 40.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::Centered,
                y: PhotoY::At(12.0),
                size: 20.0,
                shape: PhotoShape::Square,
                border: Some(Stroke {
                    color: SLATE_300,
                    width: 0.3,
                }),
                halo: None,
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA, 26.0, SLATE_900, 6.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::Rule {
                x1: 70.0,
                x2: 140.0,
                stroke: Stroke {
                    color: SLATE_300,
                    width: 0.3,
                },
                after: 8.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 11.0, BLUE_600, 6.0),
                fallback: None,
                after: 0.0,
            },
            HeaderItem::ContactStack {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                    ContactField::plain(Field::Address),
                ],
                style: CONTACT,
                gap: 0.0,
            },
            HeaderItem::Contact {
                fields: LINKS_LINE,
                separator: "  •  ",
                style: CONTACT,
                after: 0.0,
            },
            HeaderItem::Gap(11.0),
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
        indent: 0.0,
        align: Align::Center,
        panel: None,
        after: 12.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA, 11.0, BLUE_600, 0.0),
            align: Align::Center,
            rule: HeadingRule::None,
            after: 8.0,
            needed: 20.0,
        },
        work: ENTRY,
        education: ENTRY,
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 0.0,
            align: Align::Center,
            after: 8.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 0.0,
            after: 4.0,
            needed: 10.0,
        },
        section_after: 4.0,
    },
    titles: TITLES_PLAIN,
    sidebar: None,
};
