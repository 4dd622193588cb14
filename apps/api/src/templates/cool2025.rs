//! Cool2025: serif, brand blue, ruled masthead, flanked centred headings and
//! a date column beside each role.

use super::sheet::*;
use crate::document::{Align, Rgb, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const BRAND: Rgb = Rgb(30, 106, 170);
const BRAND_LIGHT: Rgb = Rgb(100, 150, 200);
const INK: Rgb = Rgb(40, 40, 40);
const MAIN: Column = Column::new(20.0, 170.0);

const BRAND_RULE: Stroke = Stroke {
    color: BRAND,
    width: 0.5,
};

const BODY: TextStyle = TextStyle::new(Font::TIMES, 9.0, INK, 4.0);

const WORK: EntryStyle = EntryStyle {
    layout: EntryLayout::DateColumn { offset: 40.0 },
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::TIMES_BOLD, 10.0, BLACK, 6.0),
    org: TextStyle::new(Font::TIMES_ITALIC, 10.0, BRAND, 5.0),
    meta: TextStyle::new(Font::TIMES, 10.0, GRAY_60, 0.0),
    body: BODY,
    bullets: true,
    body_indent: 0.0,
    hanging: 3.0,
    desc_after: 5.0,
    after: 0.0,
    needed: 25.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 277.0,
    bands: Bands::NONE,
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Center,
        top: 15.0,
        items: &[
            HeaderItem::Rule {
                x1: 20.0,
                x2: 190.0,
                stroke: BRAND_RULE,
                after: 10.0,
            },
            HeaderItem::Name {
                style: TextStyle::new(Font::TIMES_BOLD, 22.0, BRAND, 8.0),
                uppercase: true,
                after: 0.0,
            },
            HeaderItem::Rule {
                x1: 20.0,
                x2: 190.0,
                stroke: BRAND_RULE,
                after: 8.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Address),
                    ContactField::plain(Field::Phone),
                    ContactField::plain(Field::Email),
                ],
                separator: "  •  ",
                style: TextStyle::new(Font::TIMES, 9.0, Rgb(80, 80, 80), 5.0),
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::labeled(Field::Linkedin, "in "),
                    ContactField::plain(Field::Github),
                ],
                separator: "    ",
                style: TextStyle::new(Font::TIMES, 8.0, BRAND_LIGHT, 5.0),
                after: 3.0,
            },
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::Centered,
                y: PhotoY::Cursor,
                size: 25.0,
                shape: PhotoShape::Circle,
                border: None,
                halo: None,
                advance: Some(8.0),
            }),
            HeaderItem::Title {
                style: TextStyle::new(Font::TIMES, 12.0, BRAND, 10.0),
                fallback: None,
                after: 0.0,
            },
            HeaderItem::Gap(2.0),
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: BODY,
        indent: 5.0,
        align: Align::Left,
        panel: None,
        after: 8.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::TIMES, 12.0, BRAND, 0.0),
            align: Align::Center,
            rule: HeadingRule::Flanked {
                length: 35.0,
                gap: 5.0,
                stroke: Stroke {
                    color: Rgb(180, 180, 180),
                    width: 0.3,
                },
            },
            after: 7.0,
            needed: 20.0,
        },
        work: WORK,
        education: EntryStyle {
            layout: EntryLayout::Stacked,
            title: TextStyle::new(Font::TIMES_BOLD, 10.0, BLACK, 5.0),
            meta: TextStyle::new(Font::TIMES, 9.0, GRAY_60, 5.0),
            bullets: false,
            needed: 15.0,
            ..WORK
        },
        list: ListStyle {
            body: BODY,
            indent: 5.0,
            align: Align::Left,
            after: 8.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::TIMES_BOLD, 10.0, BLACK, 5.0),
            contact: TextStyle::new(Font::TIMES, 9.0, GRAY_60, 4.0),
            indent: 0.0,
            after: 5.0,
            needed: 12.0,
        },
        section_after: 3.0,
    },
    titles: SectionTitles {
        summary: Some("Professional Summary"),
        work: "Work experience",
        ..TITLES_PLAIN
    },
    sidebar: None,
};
