//! Infographic: banner masthead, skill badges, icon dots beside entries.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(20.0, 170.0);

const BANNER_TEXT: TextStyle = TextStyle::new(Font::HELVETICA, 9.0, WHITE, 5.0);

const ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::Inline { separator: " | " },
    marker: Marker::Dot {
        x: 25.0,
        r: 3.0,
        color: BLUE_600,
        stem: None,
    },
    indent: 15.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 11.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
    meta: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
    bullets: true,
    body_indent: 0.0,
    hanging: 3.0,
    desc_after: 3.0,
    after: 5.0,
    needed: 18.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 270.0,
    bands: Bands {
        first_page: &[Band {
            x: 0.0,
            y: 0.0,
            w: 210.0,
            h: 35.0,
            color: BLUE_600,
        }],
        every_page: &[],
        continuation: &[Band {
            x: 0.0,
            y: 0.0,
            w: 210.0,
            h: 8.0,
            color: BLUE_600,
        }],
    },
    header: Header {
        region: Region::Main,
        column: MAIN,
        align: Align::Center,
        top: 14.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(168.0),
                y: PhotoY::At(5.5),
                size: 24.0,
                shape: PhotoShape::Circle,
                border: Some(Stroke {
                    color: WHITE,
                    width: 1.5,
                }),
                halo: Some((WHITE, 1.5)),
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 24.0, WHITE, 7.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 11.0, WHITE, 6.0),
                fallback: None,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                ],
                separator: " | ",
                style: BANNER_TEXT,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: LINKS_LINE,
                separator: " | ",
                style: BANNER_TEXT,
                after: 0.0,
            },
        ],
        body_start: Some(52.0),
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, BLUE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: Some(Panel {
            fill: BLUE_100,
            radius: 3.0,
            pad: 5.0,
        }),
        after: 15.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA_BOLD, 13.0, BLUE_600, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 10.0,
            needed: 25.0,
        },
        work: ENTRY,
        education: ENTRY,
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 0.0,
            align: Align::Left,
            after: 8.0,
        },
        skills: SkillsPresentation::Badges(BadgeStyle {
            max: 8,
            per_row: 3,
            width: 55.0,
            height: 8.0,
            step_x: 60.0,
            step_y: 12.0,
            radius: 2.0,
            max_chars: 20,
            fill: BLUE_600,
            text: TextStyle::new(Font::HELVETICA, 8.0, WHITE, 0.0),
            after: 15.0,
        }),
        references: ReferenceStyle {
            name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 0.0,
            after: 4.0,
            needed: 10.0,
        },
        section_after: 3.0,
    },
    titles: SectionTitles {
        work: "PROFESSIONAL JOURNEY",
        skills: "CORE COMPETENCIES",
        ..TITLES_UPPER
    },
    sidebar: None,
};
