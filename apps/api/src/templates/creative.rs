//! Creative Bold: full-width colour band, accent bars, tinted summary panel.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(20.0, 170.0);

const WORK: EntryStyle = EntryStyle {
    layout: EntryLayout::Inline { separator: " | " },
    marker: Marker::Bar {
        x: 15.0,
        w: 2.0,
        h: 15.0,
        color: BLUE_600,
    },
    indent: 2.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 12.0, SLATE_900, 6.0),
    org: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 5.0),
    meta: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 5.0),
    body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
    bullets: false,
    body_indent: 0.0,
    hanging: 0.0,
    desc_after: 5.0,
    after: 3.0,
    needed: 15.0,
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
            h: 40.0,
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
        column: Column::new(20.0, 140.0),
        align: Align::Left,
        top: 20.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(165.0),
                y: PhotoY::At(7.5),
                size: 25.0,
                shape: PhotoShape::Circle,
                border: Some(Stroke {
                    color: WHITE,
                    width: 1.0,
                }),
                halo: Some((WHITE, 1.0)),
                advance: None,
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 26.0, WHITE, 10.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::MoveTo(30.0),
            HeaderItem::Contact {
                fields: &[
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Phone),
                ],
                separator: " | ",
                style: TextStyle::new(Font::HELVETICA, 10.0, WHITE, 6.0),
                after: 0.0,
            },
            HeaderItem::MoveTo(36.0),
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 12.0, WHITE, 0.0),
                fallback: None,
                after: 0.0,
            },
            // Below the band: white text would vanish on the page.
            HeaderItem::MoveTo(48.0),
            HeaderItem::Contact {
                fields: &[
                    ContactField::labeled(Field::Linkedin, "LinkedIn: "),
                    ContactField::labeled(Field::Github, "GitHub: "),
                ],
                separator: " | ",
                style: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 0.0),
                after: 0.0,
            },
        ],
        body_start: Some(60.0),
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, BLUE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: Some(Panel {
            fill: BLUE_100,
            radius: 2.0,
            pad: 5.0,
        }),
        after: 15.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA_BOLD, 16.0, BLUE_600, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 8.0,
            needed: 20.0,
        },
        work: WORK,
        education: EntryStyle {
            layout: EntryLayout::Inline { separator: " - " },
            marker: Marker::None,
            indent: 0.0,
            title: TextStyle::new(Font::HELVETICA, 11.0, SLATE_900, 5.0),
            org: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 8.0),
            meta: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 8.0),
            ..WORK
        },
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_900, 5.0),
            indent: 0.0,
            align: Align::Left,
            after: 8.0,
        },
        skills: SkillsPresentation::Lines,
        references: ReferenceStyle {
            name: TextStyle::new(Font::HELVETICA_BOLD, 11.0, SLATE_900, 5.0),
            contact: TextStyle::new(Font::HELVETICA, 10.0, SLATE_500, 5.0),
            indent: 0.0,
            after: 4.0,
            needed: 10.0,
        },
        section_after: 2.0,
    },
    titles: SectionTitles {
        work: "EXPERIENCE",
        ..TITLES_UPPER
    },
    sidebar: None,
};
