//! Classic Professional: black on white, underlined headings, dates flush right.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;

const MAIN: Column = Column::new(20.0, 170.0);

const CONTACT: TextStyle = TextStyle::new(Font::HELVETICA, 9.0, GRAY_60, 5.0);

pub const ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::DatesRight,
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 10.0, BLACK, 5.0),
    org: TextStyle::new(Font::HELVETICA_ITALIC, 10.0, BLACK, 6.0),
    meta: TextStyle::new(Font::HELVETICA, 10.0, BLACK, 0.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, BLACK, 4.0),
    bullets: true,
    body_indent: 3.0,
    hanging: 3.0,
    desc_after: 2.0,
    after: 3.0,
    needed: 15.0,
};

pub const STYLES: SectionStyles = SectionStyles {
    heading: SectionHeading {
        style: TextStyle::new(Font::HELVETICA_BOLD, 12.0, BLACK, 0.0),
        align: Align::Left,
        rule: HeadingRule::Underline {
            offset: 2.0,
            stroke: Stroke {
                color: BLACK,
                width: 0.5,
            },
        },
        after: 9.0,
        needed: 20.0,
    },
    work: ENTRY,
    education: ENTRY,
    list: ListStyle {
        body: TextStyle::new(Font::HELVETICA, 9.0, BLACK, 4.5),
        indent: 0.0,
        align: Align::Left,
        after: 5.0,
    },
    skills: SkillsPresentation::Lines,
    references: ReferenceStyle {
        name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, BLACK, 5.0),
        contact: TextStyle::new(Font::HELVETICA, 9.0, BLACK, 4.0),
        indent: 0.0,
        after: 2.0,
        needed: 10.0,
    },
    section_after: 2.0,
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
        top: 20.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(160.0),
                y: PhotoY::At(20.0),
                size: 30.0,
                shape: PhotoShape::Square,
                border: None,
                halo: None,
                advance: None,
            }),
            HeaderItem::MoveTo(25.0),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 24.0, BLACK, 5.0),
                uppercase: false,
                after: 0.0,
            },
            HeaderItem::Contact {
                fields: CONTACT_LINE,
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
            HeaderItem::Gap(3.0),
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA_BOLD, 11.0, BLACK, 8.0),
                fallback: None,
                after: 0.0,
            },
        ],
        body_start: None,
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, BLACK, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: None,
        after: 8.0,
    },
    lead: &[Lead::Summary],
    styles: STYLES,
    titles: TITLES_UPPER,
    sidebar: None,
};
