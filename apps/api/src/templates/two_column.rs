//! Two Column: tinted sidebar for identity, skills and education; experience
//! in the wide column.

use super::sheet::*;
use crate::document::{Align, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;
use crate::models::SectionKind;

const MAIN: Column = Column::new(70.0, 130.0);
const SIDE: Column = Column::new(10.0, 50.0);

const SIDE_TEXT: TextStyle = TextStyle::new(Font::HELVETICA, 8.0, SLATE_600, 4.0);

const WORK: EntryStyle = EntryStyle {
    layout: EntryLayout::Inline { separator: " | " },
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 11.0, SLATE_900, 5.0),
    org: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
    meta: TextStyle::new(Font::HELVETICA, 9.0, SLATE_500, 5.0),
    body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.0),
    bullets: true,
    body_indent: 2.0,
    hanging: 3.0,
    desc_after: 3.0,
    after: 4.0,
    needed: 15.0,
};

const SIDE_ENTRY: EntryStyle = EntryStyle {
    layout: EntryLayout::Stacked,
    marker: Marker::None,
    indent: 0.0,
    title: TextStyle::new(Font::HELVETICA_BOLD, 9.0, SLATE_900, 4.0),
    org: SIDE_TEXT,
    meta: SIDE_TEXT,
    body: SIDE_TEXT,
    bullets: false,
    body_indent: 0.0,
    hanging: 0.0,
    desc_after: 2.0,
    after: 3.0,
    needed: 12.0,
};

const REFERENCES: ReferenceStyle = ReferenceStyle {
    name: TextStyle::new(Font::HELVETICA_BOLD, 10.0, SLATE_900, 5.0),
    contact: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
    indent: 0.0,
    after: 3.0,
    needed: 10.0,
};

pub const SHEET: StyleSheet = StyleSheet {
    main: MAIN,
    top: 20.0,
    bottom: 270.0,
    bands: Bands {
        first_page: &[],
        every_page: &[Band {
            x: 0.0,
            y: 0.0,
            w: 65.0,
            h: 297.0,
            color: BLUE_100,
        }],
        continuation: &[],
    },
    header: Header {
        region: Region::Sidebar,
        column: SIDE,
        align: Align::Left,
        top: 20.0,
        items: &[
            HeaderItem::Photo(PhotoFrame {
                x: PhotoX::At(10.0),
                y: PhotoY::Cursor,
                size: 45.0,
                shape: PhotoShape::Rounded(3.0),
                border: Some(Stroke {
                    color: BLUE_600,
                    width: 0.5,
                }),
                halo: None,
                advance: Some(8.0),
            }),
            HeaderItem::Name {
                style: TextStyle::new(Font::HELVETICA_BOLD, 16.0, BLUE_600, 7.0),
                uppercase: false,
                after: 3.0,
            },
            HeaderItem::Title {
                style: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 5.0),
                fallback: None,
                after: 2.0,
            },
            HeaderItem::ContactStack {
                fields: &[
                    ContactField::labeled(Field::Phone, "Phone: "),
                    ContactField::plain(Field::Email),
                    ContactField::plain(Field::Address),
                    ContactField::plain(Field::Linkedin),
                    ContactField::plain(Field::Github),
                ],
                style: SIDE_TEXT,
                gap: 1.0,
            },
            HeaderItem::Gap(8.0),
        ],
        body_start: Some(20.0),
    },
    summary: SummaryStyle {
        body: TextStyle::new(Font::HELVETICA, 10.0, SLATE_600, 5.0),
        indent: 0.0,
        align: Align::Left,
        panel: None,
        after: 12.0,
    },
    lead: &[Lead::Summary],
    styles: SectionStyles {
        heading: SectionHeading {
            style: TextStyle::new(Font::HELVETICA_BOLD, 12.0, BLUE_600, 0.0),
            align: Align::Left,
            rule: HeadingRule::None,
            after: 7.0,
            needed: 20.0,
        },
        work: WORK,
        education: WORK,
        list: ListStyle {
            body: TextStyle::new(Font::HELVETICA, 9.0, SLATE_600, 4.5),
            indent: 0.0,
            align: Align::Left,
            after: 6.0,
        },
        skills: SkillsPresentation::Lines,
        references: REFERENCES,
        section_after: 4.0,
    },
    titles: SectionTitles {
        summary: Some("PROFESSIONAL SUMMARY"),
        ..TITLES_UPPER
    },
    sidebar: Some(SidebarSheet {
        column: SIDE,
        top: 20.0,
        bottom: 280.0,
        sections: &[SectionKind::Skills, SectionKind::Education],
        styles: SectionStyles {
            heading: SectionHeading {
                style: TextStyle::new(Font::HELVETICA_BOLD, 11.0, BLUE_600, 0.0),
                align: Align::Left,
                rule: HeadingRule::None,
                after: 6.0,
                needed: 15.0,
            },
            work: SIDE_ENTRY,
            education: SIDE_ENTRY,
            list: ListStyle {
                body: SIDE_TEXT,
                indent: 0.0,
                align: Align::Left,
                after: 8.0,
            },
            skills: SkillsPresentation::Lines,
            references: REFERENCES,
            section_after: 2.0,
        },
        titles: TITLES_UPPER,
    }),
};
