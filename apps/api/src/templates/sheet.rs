//! Style descriptors.
//!
//! A `StyleSheet` is plain data: palette, fonts, geometry and the recipe for
//! each block. One generic renderer (`crate::render`) interprets it, so the
//! eleven templates differ only in the constants they declare.

use crate::document::{Align, Rgb, Stroke};
use crate::layout::flow::Region;
use crate::layout::font_metrics::Font;
use crate::models::SectionKind;

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

/// Font, size, colour, and the vertical advance per printed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Rgb,
    pub leading: f32,
}

impl TextStyle {
    pub const fn new(font: Font, size: f32, color: Rgb, leading: f32) -> Self {
        Self {
            font,
            size,
            color,
            leading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
}

impl Column {
    pub const fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// X anchor for a run aligned within the column.
    pub fn anchor(&self, align: Align) -> f32 {
        match align {
            Align::Left => self.x,
            Align::Center => self.center(),
            Align::Right => self.right(),
        }
    }
}

/// A filled rectangle painted beneath page content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub first_page: &'static [Band],
    pub every_page: &'static [Band],
    pub continuation: &'static [Band],
}

impl Bands {
    pub const NONE: Bands = Bands {
        first_page: &[],
        every_page: &[],
        continuation: &[],
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Phone,
    Address,
    Linkedin,
    Github,
}

/// A contact field and the label printed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField {
    pub field: Field,
    pub label: &'static str,
}

impl ContactField {
    pub const fn plain(field: Field) -> Self {
        Self { field, label: "" }
    }

    pub const fn labeled(field: Field, label: &'static str) -> Self {
        Self { field, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhotoX {
    At(f32),
    /// Centred in the header column.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhotoY {
    At(f32),
    /// At the header cursor.
    Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhotoShape {
    Square,
    Circle,
    Rounded(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoFrame {
    pub x: PhotoX,
    pub y: PhotoY,
    pub size: f32,
    pub shape: PhotoShape,
    pub border: Option<Stroke>,
    /// Filled disc behind a circular photo: colour and extra radius.
    pub halo: Option<(Rgb, f32)>,
    /// Cursor advance after the photo, on top of its size. `None` for photos
    /// placed beside the text.
    pub advance: Option<f32>,
}

/// One step of a header recipe. Text items are wrapped to the header column
/// and skipped entirely (no advance) when their content is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderItem {
    Name {
        style: TextStyle,
        uppercase: bool,
        after: f32,
    },
    Title {
        style: TextStyle,
        /// Printed when the professional title is empty.
        fallback: Option<&'static str>,
        after: f32,
    },
    /// Present fields joined on one line.
    Contact {
        fields: &'static [ContactField],
        separator: &'static str,
        style: TextStyle,
        after: f32,
    },
    /// Present fields one under another.
    ContactStack {
        fields: &'static [ContactField],
        style: TextStyle,
        gap: f32,
    },
    Rule {
        x1: f32,
        x2: f32,
        stroke: Stroke,
        after: f32,
    },
    Photo(PhotoFrame),
    Gap(f32),
    MoveTo(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub region: Region,
    pub column: Column,
    pub align: Align,
    pub top: f32,
    pub items: &'static [HeaderItem],
    /// Where the main column starts when the header lives elsewhere or is
    /// laid out at fixed positions.
    pub body_start: Option<f32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingRule {
    None,
    /// Full-width rule `offset` below the baseline.
    Underline { offset: f32, stroke: Stroke },
    /// Short rules either side of a centred title.
    Flanked { length: f32, gap: f32, stroke: Stroke },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionHeading {
    pub style: TextStyle,
    pub align: Align,
    pub rule: HeadingRule,
    /// Advance after the heading baseline.
    pub after: f32,
    /// Space reserved before printing the heading.
    pub needed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTitles {
    pub summary: Option<&'static str>,
    pub work: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub certifications: &'static str,
    pub references: &'static str,
}

impl SectionTitles {
    pub fn title(&self, kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::WorkExperience => self.work,
            SectionKind::Education => self.education,
            SectionKind::Skills => self.skills,
            SectionKind::Certifications => self.certifications,
            SectionKind::References => self.references,
        }
    }
}

/// How the title, organisation and date of an entry are arranged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryLayout {
    /// Title left, date right-aligned on the same line, organisation below.
    DatesRight,
    /// Title, organisation, date on their own lines.
    Stacked,
    /// Title, then organisation and date joined on one line.
    Inline { separator: &'static str },
    /// Date in the left margin, everything else `offset` to the right.
    DateColumn { offset: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    None,
    /// A glyph at the column edge, level with the title.
    Glyph { text: &'static str, style: TextStyle },
    /// A disc left of the title, with an optional stem down to the next entry.
    Dot {
        x: f32,
        r: f32,
        color: Rgb,
        stem: Option<Stroke>,
    },
    /// A vertical accent bar beside the title block.
    Bar { x: f32, w: f32, h: f32, color: Rgb },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryStyle {
    pub layout: EntryLayout,
    pub marker: Marker,
    /// Offset of the entry text from the column edge.
    pub indent: f32,
    pub title: TextStyle,
    pub org: TextStyle,
    pub meta: TextStyle,
    pub body: TextStyle,
    /// Bulleted description lines; otherwise plain wrapped paragraphs.
    pub bullets: bool,
    pub body_indent: f32,
    pub hanging: f32,
    pub desc_after: f32,
    pub after: f32,
    pub needed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStyle {
    pub body: TextStyle,
    pub indent: f32,
    pub align: Align,
    pub after: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    pub max: usize,
    pub per_row: usize,
    pub width: f32,
    pub height: f32,
    pub step_x: f32,
    pub step_y: f32,
    pub radius: f32,
    pub max_chars: usize,
    pub fill: Rgb,
    pub text: TextStyle,
    pub after: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillsPresentation {
    Lines,
    /// Comma-separated terms as filled badges.
    Badges(BadgeStyle),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceStyle {
    pub name: TextStyle,
    pub contact: TextStyle,
    pub indent: f32,
    pub after: f32,
    pub needed: f32,
}

/// Everything needed to print the user-ordered sections in one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStyles {
    pub heading: SectionHeading,
    pub work: EntryStyle,
    pub education: EntryStyle,
    pub list: ListStyle,
    pub skills: SkillsPresentation,
    pub references: ReferenceStyle,
    /// Extra advance after a complete section.
    pub section_after: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub fill: Rgb,
    pub radius: f32,
    pub pad: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStyle {
    pub body: TextStyle,
    pub indent: f32,
    pub align: Align,
    pub panel: Option<Panel>,
    pub after: f32,
}

/// Blocks printed after the header and before the user's section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    Summary,
    /// Only when education is part of the section order.
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarSheet {
    pub column: Column,
    pub top: f32,
    pub bottom: f32,
    /// Section kinds routed to the sidebar instead of the main column.
    pub sections: &'static [SectionKind],
    pub styles: SectionStyles,
    pub titles: SectionTitles,
}

// ────────────────────────────────────────────────────────────────────────────
// Sheet
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub main: Column,
    /// Cursor after a page break.
    pub top: f32,
    pub bottom: f32,
    pub bands: Bands,
    pub header: Header,
    pub summary: SummaryStyle,
    pub lead: &'static [Lead],
    pub styles: SectionStyles,
    pub titles: SectionTitles,
    pub sidebar: Option<SidebarSheet>,
}

impl StyleSheet {
    /// Region a section is printed in.
    pub fn region_of(&self, kind: SectionKind) -> Region {
        match &self.sidebar {
            Some(sidebar) if sidebar.sections.contains(&kind) => Region::Sidebar,
            _ => Region::Main,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared defaults
// ────────────────────────────────────────────────────────────────────────────

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const SLATE_900: Rgb = Rgb(15, 23, 42);
pub const SLATE_800: Rgb = Rgb(30, 41, 59);
pub const SLATE_700: Rgb = Rgb(51, 65, 85);
pub const SLATE_600: Rgb = Rgb(71, 85, 105);
pub const SLATE_500: Rgb = Rgb(100, 116, 139);
pub const SLATE_300: Rgb = Rgb(203, 213, 225);
pub const BLUE_600: Rgb = Rgb(37, 99, 235);
pub const BLUE_100: Rgb = Rgb(219, 234, 254);
pub const GRAY_60: Rgb = Rgb(60, 60, 60);

pub const CONTACT_LINE: &[ContactField] = &[
    ContactField::plain(Field::Phone),
    ContactField::plain(Field::Email),
    ContactField::plain(Field::Address),
];

pub const LINKS_LINE: &[ContactField] = &[
    ContactField::plain(Field::Linkedin),
    ContactField::plain(Field::Github),
];

pub const TITLES_UPPER: SectionTitles = SectionTitles {
    summary: None,
    work: "WORK EXPERIENCE",
    education: "EDUCATION",
    skills: "SKILLS",
    certifications: "CERTIFICATIONS",
    references: "REFERENCES",
};

pub const TITLES_PLAIN: SectionTitles = SectionTitles {
    summary: None,
    work: "Experience",
    education: "Education",
    skills: "Skills",
    certifications: "Certifications",
    references: "References",
};
