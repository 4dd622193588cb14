//! Résumé data model: the read-only snapshot handed to the layout engine.
//!
//! Field names on the wire follow the builder UI (`fullName`, `jobTitle`,
//! `sectionOrder`, …). Every field except the section tag is optional on input
//! and defaults to an empty string; absence is handled by the renderer, which
//! simply skips the corresponding block.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Personal information
// ────────────────────────────────────────────────────────────────────────────

/// Identity, contact and free-text blobs for one résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Free text, rendered as a single contact field.
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub professional_title: String,
    pub summary: String,
    /// Newline separated; see [`TextList`].
    pub skills: String,
    /// Newline separated; see [`TextList`].
    pub certifications: String,
    /// `data:image/jpeg;base64,…` payload. Empty or missing means no photo.
    pub photo: Option<String>,
}

impl PersonalInfo {
    /// The photo payload, if one was supplied and is not blank.
    pub fn photo_payload(&self) -> Option<&str> {
        self.photo
            .as_deref()
            .map(str::trim)
            .filter(|payload| !payload.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ordered entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceEntry {
    pub job_title: String,
    pub company: String,
    /// Free text, never parsed as a date.
    pub start_date: String,
    /// Free text, often the literal "Present".
    pub end_date: String,
    /// One logical line per `\n`, each optionally bullet-prefixed.
    pub description: String,
}

impl WorkExperienceEntry {
    /// An entry with neither a title nor a company is not rendered.
    pub fn is_blank(&self) -> bool {
        self.job_title.trim().is_empty() && self.company.trim().is_empty()
    }

    /// "start – end", or whichever half is present.
    pub fn date_range(&self) -> String {
        date_range(&self.start_date, &self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    /// A year or a free-text date range.
    pub year: String,
    pub description: String,
}

impl EducationEntry {
    pub fn is_blank(&self) -> bool {
        self.degree.trim().is_empty() && self.institution.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceEntry {
    pub name: String,
    /// Free text; may embed a role or title.
    pub contact: String,
}

impl ReferenceEntry {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.contact.trim().is_empty()
    }
}

fn date_range(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{start} – {end}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section ordering
// ────────────────────────────────────────────────────────────────────────────

/// The five user-orderable résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    WorkExperience,
    Education,
    Skills,
    Certifications,
    References,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::WorkExperience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::References,
    ];

    /// Title shown in the builder's section list.
    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::WorkExperience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Certifications => "Certifications",
            SectionKind::References => "References",
        }
    }
}

/// One slot in the user's section order. Only `type` matters for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: String,
}

impl SectionDescriptor {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
        }
    }
}

/// The builder's initial order: work → education → skills → certifications → references.
pub fn default_section_order() -> Vec<SectionDescriptor> {
    SectionKind::ALL
        .into_iter()
        .map(SectionDescriptor::new)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Snapshot
// ────────────────────────────────────────────────────────────────────────────

/// Everything one render needs. The engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub work_experience: Vec<WorkExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
    #[serde(default = "default_section_order")]
    pub section_order: Vec<SectionDescriptor>,
}

impl Default for ResumeSnapshot {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            references: Vec::new(),
            section_order: default_section_order(),
        }
    }
}

impl ResumeSnapshot {
    /// Wire names of the required fields that are empty (`fullName`, `email`).
    ///
    /// Callers check this before rendering; the engine itself renders whatever
    /// it is given.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.personal_info.full_name.trim().is_empty() {
            missing.push("fullName");
        }
        if self.personal_info.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Free-text lists
// ────────────────────────────────────────────────────────────────────────────

/// A free-text blob (skills, certifications) parsed into lines.
///
/// Lines are split on `\n`, trimmed, and blank lines dropped. Badge-style
/// templates additionally split each line on commas via [`TextList::terms`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextList {
    lines: Vec<String>,
}

impl TextList {
    pub fn parse(blob: &str) -> Self {
        let lines = blob
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Comma-separated terms across all lines, in order.
    pub fn terms(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
