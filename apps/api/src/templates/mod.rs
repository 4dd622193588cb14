//! The eleven résumé templates.
//!
//! Each template is a `StyleSheet` constant in its own module; `TemplateStyle`
//! is the tag the builder UI sends and the key the renderer dispatches on.

pub mod sheet;

mod academic;
mod classic;
mod cool2025;
mod creative;
mod elegant;
mod executive;
mod infographic;
mod modern;
mod tech;
mod timeline;
mod two_column;

use serde::{Deserialize, Serialize};

pub use sheet::StyleSheet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateStyle {
    #[default]
    Classic,
    Modern,
    Creative,
    Executive,
    Tech,
    Academic,
    TwoColumn,
    Timeline,
    Infographic,
    Elegant,
    Cool2025,
}

impl TemplateStyle {
    pub const ALL: [TemplateStyle; 11] = [
        TemplateStyle::Classic,
        TemplateStyle::Modern,
        TemplateStyle::Creative,
        TemplateStyle::Executive,
        TemplateStyle::Tech,
        TemplateStyle::Academic,
        TemplateStyle::TwoColumn,
        TemplateStyle::Timeline,
        TemplateStyle::Infographic,
        TemplateStyle::Elegant,
        TemplateStyle::Cool2025,
    ];

    /// Wire tag, as used by the builder UI.
    pub fn tag(self) -> &'static str {
        match self {
            TemplateStyle::Classic => "classic",
            TemplateStyle::Modern => "modern",
            TemplateStyle::Creative => "creative",
            TemplateStyle::Executive => "executive",
            TemplateStyle::Tech => "tech",
            TemplateStyle::Academic => "academic",
            TemplateStyle::TwoColumn => "twoColumn",
            TemplateStyle::Timeline => "timeline",
            TemplateStyle::Infographic => "infographic",
            TemplateStyle::Elegant => "elegant",
            TemplateStyle::Cool2025 => "cool2025",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.tag() == tag.trim())
    }

    /// Unknown tags fall back to the default template rather than failing.
    pub fn parse_or(tag: &str, default: TemplateStyle) -> Self {
        Self::parse(tag).unwrap_or_else(|| {
            tracing::warn!(tag, fallback = default.tag(), "Unknown template tag");
            default
        })
    }

    pub fn parse_or_default(tag: &str) -> Self {
        Self::parse_or(tag, TemplateStyle::default())
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateStyle::Classic => "Classic Professional",
            TemplateStyle::Modern => "Modern Minimalist",
            TemplateStyle::Creative => "Creative Bold",
            TemplateStyle::Executive => "Executive",
            TemplateStyle::Tech => "Tech/Developer",
            TemplateStyle::Academic => "Academic",
            TemplateStyle::TwoColumn => "Two Column",
            TemplateStyle::Timeline => "Timeline",
            TemplateStyle::Infographic => "Infographic",
            TemplateStyle::Elegant => "Elegant",
            TemplateStyle::Cool2025 => "Cool2025",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateStyle::Classic => "Traditional, formal layout perfect for corporate roles",
            TemplateStyle::Modern => "Clean design with lots of white space",
            TemplateStyle::Creative => "Colorful accents and modern fonts for creative fields",
            TemplateStyle::Executive => "Premium, sophisticated look for senior positions",
            TemplateStyle::Tech => "Code-inspired design for technical professionals",
            TemplateStyle::Academic => "Research and education focused layout",
            TemplateStyle::TwoColumn => "Efficient space usage with dual-column design",
            TemplateStyle::Timeline => "Career progression focused with timeline view",
            TemplateStyle::Infographic => "Visual resume with icons and graphics",
            TemplateStyle::Elegant => "Refined and minimalist design",
            TemplateStyle::Cool2025 => "Modern professional with blue accent theme",
        }
    }

    pub fn sheet(self) -> &'static StyleSheet {
        match self {
            TemplateStyle::Classic => &classic::SHEET,
            TemplateStyle::Modern => &modern::SHEET,
            TemplateStyle::Creative => &creative::SHEET,
            TemplateStyle::Executive => &executive::SHEET,
            TemplateStyle::Tech => &tech::SHEET,
            TemplateStyle::Academic => &academic::SHEET,
            TemplateStyle::TwoColumn => &two_column::SHEET,
            TemplateStyle::Timeline => &timeline::SHEET,
            TemplateStyle::Infographic => &infographic::SHEET,
            TemplateStyle::Elegant => &elegant::SHEET,
            TemplateStyle::Cool2025 => &cool2025::SHEET,
        }
    }
}

impl std::fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Gallery entry served to the builder UI.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateStyle,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn gallery() -> Vec<TemplateInfo> {
    TemplateStyle::ALL
        .into_iter()
        .map(|style| TemplateInfo {
            id: style,
            name: style.name(),
            description: style.description(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::flow::Region;
    use crate::models::SectionKind;

    #[test]
    fn test_tags_round_trip_through_serde() {
        for style in TemplateStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.tag()));
            assert_eq!(TemplateStyle::parse(style.tag()), Some(style));
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_classic() {
        assert_eq!(TemplateStyle::parse_or_default("brutalist"), TemplateStyle::Classic);
        assert_eq!(TemplateStyle::parse_or_default(""), TemplateStyle::Classic);
        assert_eq!(
            TemplateStyle::parse_or("nope", TemplateStyle::Elegant),
            TemplateStyle::Elegant
        );
    }

    #[test]
    fn test_only_sidebar_templates_route_sections_to_sidebar() {
        for style in TemplateStyle::ALL {
            let sheet = style.sheet();
            let routed = SectionKind::ALL
                .iter()
                .any(|kind| sheet.region_of(*kind) == Region::Sidebar);
            let expected = matches!(style, TemplateStyle::Executive | TemplateStyle::TwoColumn);
            assert_eq!(routed, expected, "{style}");
        }
    }

    #[test]
    fn test_academic_leads_with_education() {
        use sheet::Lead;
        assert_eq!(
            TemplateStyle::Academic.sheet().lead,
            &[Lead::Education, Lead::Summary]
        );
        for style in TemplateStyle::ALL {
            if style != TemplateStyle::Academic {
                assert_eq!(style.sheet().lead, &[Lead::Summary], "{style}");
            }
        }
    }

    #[test]
    fn test_gallery_lists_every_template() {
        let gallery = gallery();
        assert_eq!(gallery.len(), 11);
        assert_eq!(gallery[6].id, TemplateStyle::TwoColumn);
        assert_eq!(gallery[6].name, "Two Column");
    }
}
