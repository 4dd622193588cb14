//! HTTP surface for rendering résumés.

pub mod handlers;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::ResumeSnapshot;

/// Body of `POST /api/v1/resumes/render`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Template tag; unknown or missing tags use the configured default.
    #[serde(default)]
    pub template: String,
    pub resume: ResumeSnapshot,
}

/// The caller-side check the engine itself never performs.
pub fn validate(resume: &ResumeSnapshot) -> Result<(), AppError> {
    let missing = resume.missing_required_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lists_missing_fields() {
        let err = validate(&ResumeSnapshot::default()).unwrap_err();
        assert!(
            matches!(&err, AppError::Validation(msg) if msg == "Missing required fields: fullName, email")
        );
        assert!(validate(&ResumeSnapshot::sample()).is_ok());
    }

    #[test]
    fn test_render_request_template_is_optional() {
        let req: RenderRequest =
            serde_json::from_str(r#"{"resume":{"personalInfo":{"fullName":"Jane"}}}"#).unwrap();
        assert_eq!(req.template, "");
        assert_eq!(req.resume.personal_info.full_name, "Jane");
        assert_eq!(req.resume.section_order.len(), 5);
    }
}
