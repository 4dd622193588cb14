use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::info;

use crate::document::suggested_filename;
use crate::errors::AppError;
use crate::models::ResumeSnapshot;
use crate::render::{render_all, render_to_pdf, RenderSummary};
use crate::resumes::{validate, RenderRequest};
use crate::state::AppState;
use crate::templates::{gallery, TemplateInfo, TemplateStyle};

/// RFC 5987 `attr-char`; everything else in `filename*` is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(gallery())
}

/// GET /api/v1/resumes/sample
pub async fn handle_sample() -> Json<ResumeSnapshot> {
    Json(ResumeSnapshot::sample())
}

/// POST /api/v1/resumes/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    validate(&req.resume)?;

    let style = TemplateStyle::parse_or(&req.template, state.config.default_template);
    let disposition = content_disposition(&suggested_filename(req.resume.personal_info.full_name.trim()))?;
    let resume = req.resume;

    // Layout and serialization are CPU-bound; keep them off the async executor.
    let bytes = tokio::task::spawn_blocking(move || render_to_pdf(style, &resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(template = %style, bytes = bytes.len(), "Rendered PDF");

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `attachment` disposition with a quoted ASCII fallback name and the exact
/// UTF-8 name in `filename*`.
fn content_disposition(filename: &str) -> Result<HeaderValue, AppError> {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = utf8_percent_encode(filename, ATTR_CHAR);
    HeaderValue::from_str(&format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}"
    ))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition for {filename:?}: {e}")))
}

/// POST /api/v1/resumes/preview
pub async fn handle_preview(
    Json(resume): Json<ResumeSnapshot>,
) -> Result<Json<Vec<RenderSummary>>, AppError> {
    validate(&resume)?;

    let summaries = tokio::task::spawn_blocking(move || render_all(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in preview: {e}")))?;
    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_templates_lists_gallery() {
        let response = app()
            .oneshot(Request::get("/api/v1/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = read_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 11);
        assert!(ids.contains(&"twoColumn"));
        assert!(ids.contains(&"cool2025"));
    }

    #[tokio::test]
    async fn test_sample_uses_wire_names() {
        let response = app()
            .oneshot(Request::get("/api/v1/resumes/sample").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["personalInfo"]["fullName"], "John Doe");
        assert_eq!(body["sectionOrder"][0]["type"], "workExperience");
    }

    #[tokio::test]
    async fn test_render_returns_pdf_attachment() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/resumes/render",
                json!({
                    "template": "timeline",
                    "resume": {
                        "personalInfo": { "fullName": "Jane  Doe", "email": "jane@x.com" },
                        "workExperience": [{
                            "jobTitle": "Engineer",
                            "company": "Acme",
                            "startDate": "2020",
                            "endDate": "Present",
                            "description": "• Did X\n• Did Y"
                        }],
                        "sectionOrder": [{ "type": "workExperience" }]
                    }
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/pdf");
        assert_eq!(
            response.headers()["content-disposition"],
            "attachment; filename=\"Jane_Doe_Resume.pdf\"; filename*=UTF-8''Jane_Doe_Resume.pdf"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    async fn render_named(full_name: &str) -> axum::response::Response {
        app()
            .oneshot(post_json(
                "/api/v1/resumes/render",
                json!({
                    "template": "classic",
                    "resume": { "personalInfo": { "fullName": full_name, "email": "jane@x.com" } }
                }),
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_render_disposition_escapes_awkward_names() {
        let cases = [
            (
                "Jane \"JD\" Doe",
                "attachment; filename=\"Jane__JD__Doe_Resume.pdf\"; filename*=UTF-8''Jane_%22JD%22_Doe_Resume.pdf",
            ),
            (
                "José Núñez",
                "attachment; filename=\"Jos__N__ez_Resume.pdf\"; filename*=UTF-8''Jos%C3%A9_N%C3%BA%C3%B1ez_Resume.pdf",
            ),
            (
                "Jane\u{1}Doe",
                "attachment; filename=\"Jane_Doe_Resume.pdf\"; filename*=UTF-8''Jane%01Doe_Resume.pdf",
            ),
            (
                "O\\Brien",
                "attachment; filename=\"O_Brien_Resume.pdf\"; filename*=UTF-8''O%5CBrien_Resume.pdf",
            ),
        ];
        for (name, expected) in cases {
            let response = render_named(name).await;
            assert_eq!(response.status(), StatusCode::OK, "{name:?}");
            assert_eq!(response.headers()["content-disposition"], expected, "{name:?}");
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(bytes.starts_with(b"%PDF-1.5"), "{name:?}");
        }
    }

    #[tokio::test]
    async fn test_render_rejects_missing_required_fields() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/resumes/render",
                json!({ "template": "classic", "resume": { "personalInfo": { "fullName": "Jane" } } }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Missing required fields: email");
    }

    #[tokio::test]
    async fn test_render_unknown_template_still_renders() {
        let mut sample = serde_json::to_value(crate::models::ResumeSnapshot::sample()).unwrap();
        sample["personalInfo"]["photo"] = json!("data:image/gif;base64,R0lGODlh");
        let response = app()
            .oneshot(post_json(
                "/api/v1/resumes/render",
                json!({ "template": "brutalist", "resume": sample }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preview_reports_every_template() {
        let sample = serde_json::to_value(crate::models::ResumeSnapshot::sample()).unwrap();
        let response = app()
            .oneshot(post_json("/api/v1/resumes/preview", sample))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let summaries = body.as_array().unwrap();
        assert_eq!(summaries.len(), 11);
        assert_eq!(summaries[0]["template"], "classic");
        assert!(summaries.iter().all(|s| s["pages"].as_u64().unwrap() >= 1));
        assert!(summaries.iter().all(|s| s.get("error").is_none()));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
