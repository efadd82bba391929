use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use rfpa_core::{AnalysisStore, AppConfig};
use rfpa_web::{AppState, build_router};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "rfpa-test-boundary";

const SAMPLE_RFP: &str = "\
Community Health Request for Proposal
Issued by Lakeside Health Foundation

Up to $40,000 available per grant for community health programs.
Applicants must be a registered 501(c)(3) nonprofit organization.
Application deadline: submit by March 3, 2025.
Section 1: Organizational Capacity.
Section 2: Program Design.
";

fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.upload.upload_folder = dir.path().to_path_buf();
    config.server.secret_key = "test-secret".to_string();

    let state = AppState::new(config, AnalysisStore::in_memory().unwrap());
    (build_router(state), dir)
}

fn multipart_request(uri: &str, filename: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_index_page() {
    let (app, _dir) = test_app();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("RFP Document Analyzer"));
}

#[tokio::test]
async fn test_prompt_generator_page() {
    let (app, _dir) = test_app();
    let response = app.oneshot(get("/generate_prompt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Prompt Generator"));
}

#[tokio::test]
async fn test_prompt_generator_prefills_analysis_id() {
    let (app, _dir) = test_app();
    let response = app.oneshot(get("/generate_prompt?analysisId=3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"name="analysisId" value="3""#), "{html}");
    assert!(html.contains(r#"name="orgName" value="""#));
}

#[tokio::test]
async fn test_analysis_link_reaches_prompt_generator() {
    let (app, _dir) = test_app();
    let response = app
        .clone()
        .oneshot(multipart_request("/upload", "health rfp.txt", SAMPLE_RFP))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains(r#"href="/generate_prompt?analysisId=1""#));

    let response = app.oneshot(get("/generate_prompt?analysisId=1")).await.unwrap();
    assert!(body_string(response).await.contains(r#"name="analysisId" value="1""#));
}

#[tokio::test]
async fn test_upload_without_file_redirects() {
    let (app, _dir) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(response.headers().contains_key(header::SET_COOKIE));
}

#[tokio::test]
async fn test_flash_message_shown_once() {
    let (app, _dir) = test_app();

    let response = app
        .clone()
        .oneshot(multipart_request("/upload", "malware.exe", "nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.headers().contains_key(header::SET_COOKIE));
    let html = body_string(response).await;
    assert!(html.contains("Invalid file type. Allowed: pdf, docx, txt"));
}

#[tokio::test]
async fn test_upload_renders_analysis() {
    let (app, dir) = test_app();
    let response = app
        .oneshot(multipart_request("/upload", "health rfp.txt", SAMPLE_RFP))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<h1>Community Health Request for Proposal</h1>"));
    assert!(html.contains("Lakeside Health Foundation"));
    assert!(html.contains("Organizational Capacity"));

    let saved: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn test_upload_short_text_redirects() {
    let (app, _dir) = test_app();
    let response = app
        .oneshot(multipart_request("/upload", "tiny.txt", "Too short."))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_api_analyze_without_file() {
    let (app, _dir) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No file provided");
}

#[tokio::test]
async fn test_api_analyze_rejects_extension() {
    let (app, _dir) = test_app();
    let response = app
        .oneshot(multipart_request("/api/analyze", "rfp.doc", SAMPLE_RFP))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid file type. Allowed: pdf, docx, txt"
    );
}

#[tokio::test]
async fn test_api_analyze_rejects_short_text() {
    let (app, _dir) = test_app();
    let response = app
        .oneshot(multipart_request("/api/analyze", "tiny.txt", "Too short."))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Document appears to be empty or too short for analysis"
    );
}

#[tokio::test]
async fn test_api_analyze_then_fetch() {
    let (app, _dir) = test_app();

    let response = app
        .clone()
        .oneshot(multipart_request("/api/analyze", "rfp.txt", SAMPLE_RFP))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let analysis = body_json(response).await;
    assert_eq!(analysis["title"], "Community Health Request for Proposal");
    assert_eq!(analysis["organization"], "Lakeside Health Foundation");
    assert_eq!(analysis["funding_amount"], "$40,000 available");
    assert!(analysis["requirements"]["timeline"].as_array().unwrap().len() >= 1);

    let response = app.clone().oneshot(get("/api/analyses?limit=5")).await.unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    let id = list[0]["id"].as_i64().unwrap();

    let response = app.clone().oneshot(get(&format!("/api/analyses/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stored = body_json(response).await;
    assert_eq!(stored["analysis"], analysis);

    let response = app.oneshot(get(&format!("/analyses/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Lakeside Health Foundation"));
}

#[tokio::test]
async fn test_missing_analysis_is_404() {
    let (app, _dir) = test_app();

    let response = app.clone().oneshot(get("/api/analyses/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/analyses/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_prompt_validation() {
    let (app, _dir) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/generate_prompt")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("orgName=&mission=short&fundingAmount=lots"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("Organization name is required"));
    assert!(html.contains("Invalid funding amount format"));
}

#[tokio::test]
async fn test_generate_prompt_success() {
    let (app, _dir) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/generate_prompt")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("orgName=Lakeside+Clinic&fundingAmount=%2415%2C000"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("on behalf of Lakeside Clinic."));
    assert!(html.contains("Amount requested: $15,000"));
}
