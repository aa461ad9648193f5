use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use simplifier_core::MockGateway;
use simplifier_web::state::AppState;

fn app(gateway: MockGateway) -> axum::Router {
    let state = Arc::new(AppState::new(Arc::new(gateway)));
    simplifier_web::router(state, 50)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_landing_page() {
    let response = app(MockGateway::text("unused"))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Research Paper Simplifier"));
    assert!(body.contains("name=\"paper\""));
}

#[tokio::test]
async fn test_quiz_renders_questions() {
    let raw = r#"{
        "questions": [
            {"question": "What is presented?", "options": ["X","Y","Z","W"], "answer": "A", "explanation": "Stated."},
            {"question": "Which field?", "options": ["P","Q","R","S"], "answer": "B", "explanation": "Given."}
        ]
    }"#;
    let response = app(MockGateway::text(raw))
        .oneshot(
            Request::get("/quiz?abstract=We+present+X.&difficulty=easy&num_questions=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("What is presented?"));
    assert!(body.contains("Which field?"));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_quiz_structural_mismatch_shows_error() {
    // Valid JSON without the expected "questions" key.
    let response = app(MockGateway::text(r#"{"quiz": []}"#))
        .oneshot(
            Request::get("/quiz?abstract=text")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("Failed to generate quiz"));
}

#[tokio::test]
async fn test_quiz_unconfigured_gateway_shows_placeholder() {
    use simplifier_core::gateway::mock::MockResponse;

    let response = app(MockGateway::new(MockResponse::NotConfigured))
        .oneshot(
            Request::get("/quiz?abstract=text")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("not configured"));
}

#[tokio::test]
async fn test_flashcards_renders_cards() {
    let raw = r#"{
        "flashcards": [
            {"term": "Entropy", "definition": "A measure of disorder."}
        ]
    }"#;
    let response = app(MockGateway::text(raw))
        .oneshot(
            Request::get("/flashcards?abstract=thermo&num_cards=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Entropy"));
    assert!(body.contains("A measure of disorder."));
}

#[tokio::test]
async fn test_upload_non_pdf_redirects_to_landing_page() {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"paper\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         this is not a pdf\r\n\
         --{boundary}--\r\n"
    );

    let response = app(MockGateway::text("unused"))
        .oneshot(
            Request::post("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_failed_extraction_leaves_no_temp_artifacts() {
    // Valid PDF magic but an unparseable body: the upload passes the magic
    // check, gets written to a temp dir, and extraction fails. The temp dir
    // must be removed on that error path.
    let scratch = tempfile::tempdir().unwrap();
    // SAFETY: no other test in this binary mutates the environment.
    unsafe { std::env::set_var("TMPDIR", scratch.path()) };

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"paper\"; filename=\"broken.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         %PDF-1.7 truncated garbage, not a parseable document\r\n\
         --{boundary}--\r\n"
    );

    let response = app(MockGateway::text("unused"))
        .oneshot(
            Request::post("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    // SAFETY: see above.
    unsafe { std::env::remove_var("TMPDIR") };

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let leftovers: Vec<_> = std::fs::read_dir(scratch.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert!(
        leftovers.is_empty(),
        "temp artifacts left behind: {leftovers:?}"
    );
}

#[tokio::test]
async fn test_upload_without_file_redirects() {
    let boundary = "test-boundary";
    let body = format!("--{boundary}--\r\n");

    let response = app(MockGateway::text("unused"))
        .oneshot(
            Request::post("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
