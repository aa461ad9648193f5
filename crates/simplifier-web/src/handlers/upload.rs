use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use simplifier_core::{LlmError, PdfBackend, find_abstract, generate_summary};
use simplifier_pdf_mupdf::MupdfBackend;

use super::NOT_CONFIGURED_MESSAGE;
use crate::state::AppState;
use crate::template;
use crate::upload;

/// Placeholder shown when the remote summary call fails.
const SUMMARY_FAILED_MESSAGE: &str = "Could not generate summary.";

/// Handle `POST /upload`.
///
/// Any document failure collapses into a redirect to the landing page;
/// gateway failures degrade to placeholder text instead.
pub async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match handle_upload(state, multipart).await {
        Ok(html) => html.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "upload failed, redirecting to landing page");
            Redirect::to("/").into_response()
        }
    }
}

async fn handle_upload(
    state: Arc<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, String> {
    let paper = upload::parse_multipart(multipart).await?;

    // Temp dir is removed on drop, on every exit path.
    let temp_dir =
        tempfile::tempdir().map_err(|e| format!("Failed to create temp directory: {}", e))?;
    let pdf_path = temp_dir.path().join("upload.pdf");
    std::fs::write(&pdf_path, &paper.data)
        .map_err(|e| format!("Failed to write temp file: {}", e))?;

    // Blocking I/O via MuPDF
    let full_text = extract_text_blocking(&pdf_path).await?;

    // Temp dir no longer needed after extraction
    drop(temp_dir);

    let raw_abstract = find_abstract(&full_text);

    let summary = match generate_summary(state.gateway.as_ref(), &raw_abstract).await {
        Ok(summary) => summary,
        Err(LlmError::NotConfigured) => NOT_CONFIGURED_MESSAGE.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "summary generation failed");
            SUMMARY_FAILED_MESSAGE.to_string()
        }
    };

    Ok(template::render_results(
        &paper.filename,
        &summary,
        &raw_abstract,
    ))
}

async fn extract_text_blocking(pdf_path: &Path) -> Result<String, String> {
    let pdf_path = pdf_path.to_path_buf();
    tokio::task::spawn_blocking(move || MupdfBackend::new().extract_text(&pdf_path))
        .await
        .map_err(|e| format!("Extraction task failed: {}", e))?
        .map_err(|e| e.to_string())
}
