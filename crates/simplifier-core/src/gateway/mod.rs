//! Gateway to the remote model capability.

pub mod mistral;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::prompt::Prompt;

#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was configured; the gateway never attempts network access
    /// in this state.
    #[error("model API key not configured")]
    NotConfigured,
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
    /// The response parsed as JSON but lacked the expected key/sequence shape.
    #[error("structural mismatch in model output: {0}")]
    StructuralMismatch(String),
}

/// A remote model capability that turns a prompt into raw text.
///
/// Implementations must never panic across this boundary: every failure mode
/// is reported as an [`LlmError`] for the caller to collapse into a degraded
/// user-visible response.
pub trait ModelGateway: Send + Sync {
    /// Send a prompt and return the raw textual response.
    ///
    /// `json_only` requests a JSON-object-only response from the capability;
    /// summaries leave it unset, quiz/flashcard calls set it.
    fn complete<'a>(
        &'a self,
        prompt: &'a Prompt,
        json_only: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}
