//! Mock model gateway for testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{LlmError, ModelGateway};
use crate::prompt::Prompt;

/// A configurable canned response for [`MockGateway`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful completion with this raw text.
    Text(String),
    /// Simulate an unconfigured client.
    NotConfigured,
    /// Simulate a remote failure.
    Error(String),
}

/// A hand-rolled mock implementing [`ModelGateway`] for tests.
///
/// Supports a fixed response (used for every call) or a sequence of
/// responses (one per call, repeating the last when exhausted), plus call
/// counting via [`call_count()`](MockGateway::call_count).
pub struct MockGateway {
    /// If non-empty, each call pops the next response.
    responses: Mutex<Vec<MockResponse>>,
    /// Fallback when the sequence is empty (or single-response mode).
    fallback: MockResponse,
    call_count: AtomicUsize,
}

impl MockGateway {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always succeeds with `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(MockResponse::Text(text.into()))
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        let fallback = responses.last().cloned().unwrap();
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            fallback,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `complete()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        seq.pop().unwrap_or_else(|| self.fallback.clone())
    }
}

impl ModelGateway for MockGateway {
    fn complete<'a>(
        &'a self,
        _prompt: &'a Prompt,
        _json_only: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();

        Box::pin(async move {
            match response {
                MockResponse::Text(text) => Ok(text),
                MockResponse::NotConfigured => Err(LlmError::NotConfigured),
                MockResponse::Error(msg) => Err(LlmError::MalformedResponse(msg)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::summary_prompt;

    #[tokio::test]
    async fn test_fixed_response_and_call_count() {
        let mock = MockGateway::text("canned");
        let prompt = summary_prompt("x");
        assert_eq!(mock.complete(&prompt, false).await.unwrap(), "canned");
        assert_eq!(mock.complete(&prompt, true).await.unwrap(), "canned");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_sequence_repeats_last() {
        let mock = MockGateway::with_sequence(vec![
            MockResponse::Text("first".into()),
            MockResponse::Error("down".into()),
        ]);
        let prompt = summary_prompt("x");
        assert_eq!(mock.complete(&prompt, false).await.unwrap(), "first");
        assert!(mock.complete(&prompt, false).await.is_err());
        assert!(mock.complete(&prompt, false).await.is_err());
    }
}
