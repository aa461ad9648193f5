//! High-level generation entry points: prompt → gateway → parse.

use crate::gateway::{LlmError, ModelGateway};
use crate::parse::{parse_flashcards, parse_quiz};
use crate::prompt::{flashcards_prompt, quiz_prompt, summary_prompt};
use crate::{Difficulty, Flashcard, QuizQuestion};

/// Produce a one-paragraph plain-language summary of an abstract.
pub async fn generate_summary(
    gateway: &dyn ModelGateway,
    abstract_text: &str,
) -> Result<String, LlmError> {
    let prompt = summary_prompt(abstract_text);
    gateway.complete(&prompt, false).await
}

/// Produce a multiple-choice quiz derived strictly from `text`.
///
/// A successful well-formed response yields exactly the requested number of
/// questions (after clamping to 1..=5).
pub async fn generate_quiz(
    gateway: &dyn ModelGateway,
    text: &str,
    num_questions: usize,
    difficulty: Difficulty,
) -> Result<Vec<QuizQuestion>, LlmError> {
    let prompt = quiz_prompt(text, num_questions, difficulty);
    let raw = gateway.complete(&prompt, true).await?;
    parse_quiz(&raw)
}

/// Produce key-term flashcards derived strictly from `text`.
pub async fn generate_flashcards(
    gateway: &dyn ModelGateway,
    text: &str,
    num_cards: usize,
) -> Result<Vec<Flashcard>, LlmError> {
    let prompt = flashcards_prompt(text, num_cards);
    let raw = gateway.complete(&prompt, true).await?;
    parse_flashcards(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::{MockGateway, MockResponse};

    #[tokio::test]
    async fn test_generate_summary_passes_through_text() {
        let mock = MockGateway::text("X is a simplified thing.");
        let summary = generate_summary(&mock, "We present X.").await.unwrap();
        assert_eq!(summary, "X is a simplified thing.");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_quiz_returns_requested_count() {
        let raw = r#"{
            "questions": [
                {"question": "Q1?", "options": ["a","b","c","d"], "answer": "A", "explanation": "e"},
                {"question": "Q2?", "options": ["a","b","c","d"], "answer": "B", "explanation": "e"},
                {"question": "Q3?", "options": ["a","b","c","d"], "answer": "C", "explanation": "e"}
            ]
        }"#;
        let mock = MockGateway::text(raw);
        let questions = generate_quiz(&mock, "text", 3, Difficulty::Medium)
            .await
            .unwrap();
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(matches!(q.answer.as_str(), "A" | "B" | "C" | "D"));
        }
    }

    #[tokio::test]
    async fn test_generate_flashcards_malformed_response() {
        // Missing the "flashcards" key entirely.
        let mock = MockGateway::text(r#"{"cards": []}"#);
        let err = generate_flashcards(&mock, "text", 5).await.unwrap_err();
        assert!(matches!(err, LlmError::StructuralMismatch(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_generate_quiz_unconfigured_gateway() {
        let mock = MockGateway::new(MockResponse::NotConfigured);
        let err = generate_quiz(&mock, "text", 3, Difficulty::Easy)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }
}
