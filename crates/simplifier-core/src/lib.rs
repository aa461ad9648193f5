use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod backend;
pub mod config_file;
pub mod gateway;
pub mod generate;
pub mod locator;
pub mod parse;
pub mod prompt;

// Re-export for convenience
pub use backend::PdfBackend;
pub use gateway::{LlmError, ModelGateway, mistral::MistralClient, mock::MockGateway};
pub use generate::{generate_flashcards, generate_quiz, generate_summary};
pub use locator::find_abstract;
pub use prompt::{Prompt, flashcards_prompt, quiz_prompt, summary_prompt};

/// A single multiple-choice quiz question produced by the model.
///
/// A question is only considered well-formed when it has exactly four
/// options and a single-letter answer in A–D; see [`QuizQuestion::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

impl QuizQuestion {
    /// Check the entity-level shape: exactly 4 options, answer in {A,B,C,D}.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.len() != 4 {
            return Err(format!("expected 4 options, got {}", self.options.len()));
        }
        if !matches!(self.answer.as_str(), "A" | "B" | "C" | "D") {
            return Err(format!("answer must be A-D, got {:?}", self.answer));
        }
        Ok(())
    }
}

/// A key-term flashcard produced by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn validate(&self) -> Result<(), String> {
        if self.term.trim().is_empty() {
            return Err("empty term".to_string());
        }
        if self.definition.trim().is_empty() {
            return Err("empty definition".to_string());
        }
        Ok(())
    }
}

/// Requested quiz difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
