//! Parse raw model output into quiz questions and flashcards.
//!
//! The remote output is untrusted input: the payload must be a JSON object
//! holding the expected key with an array value, and every entity is
//! validated before it reaches the presentation layer. Malformed entities
//! are logged and dropped rather than surfaced.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::gateway::LlmError;
use crate::{Flashcard, QuizQuestion};

/// Parse a quiz response: a JSON object with a `"questions"` array.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, LlmError> {
    parse_entities(raw, "questions", |q: &QuizQuestion| q.validate())
}

/// Parse a flashcards response: a JSON object with a `"flashcards"` array.
pub fn parse_flashcards(raw: &str) -> Result<Vec<Flashcard>, LlmError> {
    parse_entities(raw, "flashcards", |c: &Flashcard| c.validate())
}

fn parse_entities<T, F>(raw: &str, key: &str, validate: F) -> Result<Vec<T>, LlmError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<(), String>,
{
    let json: Value = serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| LlmError::StructuralMismatch(format!("JSON parse error: {e}")))?;

    let items = json
        .get(key)
        .ok_or_else(|| LlmError::StructuralMismatch(format!("missing key {key:?}")))?
        .as_array()
        .ok_or_else(|| LlmError::StructuralMismatch(format!("key {key:?} is not an array")))?;

    let mut entities = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let entity: T = match serde_json::from_value(item.clone()) {
            Ok(e) => e,
            Err(e) => {
                warn!(index = idx, key, error = %e, "dropping undeserializable entity");
                continue;
            }
        };
        if let Err(e) = validate(&entity) {
            warn!(index = idx, key, error = %e, "dropping malformed entity");
            continue;
        }
        entities.push(entity);
    }

    Ok(entities)
}

/// Strip a Markdown code fence around the payload, if present.
///
/// Models sometimes wrap their JSON in ```json blocks even when asked for a
/// bare object.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
