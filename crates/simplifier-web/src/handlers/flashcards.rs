use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use simplifier_core::{LlmError, generate_flashcards};

use super::NOT_CONFIGURED_MESSAGE;
use crate::state::AppState;
use crate::template;

const FLASHCARDS_FAILED_MESSAGE: &str = "Failed to generate flashcards from the model. \
     It might be too busy or the abstract was too complex. Please try again.";

#[derive(Debug, Deserialize)]
pub struct FlashcardParams {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default = "default_num_cards")]
    pub num_cards: usize,
}

fn default_num_cards() -> usize {
    5
}

/// Handle `GET /flashcards`.
pub async fn flashcards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FlashcardParams>,
) -> Html<String> {
    let result = generate_flashcards(
        state.gateway.as_ref(),
        &params.abstract_text,
        params.num_cards,
    )
    .await;

    match result {
        Ok(cards) if !cards.is_empty() => template::render_flashcards(&cards, None),
        Ok(_) => template::render_flashcards(&[], Some(FLASHCARDS_FAILED_MESSAGE)),
        Err(LlmError::NotConfigured) => {
            template::render_flashcards(&[], Some(NOT_CONFIGURED_MESSAGE))
        }
        Err(e) => {
            tracing::warn!(error = %e, "flashcard generation failed");
            template::render_flashcards(&[], Some(FLASHCARDS_FAILED_MESSAGE))
        }
    }
}
