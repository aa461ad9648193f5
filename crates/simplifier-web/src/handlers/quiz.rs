use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use simplifier_core::{Difficulty, LlmError, generate_quiz};

use super::NOT_CONFIGURED_MESSAGE;
use crate::state::AppState;
use crate::template;

const QUIZ_FAILED_MESSAGE: &str = "Failed to generate quiz from the model. It might be \
     too busy or the abstract was too complex. Please try again.";

#[derive(Debug, Deserialize)]
pub struct QuizParams {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_num_questions")]
    pub num_questions: usize,
}

fn default_num_questions() -> usize {
    3
}

/// Handle `GET /quiz`.
pub async fn quiz(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuizParams>,
) -> Html<String> {
    let result = generate_quiz(
        state.gateway.as_ref(),
        &params.abstract_text,
        params.num_questions,
        params.difficulty,
    )
    .await;

    match result {
        Ok(questions) if !questions.is_empty() => template::render_quiz(&questions, None),
        Ok(_) => template::render_quiz(&[], Some(QUIZ_FAILED_MESSAGE)),
        Err(LlmError::NotConfigured) => template::render_quiz(&[], Some(NOT_CONFIGURED_MESSAGE)),
        Err(e) => {
            tracing::warn!(error = %e, "quiz generation failed");
            template::render_quiz(&[], Some(QUIZ_FAILED_MESSAGE))
        }
    }
}
