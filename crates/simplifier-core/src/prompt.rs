//! Prompt construction for the three generation tasks.
//!
//! Each builder substitutes its parameters into a fixed instruction
//! skeleton; there is no other branching.

use crate::Difficulty;

/// Bounds on the number of quiz questions per request.
pub const QUIZ_COUNT_RANGE: (usize, usize) = (1, 5);
/// Bounds on the number of flashcards per request.
pub const FLASHCARD_COUNT_RANGE: (usize, usize) = (1, 10);

/// A role-tagged instruction pair sent to the model.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the plain-language summary prompt. Free-text output is expected.
pub fn summary_prompt(abstract_text: &str) -> Prompt {
    Prompt {
        system: "You are a helpful assistant. Your task is to summarize the following \
                 academic abstract into one simple, easy-to-understand paragraph for a \
                 non-expert."
            .to_string(),
        user: format!("Please summarize this abstract:\n\n{abstract_text}"),
    }
}

/// Build the quiz prompt. JSON-only output is expected.
///
/// `num_questions` is clamped to 1..=5.
pub fn quiz_prompt(text: &str, num_questions: usize, difficulty: Difficulty) -> Prompt {
    let count = num_questions.clamp(QUIZ_COUNT_RANGE.0, QUIZ_COUNT_RANGE.1);
    Prompt {
        system: "You are a helpful assistant that strictly follows instructions to \
                 generate a quiz in a JSON format."
            .to_string(),
        user: format!(
            "You are an expert at creating educational quizzes from academic text.\n\
             Your task is to generate a quiz with {count} unique, high-quality questions \
             based on the provided text.\n\n\
             Rules:\n\
             - Output ONLY a valid JSON object with a single key \"questions\".\n\
             - Each item must have keys: \"question\", \"options\" (an array of 4 strings), \
             \"answer\" (\"A\", \"B\", \"C\", or \"D\"), and \"explanation\".\n\
             - The difficulty level should be: {difficulty}.\n\
             - Base all questions STRICTLY on the text provided below.\n\n\
             ### Provided Text ###\n\
             {text}"
        ),
    }
}

/// Build the flashcards prompt. JSON-only output is expected.
///
/// `num_cards` is clamped to 1..=10.
pub fn flashcards_prompt(text: &str, num_cards: usize) -> Prompt {
    let count = num_cards.clamp(FLASHCARD_COUNT_RANGE.0, FLASHCARD_COUNT_RANGE.1);
    Prompt {
        system: "You are a helpful assistant that strictly follows instructions to \
                 generate flashcards in a JSON format."
            .to_string(),
        user: format!(
            "You are an expert at creating educational study materials.\n\
             Your task is to generate {count} key-term flashcards based on the provided \
             text.\n\n\
             Rules:\n\
             - Output ONLY a valid JSON object with a single key \"flashcards\".\n\
             - Each item must have two keys: \"term\" (a key concept or name) and \
             \"definition\" (a clear, concise explanation).\n\
             - Base all flashcards STRICTLY on the text provided below.\n\n\
             ### Provided Text ###\n\
             {text}"
        ),
    }
}
