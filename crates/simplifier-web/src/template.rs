use axum::response::Html;

use simplifier_core::{Flashcard, QuizQuestion};

const INDEX_HTML: &str = include_str!("../../../templates/index.html");
const RESULTS_HTML: &str = include_str!("../../../templates/results.html");
const QUIZ_HTML: &str = include_str!("../../../templates/quiz.html");
const FLASHCARDS_HTML: &str = include_str!("../../../templates/flashcards.html");

/// Render the landing page.
pub fn render_index() -> Html<String> {
    Html(INDEX_HTML.to_string())
}

/// Render the results view with the summary and the raw abstract.
pub fn render_results(filename: &str, summary: &str, raw_abstract: &str) -> Html<String> {
    let html = RESULTS_HTML
        .replace("{{ filename }}", &escape_html(filename))
        .replace("{{ summary }}", &escape_html(summary))
        .replace("{{ raw_abstract }}", &escape_html(raw_abstract))
        .replace("{{ abstract_attr }}", &escape_html(raw_abstract));
    Html(html)
}

/// Render the quiz view: the question list on success, an error box otherwise.
pub fn render_quiz(questions: &[QuizQuestion], error: Option<&str>) -> Html<String> {
    let content = match error {
        Some(message) => error_fragment(message),
        None => questions.iter().map(question_fragment).collect(),
    };
    Html(QUIZ_HTML.replace("{{ content }}", &content))
}

/// Render the flashcards view.
pub fn render_flashcards(cards: &[Flashcard], error: Option<&str>) -> Html<String> {
    let content = match error {
        Some(message) => error_fragment(message),
        None => cards.iter().map(flashcard_fragment).collect(),
    };
    Html(FLASHCARDS_HTML.replace("{{ content }}", &content))
}

fn question_fragment(q: &QuizQuestion) -> String {
    let options: String = q
        .options
        .iter()
        .map(|o| format!("<li>{}</li>\n", escape_html(o)))
        .collect();
    format!(
        "<div class=\"question\">\n\
         <p>{question}</p>\n\
         <ol>\n{options}</ol>\n\
         <details><summary>Answer</summary>\n\
         <p><strong>{answer}</strong> — {explanation}</p>\n\
         </details>\n\
         </div>\n",
        question = escape_html(&q.question),
        answer = escape_html(&q.answer),
        explanation = escape_html(&q.explanation),
    )
}

fn flashcard_fragment(card: &Flashcard) -> String {
    format!(
        "<div class=\"flashcard\">\n\
         <p class=\"term\">{}</p>\n\
         <p>{}</p>\n\
         </div>\n",
        escape_html(&card.term),
        escape_html(&card.definition),
    )
}

fn error_fragment(message: &str) -> String {
    format!("<div class=\"error\">{}</div>\n", escape_html(message))
}

/// Escape text for interpolation into HTML bodies and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_results_interpolates() {
        let Html(html) = render_results("paper.pdf", "X is a simplified thing.", "We present X.");
        assert!(html.contains("paper.pdf"));
        assert!(html.contains("X is a simplified thing."));
        assert!(html.contains("We present X."));
        assert!(!html.contains("{{ summary }}"));
    }

    #[test]
    fn test_render_results_escapes_html() {
        let Html(html) = render_results("<b>.pdf", "a & b", "x < y");
        assert!(html.contains("&lt;b&gt;.pdf"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("x &lt; y"));
    }

    #[test]
    fn test_render_quiz_questions() {
        let questions = vec![QuizQuestion {
            question: "What is presented?".into(),
            options: vec!["X".into(), "Y".into(), "Z".into(), "W".into()],
            answer: "A".into(),
            explanation: "From the abstract.".into(),
        }];
        let Html(html) = render_quiz(&questions, None);
        assert!(html.contains("What is presented?"));
        assert!(html.contains("<li>X</li>"));
        assert!(html.contains("From the abstract."));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_quiz_error() {
        let Html(html) = render_quiz(&[], Some("Generation failed."));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Generation failed."));
    }

    #[test]
    fn test_render_flashcards() {
        let cards = vec![Flashcard {
            term: "Entropy".into(),
            definition: "Disorder.".into(),
        }];
        let Html(html) = render_flashcards(&cards, None);
        assert!(html.contains("Entropy"));
        assert!(html.contains("Disorder."));
    }
}
