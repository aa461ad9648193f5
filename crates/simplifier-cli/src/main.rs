use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use simplifier_core::{
    Difficulty, MistralClient, PdfBackend, config_file, find_abstract, generate_flashcards,
    generate_quiz, generate_summary,
};
use simplifier_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// Research Paper Simplifier - plain-language summaries, quizzes, and flashcards from PDFs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a paper's abstract in plain language
    Summarize {
        /// Path to the PDF file
        file_path: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Generate a multiple-choice quiz from a paper's abstract
    Quiz {
        /// Path to the PDF file
        file_path: PathBuf,

        /// Number of questions (1-5)
        #[arg(short = 'n', long, default_value_t = 3)]
        num_questions: usize,

        /// Quiz difficulty: easy, medium, or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Generate key-term flashcards from a paper's abstract
    Flashcards {
        /// Path to the PDF file
        file_path: PathBuf,

        /// Number of flashcards (1-10)
        #[arg(short = 'n', long, default_value_t = 5)]
        num_cards: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Summarize {
            file_path,
            no_color,
        } => summarize(&file_path, ColorMode::from_flag(no_color)).await,
        Command::Quiz {
            file_path,
            num_questions,
            difficulty,
            no_color,
        } => quiz(
            &file_path,
            num_questions,
            difficulty,
            ColorMode::from_flag(no_color),
        )
        .await,
        Command::Flashcards {
            file_path,
            num_cards,
            no_color,
        } => flashcards(&file_path, num_cards, ColorMode::from_flag(no_color)).await,
    }
}

fn gateway() -> anyhow::Result<MistralClient> {
    let config = config_file::load_config();
    let client = MistralClient::with_model(
        config.mistral_api_key(),
        config.model(),
        Duration::from_secs(config.timeout_secs()),
    )?;
    Ok(client)
}

fn extract_abstract(file_path: &Path) -> anyhow::Result<String> {
    let text = MupdfBackend::new()
        .extract_text(file_path)
        .with_context(|| format!("could not read {}", file_path.display()))?;
    Ok(find_abstract(&text))
}

async fn summarize(file_path: &Path, colors: ColorMode) -> anyhow::Result<()> {
    let raw_abstract = extract_abstract(file_path)?;
    let summary = generate_summary(&gateway()?, &raw_abstract)
        .await
        .context("summary generation failed")?;

    println!("{}", colors.heading("Abstract"));
    println!("{}\n", colors.dim(&raw_abstract));
    println!("{}", colors.heading("Plain-language summary"));
    println!("{summary}");
    Ok(())
}

async fn quiz(
    file_path: &Path,
    num_questions: usize,
    difficulty: Difficulty,
    colors: ColorMode,
) -> anyhow::Result<()> {
    let raw_abstract = extract_abstract(file_path)?;
    let questions = generate_quiz(&gateway()?, &raw_abstract, num_questions, difficulty)
        .await
        .context("quiz generation failed")?;

    if questions.is_empty() {
        anyhow::bail!("the model returned no usable questions");
    }

    for (i, q) in questions.iter().enumerate() {
        println!(
            "{} {}",
            colors.heading(&format!("Q{}.", i + 1)),
            q.question
        );
        for (letter, option) in ["A", "B", "C", "D"].iter().zip(&q.options) {
            println!("  {letter}) {option}");
        }
        println!(
            "  {} {} — {}\n",
            colors.answer("Answer:"),
            q.answer,
            colors.dim(&q.explanation)
        );
    }
    Ok(())
}

async fn flashcards(file_path: &Path, num_cards: usize, colors: ColorMode) -> anyhow::Result<()> {
    let raw_abstract = extract_abstract(file_path)?;
    let cards = generate_flashcards(&gateway()?, &raw_abstract, num_cards)
        .await
        .context("flashcard generation failed")?;

    if cards.is_empty() {
        anyhow::bail!("the model returned no usable flashcards");
    }

    for card in &cards {
        println!("{}", colors.term(&card.term));
        println!("  {}\n", card.definition);
    }
    Ok(())
}
