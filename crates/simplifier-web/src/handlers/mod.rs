pub mod flashcards;
pub mod index;
pub mod quiz;
pub mod upload;

/// Placeholder shown when the model client has no API key.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Model client not configured. Set MISTRAL_API_KEY in the environment or config file.";
