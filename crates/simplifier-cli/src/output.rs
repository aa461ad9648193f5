use owo_colors::OwoColorize;

/// Whether to colorize terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    On,
    Off,
}

impl ColorMode {
    pub fn from_flag(no_color: bool) -> Self {
        if no_color { ColorMode::Off } else { ColorMode::On }
    }

    pub fn heading(&self, text: &str) -> String {
        match self {
            ColorMode::On => text.bold().blue().to_string(),
            ColorMode::Off => text.to_string(),
        }
    }

    pub fn term(&self, text: &str) -> String {
        match self {
            ColorMode::On => text.bold().green().to_string(),
            ColorMode::Off => text.to_string(),
        }
    }

    pub fn answer(&self, text: &str) -> String {
        match self {
            ColorMode::On => text.bold().yellow().to_string(),
            ColorMode::Off => text.to_string(),
        }
    }

    pub fn dim(&self, text: &str) -> String {
        match self {
            ColorMode::On => text.dimmed().to_string(),
            ColorMode::Off => text.to_string(),
        }
    }
}
