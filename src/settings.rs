//! Analyzer settings
//!
//! Stores model selection and summarization bounds in a JSON file in the
//! user's config directory. Every field has a default, so a partial (or
//! missing) file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable pointing at an alternative settings file
pub const CONFIG_ENV: &str = "LEXBRIEF_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Hugging Face model id of the T5 summarization checkpoint
    #[serde(default = "default_summarizer_model")]
    pub summarizer_model: String,
    #[serde(default = "default_model_revision")]
    pub model_revision: String,
    /// Set to false to skip model loading entirely (summaries fall back)
    #[serde(default = "default_true")]
    pub load_model: bool,
    /// Hard character cut applied before the text reaches the model
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Texts with fewer words than this get the naive summary
    #[serde(default = "default_short_text_words")]
    pub short_text_words: usize,
    #[serde(default = "default_max_summary_tokens")]
    pub max_summary_tokens: usize,
    #[serde(default = "default_min_summary_tokens")]
    pub min_summary_tokens: usize,
    /// Encoder-side token limit (T5 was trained on 512)
    #[serde(default = "default_max_encoder_tokens")]
    pub max_encoder_tokens: usize,
}

fn default_summarizer_model() -> String {
    "google-t5/t5-small".to_string()
}

fn default_model_revision() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_input_chars() -> usize {
    4000
}

fn default_short_text_words() -> usize {
    50
}

fn default_max_summary_tokens() -> usize {
    150
}

fn default_min_summary_tokens() -> usize {
    40
}

fn default_max_encoder_tokens() -> usize {
    512
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            summarizer_model: default_summarizer_model(),
            model_revision: default_model_revision(),
            load_model: true,
            max_input_chars: default_max_input_chars(),
            short_text_words: default_short_text_words(),
            max_summary_tokens: default_max_summary_tokens(),
            min_summary_tokens: default_min_summary_tokens(),
            max_encoder_tokens: default_max_encoder_tokens(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Settings::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), "Malformed settings file, using defaults: {}", e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), "Failed to read settings file, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Load from an explicit path if given, otherwise from the default location
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) => Self::load(&path),
                None => Settings::default(),
            },
        }
    }
}

/// `<config_dir>/lexbrief/settings.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lexbrief").join("settings.json"))
}
