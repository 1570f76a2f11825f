//! Case summaries
//!
//! The summarizer never fails: every problem maps to a fixed message or a
//! naive fallback. The model is an explicit capability handed in by the
//! caller, either available or not; there is no global model instance.

pub mod t5;

use crate::settings::Settings;
use crate::utils::{is_blank, truncate_chars, word_count};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const MODEL_UNAVAILABLE: &str = "AI summarizer model could not be loaded.";
pub const NO_TEXT: &str = "No text was provided to summarize.";
pub const GENERATION_FAILED: &str = "AI summary could not be generated for this document.";

/// Errors from loading or running the summarization model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to fetch model files: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse model config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Tokenizer error: {0}")]
    Tokenizer(tokenizers::Error),
    #[error("Model inference failed: {0}")]
    Candle(#[from] candle_core::Error),
    #[error("Model produced no logits")]
    EmptyLogits,
}

/// Output length limits, in model tokens. Decoding is always greedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationBounds {
    pub max_tokens: usize,
    pub min_tokens: usize,
}

/// A text-to-text model that condenses its input
pub trait SummaryModel {
    fn generate(&mut self, text: &str, bounds: GenerationBounds) -> Result<String, ModelError>;
}

/// The summarization capability, present or not
pub enum ModelHandle {
    Available(Box<dyn SummaryModel>),
    /// Loading failed or was disabled; the reason is kept for diagnostics
    Unavailable(String),
}

impl ModelHandle {
    /// Build the handle described by the settings.
    ///
    /// A load failure is logged and produces `Unavailable`, never an error.
    pub fn load(settings: &Settings) -> Self {
        if !settings.load_model {
            info!("Summarization model disabled by settings");
            return ModelHandle::Unavailable("disabled".to_string());
        }

        match t5::T5Summarizer::load(
            &settings.summarizer_model,
            &settings.model_revision,
            settings.max_encoder_tokens,
        ) {
            Ok(model) => ModelHandle::Available(Box::new(model)),
            Err(e) => {
                error!(
                    "Failed to load summarization model {}. Summaries will be disabled. Error: {}",
                    settings.summarizer_model, e
                );
                ModelHandle::Unavailable(e.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ModelHandle::Available(_))
    }
}

/// Turns extracted document text into a short summary
pub struct Summarizer {
    model: ModelHandle,
    max_input_chars: usize,
    short_text_words: usize,
    bounds: GenerationBounds,
}

impl Summarizer {
    pub fn new(model: ModelHandle, settings: &Settings) -> Self {
        Self {
            model,
            max_input_chars: settings.max_input_chars,
            short_text_words: settings.short_text_words,
            bounds: GenerationBounds {
                max_tokens: settings.max_summary_tokens,
                min_tokens: settings.min_summary_tokens,
            },
        }
    }

    pub fn summarize(&mut self, text: &str) -> String {
        let model = match &mut self.model {
            ModelHandle::Available(model) => model,
            ModelHandle::Unavailable(reason) => {
                debug!("Summarizer unavailable: {}", reason);
                return MODEL_UNAVAILABLE.to_string();
            }
        };

        if is_blank(text) {
            return NO_TEXT.to_string();
        }

        if word_count(text) < self.short_text_words {
            return naive_summary(text);
        }

        let input = truncate_chars(text, self.max_input_chars);
        match model.generate(input, self.bounds) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary generation failed: {}", e);
                GENERATION_FAILED.to_string()
            }
        }
    }
}

/// First three `.`-delimited segments, re-joined, plus a trailing period
pub fn naive_summary(text: &str) -> String {
    let head: Vec<&str> = text.split('.').take(3).collect();
    format!("{}.", head.join("."))
}
