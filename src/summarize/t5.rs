//! Local abstractive summarization using a T5 checkpoint via candle.
//!
//! Weights come from the Hugging Face Hub (downloaded on first use, cached
//! afterwards). Decoding is greedy, so the same input always produces the
//! same summary.

use super::{GenerationBounds, ModelError, SummaryModel};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

/// T5 was trained with task prefixes
const TASK_PREFIX: &str = "summarize: ";

pub struct T5Summarizer {
    model: t5::T5ForConditionalGeneration,
    config: t5::Config,
    tokenizer: Tokenizer,
    device: Device,
}

impl T5Summarizer {
    /// Load model from Hugging Face Hub (downloads on first use)
    pub fn load(model_id: &str, revision: &str, max_encoder_tokens: usize) -> Result<Self, ModelError> {
        // Try CUDA if feature enabled, otherwise CPU only
        #[cfg(feature = "cuda")]
        let device = if candle_core::utils::cuda_is_available() {
            match Device::new_cuda(0) {
                Ok(dev) => {
                    info!("Summarizer using CUDA device (GPU)");
                    dev
                }
                Err(e) => {
                    info!("CUDA device creation failed: {}, falling back to CPU", e);
                    Device::Cpu
                }
            }
        } else {
            info!("CUDA not available, summarizer using CPU");
            Device::Cpu
        };

        #[cfg(not(feature = "cuda"))]
        let device = {
            debug!("Summarizer using CPU (cuda feature not enabled)");
            Device::Cpu
        };

        let api = Api::new()?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            revision.to_string(),
        ));

        let config_path = repo.get("config.json")?;
        let tokenizer_path = repo.get("tokenizer.json")?;
        let weights_path = repo.get("model.safetensors")?;

        let config: t5::Config = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(ModelError::Tokenizer)?;
        let truncation = TruncationParams {
            max_length: max_encoder_tokens,
            ..Default::default()
        };
        tokenizer
            .with_truncation(Some(truncation))
            .map_err(ModelError::Tokenizer)?;

        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? };
        let model = t5::T5ForConditionalGeneration::load(vb, &config)?;

        info!("Summarization model loaded: {}", model_id);

        Ok(Self {
            model,
            config,
            tokenizer,
            device,
        })
    }

    fn decoder_start_token(&self) -> u32 {
        self.config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32
    }
}

impl SummaryModel for T5Summarizer {
    fn generate(&mut self, text: &str, bounds: GenerationBounds) -> Result<String, ModelError> {
        let prompt = format!("{}{}", TASK_PREFIX, text);
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(ModelError::Tokenizer)?;
        debug!(tokens = encoding.get_ids().len(), "Encoding summary input");

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        self.model.clear_kv_cache();
        let encoder_output = self.model.encode(&input_ids)?;

        let eos = self.config.eos_token_id as u32;
        let mut decoder_tokens = vec![self.decoder_start_token()];
        let mut generated: Vec<u32> = Vec::with_capacity(bounds.max_tokens);

        while generated.len() < bounds.max_tokens {
            // With the KV cache only the newest token has to be fed back in
            let decoder_input = if generated.is_empty() || !self.config.use_cache {
                Tensor::new(decoder_tokens.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = decoder_tokens[decoder_tokens.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits: Vec<f32> = self
                .model
                .decode(&decoder_input, &encoder_output)?
                .squeeze(0)?
                .to_dtype(DType::F32)?
                .to_vec1()?;

            let banned = if generated.len() < bounds.min_tokens { Some(eos) } else { None };
            let next = greedy_pick(&logits, banned).ok_or(ModelError::EmptyLogits)?;
            if next == eos {
                break;
            }
            decoder_tokens.push(next);
            generated.push(next);
        }

        let summary = self
            .tokenizer
            .decode(&generated, true)
            .map_err(ModelError::Tokenizer)?;
        Ok(summary.trim().to_string())
    }
}

/// Index of the highest logit, skipping `banned`. First index wins ties.
pub fn greedy_pick(logits: &[f32], banned: Option<u32>) -> Option<u32> {
    let mut best: Option<(u32, f32)> = None;
    for (i, &score) in logits.iter().enumerate() {
        let id = i as u32;
        if Some(id) == banned || score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}
