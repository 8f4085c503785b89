use std::sync::Arc;
use nt_core::{fallback_summary, is_displayable, CompletionRequest, InferenceModel, SummaryRequest};
use nt_storage::{CachedValue, TtlCache};
use tracing::{info, warn};
use crate::prompt::build_summary_prompt;
use crate::{Config, DEFAULT_MODEL_NAME, DEFAULT_TEMPERATURE};

/// What to hand back when the model fails or produces nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Return an empty summary and let the client fall back.
    #[default]
    Empty,
    /// Return the extractive fallback of the request content.
    Fallback,
}

/// Cache-fronted AI summarization.
///
/// Successful completions are cached under `title-lang`; failures are never
/// cached, so the next request retries the model.
#[derive(Debug, Clone)]
pub struct SummaryService {
    model: Arc<dyn InferenceModel>,
    cache: TtlCache<CachedValue>,
    model_name: String,
    temperature: f32,
    policy: FailurePolicy,
}

impl SummaryService {
    pub fn new(model: Arc<dyn InferenceModel>, cache: TtlCache<CachedValue>) -> Self {
        Self {
            model,
            cache,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.model_name = config.model_name.clone();
        self.temperature = config.temperature;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> String {
        let key = request.cache_key();
        if let Some(summary) = self.cache.get(&key).await.and_then(CachedValue::into_summary) {
            info!("📦 Summary cache hit: {}", key);
            return summary;
        }

        info!("🤖 Generating {} summary for: {}", request.language().display_name(), request.title);
        let completion = CompletionRequest {
            prompt: build_summary_prompt(&request.content, request.language()),
            model: self.model_name.clone(),
            temperature: self.temperature,
        };

        match self.model.complete(&completion).await {
            Ok(text) if is_displayable(&text) => {
                let summary = text.trim().to_string();
                self.cache.set(key, CachedValue::Summary(summary.clone())).await;
                summary
            }
            Ok(text) => {
                warn!("⚠️ {} returned unusable summary ({} chars) for: {}", self.model.name(), text.trim().chars().count(), request.title);
                self.degrade(request)
            }
            Err(e) => {
                warn!("⚠️ {} summarization failed for {}: {}", self.model.name(), request.title, e);
                self.degrade(request)
            }
        }
    }

    fn degrade(&self, request: &SummaryRequest) -> String {
        match self.policy {
            FailurePolicy::Empty => String::new(),
            FailurePolicy::Fallback => fallback_summary(&request.content),
        }
    }
}
