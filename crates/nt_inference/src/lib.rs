use std::time::Duration;

pub mod models;
pub mod prompt;
pub mod summarizer;

pub const DEFAULT_MODEL_NAME: &str = "gpt-5-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Which [`nt_core::InferenceModel`] implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelKind {
    #[default]
    Openai,
    Dummy,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub kind: ModelKind,
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: ModelKind::default(),
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(20),
        }
    }
}

pub mod prelude {
    pub use super::{Config, ModelKind};
    pub use super::models::create_model;
    pub use super::summarizer::{FailurePolicy, SummaryService};
    pub use nt_core::{InferenceModel, Result, Error};
}

pub use models::create_model;
pub use summarizer::{FailurePolicy, SummaryService};
