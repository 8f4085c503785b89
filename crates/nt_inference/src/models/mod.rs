use std::sync::Arc;
use nt_core::{InferenceModel, Result};
use crate::{Config, ModelKind};

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

pub fn create_model(config: Config) -> Result<Arc<dyn InferenceModel>> {
    let model: Arc<dyn InferenceModel> = match config.kind {
        ModelKind::Openai => Arc::new(OpenAiModel::new(&config)?),
        ModelKind::Dummy => Arc::new(DummyModel::new()),
    };
    tracing::info!("🧠 Inference model initialized (using {})", model.name());
    Ok(model)
}
