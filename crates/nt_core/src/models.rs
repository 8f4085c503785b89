use async_trait::async_trait;
use std::fmt;
use crate::Result;

/// A single prompt sent to a completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Run a completion and return its free text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
