use std::fmt;
use nt_core::{CompletionRequest, InferenceModel, Result};

/// Offline model: echoes the first words of the article body. Useful for
/// running the server without provider credentials.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = request
            .prompt
            .split_once("Article:\n")
            .map(|(_, body)| body)
            .unwrap_or(&request.prompt);
        let words: Vec<&str> = body.split_whitespace().take(60).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::build_summary_prompt;
    use nt_core::Language;

    #[tokio::test]
    async fn test_dummy_model_echoes_article_body() {
        let model = DummyModel::new();
        let request = CompletionRequest {
            prompt: build_summary_prompt("This is a test article. It has multiple sentences.", Language::French),
            model: "dummy".to_string(),
            temperature: 0.0,
        };

        let summary = model.complete(&request).await.unwrap();
        assert_eq!(summary, "This is a test article. It has multiple sentences.");
    }
}
