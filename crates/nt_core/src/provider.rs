use async_trait::async_trait;
use std::fmt;
use crate::types::{Category, Language, RawArticle};
use crate::Result;

#[async_trait]
pub trait NewsProvider: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Fetch the current headlines for a category.
    async fn top_headlines(
        &self,
        category: Category,
        page_size: usize,
        language: Language,
    ) -> Result<Vec<RawArticle>>;
}
