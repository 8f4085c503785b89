use std::sync::Arc;
use nt_core::{Article, Category, Language, NewsProvider};
use nt_storage::{CachedValue, TtlCache};
use tracing::{error, info};

pub const DEFAULT_PAGE_SIZE: usize = 6;
const MIN_PAGE_SIZE: usize = 5;
const MAX_PAGE_SIZE: usize = 6;

/// Cache-fronted category listing. Provider failures read as "no articles".
#[derive(Debug, Clone)]
pub struct ArticleService {
    provider: Arc<dyn NewsProvider>,
    cache: TtlCache<CachedValue>,
    page_size: usize,
}

impl ArticleService {
    pub fn new(provider: Arc<dyn NewsProvider>, cache: TtlCache<CachedValue>) -> Self {
        Self {
            provider,
            cache,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn list(&self, category: &str) -> Vec<Article> {
        let category = Category::normalize(category);
        let key = category.cache_key();
        if let Some(articles) = self.cache.get(&key).await.and_then(CachedValue::into_articles) {
            info!("📦 Article cache hit: {}", key);
            return articles;
        }

        info!("📰 Fetching {} headlines from {}", category, self.provider.name());
        match self.provider.top_headlines(category, self.page_size, Language::English).await {
            Ok(records) => {
                let articles: Vec<Article> = records.into_iter().map(Article::from).collect();
                info!("✨ Fetched {} {} articles", articles.len(), category);
                self.cache.set(key, CachedValue::Articles(articles.clone())).await;
                articles
            }
            Err(e) => {
                error!("❌ Failed to fetch {} headlines: {}", category, e);
                Vec::new()
            }
        }
    }
}
