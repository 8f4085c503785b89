use async_trait::async_trait;
use nt_core::{Category, Error, Language, NewsProvider, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";

/// Envelope of a `top-headlines` response.
#[derive(Debug, Default, Deserialize)]
pub struct HeadlinesResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub articles: Option<Vec<RawArticle>>,
}

impl HeadlinesResponse {
    pub fn into_articles(self) -> Result<Vec<RawArticle>> {
        if self.status.as_deref() == Some("error") {
            return Err(Error::Provider(
                self.message.unwrap_or_else(|| "unspecified provider error".to_string()),
            ));
        }
        Ok(self.articles.unwrap_or_default())
    }
}

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, NEWSAPI_BASE_URL, timeout)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn headlines_url(&self, category: Category, page_size: usize, language: Language) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/top-headlines", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("category", category.as_str())
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("language", language.code())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn top_headlines(
        &self,
        category: Category,
        page_size: usize,
        language: Language,
    ) -> Result<Vec<RawArticle>> {
        let url = self.headlines_url(category, page_size, language)?;
        let response = self.client
            .get(url)
            .send()
            .await?
            .json::<HeadlinesResponse>()
            .await?;
        response.into_articles()
    }
}
