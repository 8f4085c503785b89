use async_trait::async_trait;
use nt_core::{Article, Result, SummaryRequest, SummaryResponse};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// The server's HTTP surface as seen by the client.
#[async_trait]
pub trait NewsApi: Send + Sync + fmt::Debug {
    async fn articles(&self, category: &str) -> Result<Vec<Article>>;

    async fn summary(&self, request: &SummaryRequest) -> Result<String>;
}

pub struct HttpNewsApi {
    client: Client,
    base_url: Url,
}

impl HttpNewsApi {
    /// `base_url` is the server root; routes resolve beneath its path, so
    /// `http://host/news` and `http://host/news/` both reach
    /// `http://host/news/api/...`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    pub fn articles_url(&self, category: &str) -> Result<Url> {
        let mut url = self.base_url.join("api/")?;
        url.path_segments_mut()
            .map_err(|_| nt_core::Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(category);
        Ok(url)
    }

    pub fn summary_url(&self, request: &SummaryRequest) -> Result<Url> {
        let mut url = self.base_url.join("api/summarize")?;
        url.query_pairs_mut()
            .append_pair("title", &request.title)
            .append_pair("content", &request.content)
            .append_pair("lang", &request.lang);
        Ok(url)
    }
}

impl fmt::Debug for HttpNewsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpNewsApi")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[async_trait]
impl NewsApi for HttpNewsApi {
    async fn articles(&self, category: &str) -> Result<Vec<Article>> {
        let articles = self.client
            .get(self.articles_url(category)?)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Article>>()
            .await?;
        Ok(articles)
    }

    async fn summary(&self, request: &SummaryRequest) -> Result<String> {
        let response = self.client
            .get(self.summary_url(request)?)
            .send()
            .await?
            .error_for_status()?
            .json::<SummaryResponse>()
            .await?;
        Ok(response.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nt_core::Language;

    #[test]
    fn test_urls() {
        let api = HttpNewsApi::new("http://localhost:5000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            api.articles_url("sports").unwrap().as_str(),
            "http://localhost:5000/api/sports"
        );

        let request = SummaryRequest::new("A & B", "A & B. Body", Language::French);
        assert_eq!(
            api.summary_url(&request).unwrap().as_str(),
            "http://localhost:5000/api/summarize?title=A+%26+B&content=A+%26+B.+Body&lang=fr"
        );
    }

    #[test]
    fn test_urls_keep_base_path_prefix() {
        for base in ["http://host/news", "http://host/news/"] {
            let api = HttpNewsApi::new(base, Duration::from_secs(5)).unwrap();
            assert_eq!(api.articles_url("health").unwrap().as_str(), "http://host/news/api/health");
            let request = SummaryRequest::new("T", "Body", Language::English);
            assert_eq!(
                api.summary_url(&request).unwrap().as_str(),
                "http://host/news/api/summarize?title=T&content=Body&lang=en"
            );
        }
    }
}
