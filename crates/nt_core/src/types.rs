use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A news article as served to clients.
///
/// `raw` is derived once from the title and summary and is the text fed to
/// both the AI summarizer and the extractive fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub raw: String,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
}

impl Article {
    pub fn new(
        title: String,
        summary: String,
        url: String,
        source: String,
        published_at: Option<DateTime<Utc>>,
        image_url: Option<String>,
    ) -> Self {
        let raw = format!("{}. {}", title, summary);
        Self {
            title,
            summary,
            raw,
            url,
            source,
            published_at,
            image_url,
        }
    }

    /// Identity used to key per-article client state.
    pub fn id(&self) -> &str {
        if self.url.is_empty() {
            &self.title
        } else {
            &self.url
        }
    }
}

/// Source block of a provider record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}

/// Article record as returned by the news provider. Every field is optional;
/// defaults are applied once when converting into an [`Article`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub source: Option<RawSource>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let summary = non_empty(raw.description)
            .or_else(|| non_empty(raw.content))
            .unwrap_or_default();
        let source = raw
            .source
            .and_then(|s| non_empty(s.name))
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
        let published_at = raw
            .published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Article::new(
            raw.title.unwrap_or_default(),
            summary,
            raw.url.unwrap_or_default(),
            source,
            published_at,
            non_empty(raw.url_to_image),
        )
    }
}

/// Provider categories. Anything outside this list collapses to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Case-insensitive lookup; `news` and unknown names map to `General`.
    pub fn normalize(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or(Category::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    pub fn cache_key(&self) -> String {
        format!("news-{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output language for AI summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    Swahili,
    Arabic,
    Mandarin,
    Cantonese,
}

impl Language {
    /// Unknown or missing codes fall back to English.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_lowercase()).as_deref() {
            Some("fr") => Language::French,
            Some("es") => Language::Spanish,
            Some("sw") => Language::Swahili,
            Some("ar") => Language::Arabic,
            Some("zh") | Some("zh-cn") | Some("cmn") => Language::Mandarin,
            Some("yue") | Some("zh-hk") => Language::Cantonese,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Swahili => "sw",
            Language::Arabic => "ar",
            Language::Mandarin => "zh",
            Language::Cantonese => "yue",
        }
    }

    /// Human-readable name used in prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Swahili => "Swahili",
            Language::Arabic => "Arabic",
            Language::Mandarin => "Mandarin Chinese",
            Language::Cantonese => "Cantonese Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn default_lang() -> String {
    "en".to_string()
}

/// Query of `GET /api/summarize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl SummaryRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>, lang: Language) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            lang: lang.code().to_string(),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(Some(&self.lang))
    }

    /// Title and language together identify a cached summary.
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.title, self.language().code())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normalization() {
        assert_eq!(Category::normalize("news"), Category::General);
        assert_eq!(Category::normalize("Sports"), Category::Sports);
        assert_eq!(Category::normalize(" TECHNOLOGY "), Category::Technology);
        assert_eq!(Category::normalize("weather"), Category::General);
        assert_eq!(Category::normalize("news").cache_key(), "news-general");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code(None), Language::English);
        assert_eq!(Language::from_code(Some("FR")), Language::French);
        assert_eq!(Language::from_code(Some("yue")).display_name(), "Cantonese Chinese");
        assert_eq!(Language::from_code(Some("zh")).display_name(), "Mandarin Chinese");
        assert_eq!(Language::from_code(Some("klingon")), Language::English);
    }

    #[test]
    fn test_summary_request_keys_are_language_qualified() {
        let en = SummaryRequest::new("Title A", "content", Language::English);
        let fr = SummaryRequest::new("Title A", "content", Language::French);
        assert_eq!(en.cache_key(), "Title A-en");
        assert_eq!(fr.cache_key(), "Title A-fr");
        assert_ne!(en.cache_key(), fr.cache_key());
    }

    #[test]
    fn test_summary_request_defaults_to_english() {
        let request: SummaryRequest = serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert_eq!(request.lang, "en");
        assert_eq!(request.language(), Language::English);
    }

    #[test]
    fn test_raw_article_defaults() {
        let raw: RawArticle = serde_json::from_str(
            r#"{
                "title": "Markets rally",
                "description": "",
                "content": "Stocks rose sharply on Monday.",
                "url": "https://example.com/a",
                "source": {"id": null, "name": null},
                "publishedAt": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        let article = Article::from(raw);
        assert_eq!(article.summary, "Stocks rose sharply on Monday.");
        assert_eq!(article.source, UNKNOWN_SOURCE);
        assert_eq!(article.raw, "Markets rally. Stocks rose sharply on Monday.");
        assert!(article.published_at.is_some());
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article::new(
            "T".to_string(),
            "S".to_string(),
            "https://example.com".to_string(),
            "Wire".to_string(),
            None,
            Some("https://example.com/img.png".to_string()),
        );
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/img.png");
        assert!(json.get("publishedAt").is_some());
        assert_eq!(json["raw"], "T. S");
    }
}
