use futures::future::join_all;
use nt_core::{fallback_summary, is_displayable, Article, Language, Result, SummaryRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};
use crate::api::NewsApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrigin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedSummary {
    pub text: String,
    pub origin: SummaryOrigin,
}

impl DisplayedSummary {
    /// Pick the server's summary when it is long enough, the local extractive
    /// summary of `raw` otherwise.
    pub fn resolve(outcome: Result<String>, raw: &str) -> Self {
        match outcome {
            Ok(text) if is_displayable(&text) => Self {
                text: text.trim().to_string(),
                origin: SummaryOrigin::Remote,
            },
            Ok(_) => Self {
                text: fallback_summary(raw),
                origin: SummaryOrigin::Fallback,
            },
            Err(e) => {
                error!("❌ Summary request failed: {}", e);
                Self {
                    text: fallback_summary(raw),
                    origin: SummaryOrigin::Fallback,
                }
            }
        }
    }
}

/// Per-card summary state. There is no way back to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Loading,
    Displayed(DisplayedSummary),
}

#[derive(Debug, Clone)]
pub struct Card {
    pub article: Article,
    pub state: CardState,
}

/// A card that has entered `Loading` and is waiting on the server.
#[derive(Debug, Clone)]
pub struct PendingSummary {
    pub key: String,
    pub generation: u64,
    pub request: SummaryRequest,
}

/// Owns the cards of the currently loaded category.
///
/// Every reload bumps `generation`; responses carrying an older generation
/// belong to cards that no longer exist and are dropped.
#[derive(Debug)]
pub struct SummaryController {
    api: Arc<dyn NewsApi>,
    language: Language,
    category: Option<String>,
    generation: u64,
    order: Vec<String>,
    cards: HashMap<String, Card>,
}

impl SummaryController {
    pub fn new(api: Arc<dyn NewsApi>, language: Language) -> Self {
        Self {
            api,
            language,
            category: None,
            generation: 0,
            order: Vec::new(),
            cards: HashMap::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card(&self, key: &str) -> Option<&Card> {
        self.cards.get(key)
    }

    /// Cards in the order the server listed them.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|key| self.cards.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replace all cards with a fresh `Idle` set for `category`. A failed
    /// fetch leaves an empty list.
    pub async fn load_category(&mut self, category: &str) -> usize {
        self.generation += 1;
        self.category = Some(category.to_string());
        self.order.clear();
        self.cards.clear();

        let articles = match self.api.articles(category).await {
            Ok(articles) => articles,
            Err(e) => {
                error!("❌ Failed to load {}: {}", category, e);
                Vec::new()
            }
        };

        for article in articles {
            let key = article.id().to_string();
            if self.cards.contains_key(&key) {
                debug!("Skipping duplicate article: {}", key);
                continue;
            }
            self.order.push(key.clone());
            self.cards.insert(key, Card { article, state: CardState::Idle });
        }

        info!("📰 Loaded {} {} articles", self.cards.len(), category);
        self.cards.len()
    }

    /// Switch language and reload the current category, if any.
    pub async fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Some(category) = self.category.clone() {
            self.load_category(&category).await;
        }
    }

    /// Move an `Idle` card to `Loading`. Cards already loading or displayed
    /// are left alone.
    pub fn begin(&mut self, key: &str) -> Option<PendingSummary> {
        let card = self.cards.get_mut(key)?;
        if card.state != CardState::Idle {
            return None;
        }
        card.state = CardState::Loading;
        Some(PendingSummary {
            key: key.to_string(),
            generation: self.generation,
            request: SummaryRequest::new(
                card.article.title.clone(),
                card.article.raw.clone(),
                self.language,
            ),
        })
    }

    /// Move a `Loading` card to `Displayed`. Returns `None` if the card has
    /// since been replaced.
    pub fn resolve(&mut self, pending: &PendingSummary, outcome: Result<String>) -> Option<&DisplayedSummary> {
        if pending.generation != self.generation {
            debug!("Discarding summary for detached card: {}", pending.key);
            return None;
        }
        let card = self.cards.get_mut(&pending.key)?;
        if card.state != CardState::Loading {
            return None;
        }

        card.state = CardState::Displayed(DisplayedSummary::resolve(outcome, &card.article.raw));
        match &card.state {
            CardState::Displayed(summary) => Some(summary),
            _ => None,
        }
    }

    /// Fetch and display the summary of a single card.
    pub async fn request_summary(&mut self, key: &str) -> Option<DisplayedSummary> {
        let pending = self.begin(key)?;
        let outcome = self.api.summary(&pending.request).await;
        self.resolve(&pending, outcome).cloned()
    }

    /// Fetch summaries for every idle card concurrently. Returns how many
    /// cards reached `Displayed`.
    pub async fn summarize_all(&mut self) -> usize {
        let keys = self.order.clone();
        let pending: Vec<PendingSummary> = keys.iter().filter_map(|key| self.begin(key)).collect();

        let api = self.api.clone();
        let outcomes = join_all(pending.iter().map(|p| api.summary(&p.request))).await;

        let mut displayed = 0;
        for (p, outcome) in pending.iter().zip(outcomes) {
            if self.resolve(p, outcome).is_some() {
                displayed += 1;
            }
        }
        displayed
    }
}
