use chrono::{DateTime, Duration, Utc};
use nt_core::Article;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::clock::{Clock, SystemClock};
use crate::default_ttl;

/// Values shared by the article-list and summary endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Articles(Vec<Article>),
    Summary(String),
}

impl CachedValue {
    pub fn into_articles(self) -> Option<Vec<Article>> {
        match self {
            CachedValue::Articles(articles) => Some(articles),
            CachedValue::Summary(_) => None,
        }
    }

    pub fn into_summary(self) -> Option<String> {
        match self {
            CachedValue::Summary(summary) => Some(summary),
            CachedValue::Articles(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub timestamp: DateTime<Utc>,
}

/// Process-wide key/value store whose entries read as absent once they are
/// `ttl` old. Clones share the same underlying map.
///
/// Expired entries are never evicted eagerly; they are skipped on read and
/// replaced by the next `set` for the same key.
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    entries: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<V: Clone + Send + Sync> TtlCache<V> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), default_ttl())
    }

    pub fn with_clock(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if self.clock.now() - entry.timestamp < self.ttl {
            Some(entry.value.clone())
        } else {
            tracing::debug!("Cache entry expired: {}", key);
            None
        }
    }

    /// Store `value` stamped with the current time; the last write wins.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            timestamp: self.clock.now(),
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Number of physically stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone + Send + Sync> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
