use chrono::Duration;

pub mod cache;
pub mod clock;

pub use cache::{CacheEntry, CachedValue, TtlCache};
pub use clock::{Clock, ManualClock, SystemClock};

/// How long any cache entry stays readable, in seconds.
pub const DEFAULT_TTL_SECS: i64 = 5 * 60;

pub fn default_ttl() -> Duration {
    Duration::seconds(DEFAULT_TTL_SECS)
}

pub mod prelude {
    pub use super::cache::*;
    pub use super::clock::*;
    pub use super::{default_ttl, DEFAULT_TTL_SECS};
}
