pub mod error;
pub mod models;
pub mod provider;
pub mod summary;
pub mod types;

pub use error::Error;
pub use models::{CompletionRequest, InferenceModel};
pub use provider::NewsProvider;
pub use summary::{fallback_summary, is_displayable, FALLBACK_PLACEHOLDER};
pub use types::{
    Article, Category, Language, RawArticle, RawSource, SummaryRequest, SummaryResponse,
};

pub type Result<T> = std::result::Result<T, Error>;
