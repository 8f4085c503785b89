pub mod newsapi;
pub mod service;

pub use newsapi::NewsApiClient;
pub use service::{ArticleService, DEFAULT_PAGE_SIZE};

pub mod prelude {
    pub use super::newsapi::NewsApiClient;
    pub use super::service::ArticleService;
    pub use nt_core::{Article, Category, NewsProvider, Result, Error};
}
