use nt_inference::SummaryService;
use nt_news::ArticleService;

/// Both services hold clones of the same process-wide cache.
#[derive(Debug, Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub summaries: SummaryService,
}
