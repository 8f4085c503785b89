use async_trait::async_trait;
use nt_client::{CardState, NewsApi, SummaryController, SummaryOrigin};
use nt_core::{fallback_summary, Article, Error, Language, Result, SummaryRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const LONG_BODY: &str = "The regional council voted to expand the night bus network this week. \
    Officials expect the new routes to serve forty thousand riders.";

#[derive(Debug, Default)]
struct ScriptedApi {
    offline: bool,
    articles: Vec<Article>,
    summaries: HashMap<String, Option<String>>,
    requests: Mutex<Vec<SummaryRequest>>,
    loads: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn with_summary(mut self, title: &str, summary: Option<&str>) -> Self {
        self.summaries.insert(title.to_string(), summary.map(str::to_string));
        self
    }
}

#[async_trait]
impl NewsApi for ScriptedApi {
    async fn articles(&self, category: &str) -> Result<Vec<Article>> {
        self.loads.lock().unwrap().push(category.to_string());
        if self.offline {
            return Err(Error::Provider("connection refused".to_string()));
        }
        Ok(self.articles.clone())
    }

    async fn summary(&self, request: &SummaryRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        match self.summaries.get(&request.title) {
            Some(Some(summary)) => Ok(summary.clone()),
            _ => Err(Error::Provider("503 Service Unavailable".to_string())),
        }
    }
}

fn article(title: &str) -> Article {
    Article::new(
        title.to_string(),
        LONG_BODY.to_string(),
        format!("https://example.com/{}", title.to_lowercase()),
        "Wire".to_string(),
        None,
        None,
    )
}

fn api() -> ScriptedApi {
    ScriptedApi {
        articles: vec![article("Remote"), article("Short"), article("Broken")],
        ..ScriptedApi::default()
    }
    .with_summary("Remote", Some("The council approved new night bus routes."))
    .with_summary("Short", Some("  ok  "))
}

#[tokio::test]
async fn test_cards_start_idle() {
    let mut controller = SummaryController::new(Arc::new(api()), Language::English);
    assert_eq!(controller.load_category("news").await, 3);
    assert!(controller.cards().all(|card| card.state == CardState::Idle));
    let titles: Vec<&str> = controller.cards().map(|c| c.article.title.as_str()).collect();
    assert_eq!(titles, vec!["Remote", "Short", "Broken"]);
}

#[tokio::test]
async fn test_summaries_resolve_to_remote_or_fallback() {
    let mut controller = SummaryController::new(Arc::new(api()), Language::English);
    controller.load_category("news").await;

    assert_eq!(controller.summarize_all().await, 3);

    let state = |key: &str| controller.card(key).unwrap().state.clone();
    let expected_fallback = fallback_summary(&format!("Short. {}", LONG_BODY));

    match state("https://example.com/remote") {
        CardState::Displayed(summary) => {
            assert_eq!(summary.origin, SummaryOrigin::Remote);
            assert_eq!(summary.text, "The council approved new night bus routes.");
        }
        other => panic!("unexpected state: {:?}", other),
    }
    match state("https://example.com/short") {
        CardState::Displayed(summary) => {
            assert_eq!(summary.origin, SummaryOrigin::Fallback);
            assert_eq!(summary.text, expected_fallback);
        }
        other => panic!("unexpected state: {:?}", other),
    }
    match state("https://example.com/broken") {
        CardState::Displayed(summary) => {
            assert_eq!(summary.origin, SummaryOrigin::Fallback);
            assert!(!summary.text.is_empty());
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_loading_and_displayed_cards_do_not_restart() {
    let mut controller = SummaryController::new(Arc::new(api()), Language::English);
    controller.load_category("news").await;
    let key = "https://example.com/remote";

    let pending = controller.begin(key).unwrap();
    assert_eq!(controller.card(key).unwrap().state, CardState::Loading);
    assert!(controller.begin(key).is_none());

    controller.resolve(&pending, Ok("A long enough remote summary text.".to_string()));
    assert!(matches!(controller.card(key).unwrap().state, CardState::Displayed(_)));
    assert!(controller.begin(key).is_none());
    assert!(controller.request_summary(key).await.is_none());
}

#[tokio::test]
async fn test_responses_for_replaced_cards_are_discarded() {
    let mut controller = SummaryController::new(Arc::new(api()), Language::English);
    controller.load_category("news").await;
    let key = "https://example.com/remote";

    let stale = controller.begin(key).unwrap();
    controller.load_category("sports").await;

    assert!(controller.resolve(&stale, Ok("A long enough remote summary text.".to_string())).is_none());
    assert_eq!(controller.card(key).unwrap().state, CardState::Idle);
}

#[tokio::test]
async fn test_language_change_reloads_and_tags_requests() {
    let api = Arc::new(api());
    let mut controller = SummaryController::new(api.clone(), Language::English);
    controller.load_category("business").await;
    let before = controller.generation();

    controller.set_language(Language::French).await;
    assert_eq!(controller.generation(), before + 1);
    assert_eq!(*api.loads.lock().unwrap(), vec!["business", "business"]);

    controller.request_summary("https://example.com/remote").await.unwrap();
    let requests = api.requests.lock().unwrap();
    assert_eq!(requests[0].lang, "fr");
    assert_eq!(requests[0].title, "Remote");
    assert_eq!(requests[0].content, format!("Remote. {}", LONG_BODY));
}

#[tokio::test]
async fn test_failed_list_shows_no_cards() {
    let api = ScriptedApi { offline: true, ..api() };
    let mut controller = SummaryController::new(Arc::new(api), Language::English);
    assert_eq!(controller.load_category("news").await, 0);
    assert!(controller.is_empty());
}
