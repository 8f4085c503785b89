use anyhow::Context;
use clap::Parser;
use nt_client::{display_title, CardState, HttpNewsApi, SummaryController, EMPTY_LIST_MESSAGE};
use nt_core::Language;
use nt_inference::{FailurePolicy, ModelKind, SummaryService};
use nt_news::{ArticleService, NewsApiClient, DEFAULT_PAGE_SIZE};
use nt_storage::TtlCache;
use nt_web::AppState;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod logging;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `<n>[s|m|h]` segments, e.g. `20s`, `1m30s`, or a bare `45`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err("Duration must include a number".to_string());
        }

        let mut total_seconds = 0u64;
        let mut rest = input;
        while !rest.is_empty() {
            let digits = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits == 0 {
                return Err(format!("Expected a number in duration: {}", input));
            }
            let value = rest[..digits]
                .parse::<u64>()
                .map_err(|_| format!("Invalid number in duration: {}", input))?;
            rest = &rest[digits..];

            let multiplier = match rest.chars().next() {
                None => 1,
                Some('s') => 1,
                Some('m') => 60,
                Some('h') => 3600,
                Some(unit) => return Err(format!("Invalid duration unit: {}", unit)),
            };
            if !rest.is_empty() {
                rest = &rest[1..];
            }

            total_seconds = value
                .checked_mul(multiplier)
                .and_then(|seconds| total_seconds.checked_add(seconds))
                .ok_or_else(|| format!("Duration too large: {}", input))?;
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "News headlines with AI summaries", long_about = None)]
pub struct Cli {
    /// Timeout for every outbound HTTP request (e.g. 20s, 1m)
    #[arg(long, default_value = "20s", global = true)]
    request_timeout: HumanDuration,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Fetch a category from a running server and print summaries
    Browse(BrowseArgs),
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    news_api_key: Option<String>,
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,
    #[arg(long, value_enum, default_value_t = ModelKind::Openai, help = "Model to use for inference")]
    model: ModelKind,
    #[arg(long, default_value = nt_inference::DEFAULT_MODEL_NAME)]
    model_name: String,
    #[arg(long, default_value = nt_inference::DEFAULT_BASE_URL)]
    model_url: String,
    #[arg(long, default_value_t = nt_inference::DEFAULT_TEMPERATURE)]
    temperature: f32,
    /// Articles per category (5 or 6)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// What the summary endpoint returns when the model fails
    #[arg(long, value_enum, default_value_t = FailurePolicy::Empty)]
    on_ai_failure: FailurePolicy,
    /// Directory of static assets served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct BrowseArgs {
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,
    #[arg(long, default_value = "news")]
    category: String,
    /// Summary language code (en, fr, es, sw, ar, zh, yue)
    #[arg(long, default_value = "en")]
    lang: String,
}

async fn serve(args: ServeArgs, timeout: Duration) -> anyhow::Result<()> {
    let cache = TtlCache::new();

    let inference_config = nt_inference::Config {
        kind: args.model,
        api_key: args.openai_api_key,
        model_name: args.model_name,
        base_url: args.model_url,
        temperature: args.temperature,
        timeout,
    };
    let model = nt_inference::create_model(inference_config.clone())?;
    let summaries = SummaryService::new(model, cache.clone())
        .with_config(&inference_config)
        .with_policy(args.on_ai_failure);

    let provider = Arc::new(NewsApiClient::new(args.news_api_key, timeout)?);
    let articles = ArticleService::new(provider, cache).with_page_size(args.page_size);
    info!("📰 News provider ready ({} articles per category)", articles.page_size());

    let app = nt_web::create_app(AppState { articles, summaries }, args.static_dir);
    nt_web::serve(app, SocketAddr::new(args.host, args.port))
        .await
        .context("server stopped")?;
    Ok(())
}

async fn browse(args: BrowseArgs, timeout: Duration) -> anyhow::Result<()> {
    let api = Arc::new(HttpNewsApi::new(&args.server, timeout)?);
    let mut controller = SummaryController::new(api, Language::from_code(Some(&args.lang)));

    if controller.load_category(&args.category).await == 0 {
        println!("{}", EMPTY_LIST_MESSAGE);
        return Ok(());
    }
    controller.summarize_all().await;

    for card in controller.cards() {
        println!("## {}", display_title(&card.article.title));
        if !card.article.summary.is_empty() {
            println!("{}", card.article.summary);
        }
        if let CardState::Displayed(summary) = &card.state {
            println!("\n{}", summary.text);
        }
        println!("\nSource: {}\nRead: {}\n", card.article.source, card.article.url);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();
    let cli = Cli::parse();
    let timeout = cli.request_timeout.0;

    match cli.command {
        Commands::Serve(args) => serve(args, timeout).await,
        Commands::Browse(args) => browse(args, timeout).await,
    }
}
