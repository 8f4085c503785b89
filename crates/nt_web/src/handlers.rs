use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use nt_core::{Article, SummaryRequest, SummaryResponse};
use crate::AppState;

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Json<Vec<Article>> {
    Json(state.articles.list(&category).await)
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Query(request): Query<SummaryRequest>,
) -> Json<SummaryResponse> {
    let summary = state.summaries.summarize(&request).await;
    Json(SummaryResponse { summary })
}
