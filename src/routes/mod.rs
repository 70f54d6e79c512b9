use axum::extract::{Path as ReqPath, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use maud::Markup;
use serde::Deserialize;

use crate::html;
use crate::search::{self, KindFilter};
use crate::AppState;

pub mod components;
pub mod files;
pub mod pages;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "type")]
    pub kind: KindFilter,
    pub limit: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/browse", get(pages::browse))
        .route(
            "/components/search-results",
            get(components::search_results),
        )
        .route("/condition/:id", get(pages::condition))
        .route("/medication/:id", get(pages::medication))
        .route("/script/:file", get(files::script))
        .route("/search", get(search))
        .route("/specialty/:id", get(pages::specialty))
        .fallback(pages::fallback)
        .with_state(state)
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<search::SearchResult>> {
    let results = search::search(&state.catalog, &params.query, params.kind, params.limit);
    tracing::info!(
        query = %params.query.trim(),
        kind = ?params.kind,
        count = results.len(),
        "search"
    );
    Json(results)
}
