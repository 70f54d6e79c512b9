//! Backends the search controller can query.
//!
//! `HttpBackend` talks to a running server's `/search` endpoint, while
//! `CatalogBackend` answers from a catalog held in memory.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::data::Catalog;
use crate::search::{self, KindFilter, SearchResult};

/// Errors from a search round trip.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid server url: {0}")]
    InvalidBaseUrl(String),
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search. The query is already trimmed and non-empty.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Queries `GET /search?query=...` on a remote server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base: &str) -> Result<Self, SearchError> {
        let base = Url::parse(base)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(SearchError::InvalidBaseUrl(base.to_string()));
        }
        Ok(HttpBackend {
            http: Client::new(),
            base,
        })
    }

    /// The request url for a query, with the query form-encoded.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path("/search");
        url.query_pairs_mut().clear().append_pair("query", query);
        url
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "sending search request");
        let body = self.http.get(url).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Answers searches from an in-memory catalog.
#[derive(Debug, Clone)]
pub struct CatalogBackend {
    catalog: Arc<Catalog>,
}

impl CatalogBackend {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CatalogBackend { catalog }
    }
}

#[async_trait]
impl SearchBackend for CatalogBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        Ok(search::search(&self.catalog, query, KindFilter::All, None))
    }
}
