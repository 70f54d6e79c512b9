use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use crate::client::{CatalogBackend, HttpBackend, SearchBackend};
use crate::controller::SearchController;
use crate::data::Catalog;

mod client;
mod controller;
mod data;
mod html;
mod routes;
mod search;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

#[derive(Parser)]
#[command(name = "medref", about = "Medical reference search server")]
struct Cli {
    /// Catalog file to serve instead of the bundled one.
    #[arg(long, env = "MEDREF_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (the default).
    Serve {
        #[arg(long, env = "MEDREF_BIND", default_value = default_bind())]
        bind: SocketAddr,
    },
    /// Run one search through the search controller and print the results
    /// panel.
    Search {
        query: String,

        /// Query a running server instead of the local catalog.
        #[arg(long, env = "MEDREF_SERVER")]
        server: Option<String>,
    },
}

#[cfg(debug_assertions)]
fn default_bind() -> &'static str {
    "127.0.0.1:3000"
}

#[cfg(not(debug_assertions))]
fn default_bind() -> &'static str {
    "0.0.0.0:80"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("medref=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let catalog_load_start = Instant::now();
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::seeded().context("loading bundled catalog")?,
    };
    let (conditions, medications, specialties) = catalog.counts();
    tracing::info!(
        conditions,
        medications,
        specialties,
        elapsed = ?catalog_load_start.elapsed(),
        "catalog loaded"
    );
    let catalog = Arc::new(catalog);

    match cli.command {
        Some(Command::Search { query, server }) => match server {
            Some(server) => run_search(HttpBackend::new(&server)?, &query).await,
            None => run_search(CatalogBackend::new(catalog), &query).await,
        },
        Some(Command::Serve { bind }) => serve(catalog, bind).await,
        None => serve(catalog, default_bind().parse()?).await,
    }
}

async fn serve(catalog: Arc<Catalog>, bind: SocketAddr) -> anyhow::Result<()> {
    let app = routes::router(AppState { catalog });
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_search(backend: impl SearchBackend + 'static, query: &str) -> anyhow::Result<()> {
    let controller = SearchController::new(backend);
    let Some(request) = controller.submit(query) else {
        tracing::warn!("empty query, nothing to search");
        return Ok(());
    };
    request.await?;

    let panel = controller.panel();
    if !panel.is_visible() {
        anyhow::bail!("search failed, see log for details");
    }
    println!("{}", panel.list_html());
    Ok(())
}
