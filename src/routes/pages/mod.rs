use axum::http::Uri;

use super::*;

type PageResult = Result<Markup, (StatusCode, Markup)>;

#[derive(Deserialize)]
pub struct HomeParams {
    query: Option<String>,
}

pub async fn home(State(state): State<AppState>, Query(params): Query<HomeParams>) -> Markup {
    let query = params.query.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        return html::pages::home(&state.catalog, query, None);
    }

    let results = search::search(&state.catalog, query, KindFilter::All, None);
    tracing::info!(query, count = results.len(), "home page search");
    html::pages::home(&state.catalog, query, Some(&results))
}

pub async fn browse(State(state): State<AppState>) -> Markup {
    html::pages::browse(&state.catalog)
}

/// Records are addressed by numeric id or by exact name.
pub async fn condition(State(state): State<AppState>, ReqPath(key): ReqPath<String>) -> PageResult {
    let catalog = &state.catalog;
    let condition = match key.parse() {
        Ok(id) => catalog.condition(id).ok(),
        Err(_) => catalog.conditions().find(|c| c.name() == key),
    };
    match condition {
        Some(condition) => Ok(html::pages::detail::condition(&condition)),
        None => Err(missing("condition", &key)),
    }
}

pub async fn medication(State(state): State<AppState>, ReqPath(key): ReqPath<String>) -> PageResult {
    let catalog = &state.catalog;
    let medication = match key.parse() {
        Ok(id) => catalog.medication(id).ok(),
        Err(_) => catalog.medications().find(|m| m.name() == key),
    };
    match medication {
        Some(medication) => Ok(html::pages::detail::medication(&medication)),
        None => Err(missing("medication", &key)),
    }
}

pub async fn specialty(State(state): State<AppState>, ReqPath(key): ReqPath<String>) -> PageResult {
    let catalog = &state.catalog;
    let specialty = match key.parse() {
        Ok(id) => catalog.specialty(id).ok(),
        Err(_) => catalog.specialties().find(|s| s.name() == key),
    };
    match specialty {
        Some(specialty) => Ok(html::pages::detail::specialty(&specialty)),
        None => Err(missing("specialty", &key)),
    }
}

pub async fn fallback(uri: Uri) -> (StatusCode, Markup) {
    tracing::debug!(%uri, "no route");
    (StatusCode::NOT_FOUND, html::pages::not_found("that page"))
}

fn missing(kind: &str, key: &str) -> (StatusCode, Markup) {
    tracing::debug!(kind, key, "record not found");
    (
        StatusCode::NOT_FOUND,
        html::pages::not_found(&format!("a {kind} matching \"{key}\"")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests::state;

    fn path(key: &str) -> ReqPath<String> {
        ReqPath(key.to_owned())
    }

    #[tokio::test]
    async fn detail_pages_resolve_ids_and_names() {
        let html = condition(State(state()), path("3")).await.unwrap().into_string();
        assert!(html.contains("Influenza"));

        let html = medication(State(state()), path("Metoprolol"))
            .await
            .unwrap()
            .into_string();
        assert!(html.contains("Beta blocker"));

        let html = specialty(State(state()), path("Psychiatry"))
            .await
            .unwrap()
            .into_string();
        assert!(html.contains("Major Depressive Disorder"));
    }

    #[tokio::test]
    async fn unknown_records_are_not_found() {
        let (status, html) = condition(State(state()), path("999")).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.into_string().contains("Not found"));

        let (status, _) = specialty(State(state()), path("Dentistry")).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn home_renders_results_for_a_query() {
        let html = home(
            State(state()),
            Query(HomeParams {
                query: Some(" influenza ".to_owned()),
            }),
        )
        .await
        .into_string();
        assert!(html.contains("display: block;"));
        assert!(html.contains(r#"href="/condition/3">Influenza</a>"#));
        assert!(html.contains(r#"value="influenza""#));
    }

    #[tokio::test]
    async fn home_without_query_hides_results() {
        let html = home(State(state()), Query(HomeParams { query: None }))
            .await
            .into_string();
        assert!(html.contains("display: none;"));
    }
}
