//! The search controller behind the `search` subcommand.
//!
//! Submitting a query spawns one request against a [`SearchBackend`] and
//! renders the response into the results panel when it arrives. Pages served
//! to browsers get the same behavior from `static/scripts/main.js`, together
//! with the close control, tab binding, card stagger and tooltip activation.
//!
//! Requests are never cancelled or de-duplicated. When two searches overlap
//! the panel shows whichever response arrived last, which is not necessarily
//! the newer query.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::client::SearchBackend;
use crate::html::components::results_list;
use crate::search::SearchResult;

/// Delay between the entrance animations of consecutive cards.
pub const CARD_DELAY_STEP: Duration = Duration::from_millis(100);

/// Entrance animation delay of the card at `index`.
pub fn card_delay(index: usize) -> Duration {
    CARD_DELAY_STEP * u32::try_from(index).unwrap_or(u32::MAX)
}

/// The results panel and the list inside it. Hidden until the first render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    visible: bool,
    list: String,
}

impl ResultsPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rendered contents of the results list.
    pub fn list_html(&self) -> &str {
        &self.list
    }

    /// Replace the list contents and show the panel.
    fn render(&mut self, results: &[SearchResult]) {
        self.list = results_list(results).into_string();
        self.visible = true;
    }
}

pub struct SearchController<B> {
    backend: Arc<B>,
    panel: Arc<Mutex<ResultsPanel>>,
}

impl<B: SearchBackend + 'static> SearchController<B> {
    pub fn new(backend: B) -> Self {
        SearchController {
            backend: Arc::new(backend),
            panel: Arc::default(),
        }
    }

    /// Submit the contents of the search input.
    ///
    /// A blank input sends nothing and returns `None`. Otherwise one request
    /// is spawned for the trimmed query and its handle returned. Dropping the
    /// handle does not cancel the request.
    pub fn submit(&self, input: &str) -> Option<JoinHandle<()>> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        let query = query.to_owned();
        let backend = Arc::clone(&self.backend);
        let panel = Arc::clone(&self.panel);
        Some(tokio::spawn(async move {
            match backend.search(&query).await {
                Ok(results) => {
                    tracing::debug!(%query, count = results.len(), "search completed");
                    lock(&panel).render(&results);
                }
                Err(e) => tracing::error!(%query, error = %e, "error performing search"),
            }
        }))
    }

    /// A snapshot of the results panel.
    pub fn panel(&self) -> ResultsPanel {
        lock(&self.panel).clone()
    }
}

fn lock(panel: &Mutex<ResultsPanel>) -> MutexGuard<'_, ResultsPanel> {
    panel.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::client::SearchError;
    use crate::html::components::results::NO_RESULTS;

    /// Answers each query with a canned response and records every request.
    #[derive(Default)]
    struct StubBackend {
        responses: HashMap<String, Vec<SearchResult>>,
        requests: Mutex<Vec<String>>,
    }

    impl StubBackend {
        fn respond(mut self, query: &str, json: &str) -> Self {
            self.responses
                .insert(query.to_owned(), serde_json::from_str(json).unwrap());
            self
        }
    }

    #[async_trait]
    impl SearchBackend for StubBackend {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            self.requests.lock().unwrap().push(query.to_owned());
            match self.responses.get(query) {
                Some(results) => Ok(results.clone()),
                None => Err(serde_json::from_str::<Vec<SearchResult>>("<html>")
                    .unwrap_err()
                    .into()),
            }
        }
    }

    /// Holds every response until the test releases it.
    #[derive(Default)]
    struct GatedBackend {
        gates: Mutex<HashMap<String, oneshot::Receiver<Vec<SearchResult>>>>,
    }

    impl GatedBackend {
        fn gate(&self, query: &str) -> oneshot::Sender<Vec<SearchResult>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(query.to_owned(), rx);
            tx
        }
    }

    #[async_trait]
    impl SearchBackend for GatedBackend {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            let rx = self.gates.lock().unwrap().remove(query).unwrap();
            Ok(rx.await.unwrap())
        }
    }

    fn condition(id: u32, name: &str) -> SearchResult {
        SearchResult {
            id: Some(id.into()),
            kind: "condition".to_owned().into(),
            name: name.to_owned(),
            description: "desc".to_owned(),
        }
    }

    #[tokio::test]
    async fn blank_queries_send_nothing() {
        let controller = SearchController::new(StubBackend::default());

        assert!(controller.submit("").is_none());
        assert!(controller.submit("   \t\n").is_none());

        assert!(controller.backend.requests.lock().unwrap().is_empty());
        assert_eq!(controller.panel(), ResultsPanel::default());
    }

    #[tokio::test]
    async fn submit_sends_one_trimmed_query() {
        let backend = StubBackend::default().respond("heart failure", "[]");
        let controller = SearchController::new(backend);

        controller.submit("  heart failure ").unwrap().await.unwrap();

        assert_eq!(
            *controller.backend.requests.lock().unwrap(),
            ["heart failure"]
        );
    }

    #[tokio::test]
    async fn empty_response_shows_notice() {
        let backend = StubBackend::default().respond("zzz", "[]");
        let controller = SearchController::new(backend);

        controller.submit("zzz").unwrap().await.unwrap();

        let panel = controller.panel();
        assert!(panel.is_visible());
        assert!(panel.list_html().contains(NO_RESULTS));
    }

    #[tokio::test]
    async fn condition_result_links_to_its_page() {
        let backend = StubBackend::default().respond(
            "flu",
            r#"[{ "id": 7, "type": "condition", "name": "Flu", "description": "desc" }]"#,
        );
        let controller = SearchController::new(backend);

        controller.submit("flu").unwrap().await.unwrap();

        let panel = controller.panel();
        let html = panel.list_html();
        assert!(panel.is_visible());
        assert!(html.contains(r#"href="/condition/7">Flu</a>"#));
        assert!(html.contains(">Condition</span>"));
        assert!(html.contains(r#"href="/condition/7">View</a>"#));
    }

    #[tokio::test]
    async fn unknown_type_gets_raw_tag_and_placeholder_links() {
        let backend = StubBackend::default().respond(
            "x",
            r#"[{ "id": 1, "type": "unknown", "name": "Thing", "description": "d" }]"#,
        );
        let controller = SearchController::new(backend);

        controller.submit("x").unwrap().await.unwrap();

        let html = controller.panel().list_html().to_owned();
        assert!(html.contains(">unknown</span>"));
        assert!(html.contains(r##"href="#">Thing</a>"##));
        assert!(html.contains(r##"href="#">View</a>"##));
    }

    #[tokio::test]
    async fn each_render_replaces_the_list() {
        let backend = StubBackend::default()
            .respond(
                "flu",
                r#"[{ "id": 7, "type": "condition", "name": "Flu", "description": "desc" }]"#,
            )
            .respond("nothing", "[]");
        let controller = SearchController::new(backend);

        controller.submit("flu").unwrap().await.unwrap();
        assert!(controller.panel().list_html().contains("Flu"));

        controller.submit("nothing").unwrap().await.unwrap();

        let panel = controller.panel();
        assert!(panel.is_visible());
        assert!(panel.list_html().contains(NO_RESULTS));
        assert!(!panel.list_html().contains("Flu"));
    }

    #[tokio::test]
    async fn loose_records_still_render() {
        let backend = StubBackend::default().respond(
            "x",
            r#"[
                { "id": 7.5, "type": "condition", "name": "Half" },
                { "id": -1, "type": "medication", "name": "Negative" },
                { "name": "Bare" }
            ]"#,
        );
        let controller = SearchController::new(backend);

        controller.submit("x").unwrap().await.unwrap();

        let panel = controller.panel();
        let html = panel.list_html();
        assert!(panel.is_visible());
        assert!(html.contains(r#"href="/condition/7.5">Half</a>"#));
        assert!(html.contains(r#"href="/medication/-1">Negative</a>"#));
        assert!(html.contains(r##"href="#">Bare</a>"##));
    }

    #[tokio::test]
    async fn failures_leave_the_panel_alone() {
        let backend = StubBackend::default().respond(
            "flu",
            r#"[{ "id": 7, "type": "condition", "name": "Flu", "description": "desc" }]"#,
        );
        let controller = SearchController::new(backend);

        controller.submit("flu").unwrap().await.unwrap();
        let before = controller.panel();

        controller.submit("broken").unwrap().await.unwrap();

        assert_eq!(controller.panel(), before);
    }

    #[tokio::test]
    async fn last_response_to_arrive_wins() {
        let controller = SearchController::new(GatedBackend::default());
        let first = controller.backend.gate("first");
        let second = controller.backend.gate("second");

        let first_request = controller.submit("first").unwrap();
        let second_request = controller.submit("second").unwrap();

        second.send(vec![condition(2, "Second")]).unwrap();
        second_request.await.unwrap();
        assert!(controller.panel().list_html().contains("Second"));

        first.send(vec![condition(1, "First")]).unwrap();
        first_request.await.unwrap();

        let html = controller.panel().list_html().to_owned();
        assert!(html.contains("First"));
        assert!(!html.contains("Second"));
    }

    #[test]
    fn card_delays_step_by_a_tenth_of_a_second() {
        assert_eq!(card_delay(0), Duration::ZERO);
        assert_eq!(card_delay(1), Duration::from_millis(100));
        assert_eq!(card_delay(12), Duration::from_millis(1200));
    }
}
