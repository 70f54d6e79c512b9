use crate::search::{ResultKind, SearchResult};

use super::*;

/// How a known result kind is shown and where it links to.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub badge: &'static str,
    pub route: &'static str,
}

pub const CONDITION: Category = Category {
    label: "Condition",
    badge: "bg-primary",
    route: "/condition",
};

pub const MEDICATION: Category = Category {
    label: "Medication",
    badge: "bg-success",
    route: "/medication",
};

pub const SPECIALTY: Category = Category {
    label: "Specialty",
    badge: "bg-info",
    route: "/specialty",
};

const FALLBACK_BADGE: &str = "bg-secondary";

/// Href for kinds with no page of their own.
const PLACEHOLDER_HREF: &str = "#";

impl ResultKind {
    /// The presentation for this kind, or `None` for unrecognized kinds.
    pub fn category(&self) -> Option<&'static Category> {
        match self {
            ResultKind::Condition => Some(&CONDITION),
            ResultKind::Medication => Some(&MEDICATION),
            ResultKind::Specialty => Some(&SPECIALTY),
            ResultKind::Other(_) => None,
        }
    }
}

/// The tag label, badge class and link target of one result.
#[derive(Debug, PartialEq, Eq)]
pub struct Presentation<'a> {
    pub label: &'a str,
    pub badge: &'static str,
    pub href: String,
}

impl<'a> Presentation<'a> {
    pub fn of(result: &'a SearchResult) -> Self {
        match result.kind.category() {
            Some(category) => Presentation {
                label: category.label,
                badge: category.badge,
                href: match &result.id {
                    Some(id) => format!("{}/{id}", category.route),
                    None => PLACEHOLDER_HREF.to_owned(),
                },
            },
            None => Presentation {
                label: result.kind.as_str(),
                badge: FALLBACK_BADGE,
                href: PLACEHOLDER_HREF.to_owned(),
            },
        }
    }
}

/// One entry of the results list.
pub struct ResultCard<'a>(pub &'a SearchResult);

impl Render for ResultCard<'_> {
    fn render(&self) -> Markup {
        let result = self.0;
        let presentation = Presentation::of(result);
        html! {
            .search-result-item.border-bottom.py-2 {
                .d-flex.justify-content-between.align-items-start {
                    div {
                        h4 {
                            a.text-decoration-none href=(presentation.href) { (result.name) }
                        }
                        span class={ "badge " (presentation.badge) " me-2" } { (presentation.label) }
                        p { (result.description) }
                    }
                    a.btn.btn-sm.btn-outline-primary href=(presentation.href) { "View" }
                }
            }
        }
    }
}

pub const NO_RESULTS: &str = "No results found for your search.";

/// The contents of the results list: a notice when nothing matched,
/// otherwise one card per result in the order given.
pub fn results_list(results: &[SearchResult]) -> Markup {
    html! {
        @if results.is_empty() {
            .alert.alert-info {
                i.bi.bi-info-circle.me-2 {}
                (NO_RESULTS)
            }
        } @else {
            @for result in results {
                (ResultCard(result))
            }
        }
    }
}

/// The results panel. Hidden until there is something to show.
pub fn results_panel(results: Option<&[SearchResult]>) -> Markup {
    let display = match results {
        Some(_) => "display: block;",
        None => "display: none;",
    };
    html! {
        .search-results.border.rounded.p-3.mb-4 id=(RESULTS_PANEL) style=(display) {
            .d-flex.justify-content-between.align-items-center.mb-2 {
                h3.h5.mb-0 { "Search Results" }
                button.btn-close id=(CLOSE_RESULTS) type="button" aria-label="Close" {}
            }
            div id=(RESULTS_LIST) {
                @if let Some(results) = results {
                    (results_list(results))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ResultId;

    fn result(id: u32, kind: &str, name: &str) -> SearchResult {
        SearchResult {
            id: Some(id.into()),
            kind: kind.to_owned().into(),
            name: name.to_owned(),
            description: "desc".to_owned(),
        }
    }

    #[test]
    fn known_kinds_link_to_their_pages() {
        for (kind, label, href) in [
            ("condition", "Condition", "/condition/3"),
            ("medication", "Medication", "/medication/3"),
            ("specialty", "Specialty", "/specialty/3"),
        ] {
            let result = result(3, kind, "X");
            let presentation = Presentation::of(&result);
            assert_eq!(presentation.label, label);
            assert_eq!(presentation.href, href);
        }
    }

    #[test]
    fn unknown_kind_falls_back() {
        let result = result(3, "unknown", "X");
        let presentation = Presentation::of(&result);
        assert_eq!(presentation.label, "unknown");
        assert_eq!(presentation.badge, "bg-secondary");
        assert_eq!(presentation.href, "#");
    }

    #[test]
    fn text_ids_are_substituted() {
        let result = SearchResult {
            id: Some(ResultId::Text("abc".to_owned())),
            ..result(0, "medication", "X")
        };
        assert_eq!(Presentation::of(&result).href, "/medication/abc");
    }

    #[test]
    fn known_kind_without_id_gets_placeholder_link() {
        let result = SearchResult {
            id: None,
            ..result(0, "condition", "X")
        };
        let presentation = Presentation::of(&result);
        assert_eq!(presentation.label, "Condition");
        assert_eq!(presentation.href, "#");
    }

    #[test]
    fn card_links_title_and_view_to_the_same_page() {
        let html = ResultCard(&result(7, "condition", "Flu")).render().into_string();
        assert!(html.contains(r#"href="/condition/7">Flu</a>"#));
        assert!(html.contains(r#"class="badge bg-primary me-2">Condition</span>"#));
        assert!(html.contains("<p>desc</p>"));
        assert!(html.contains(r#"href="/condition/7">View</a>"#));
    }

    #[test]
    fn names_are_escaped() {
        let html = ResultCard(&result(1, "condition", "<script>")).render().into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_list_shows_notice() {
        let html = results_list(&[]).into_string();
        assert!(html.contains(NO_RESULTS));
        assert!(!html.contains("search-result-item"));
    }

    #[test]
    fn list_preserves_order() {
        let html = results_list(&[result(2, "specialty", "Zeta"), result(1, "condition", "Alpha")])
            .into_string();
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn panel_visibility_follows_results() {
        let hidden = results_panel(None).into_string();
        assert!(hidden.contains("display: none;"));

        let shown = results_panel(Some(&[][..])).into_string();
        assert!(shown.contains("display: block;"));
        assert!(shown.contains(NO_RESULTS));
    }
}
