use crate::controller;

use super::*;

pub mod results;

pub use results::{results_list, results_panel};

pub const SEARCH_FORM: &str = "searchForm";
pub const SEARCH_INPUT: &str = "searchInput";
pub const RESULTS_PANEL: &str = "searchResults";
pub const RESULTS_LIST: &str = "searchResultsList";
pub const CLOSE_RESULTS: &str = "closeSearchResults";
pub const TAB_LIST: &str = "myTab";

pub fn search_form(query: &str) -> Markup {
    html! {
        form.d-flex.mb-4 id=(SEARCH_FORM) action="/" method="get" role="search" {
            input.form-control.me-2
                id=(SEARCH_INPUT)
                type="search"
                name="query"
                value=(query)
                placeholder="Search conditions, medications and specialties"
                aria-label="Search";
            button.btn.btn-primary type="submit" { i.bi.bi-search {} }
        }
    }
}

/// A catalog record shown as a card in a grid.
pub struct RecordCard<'a> {
    /// Position in the grid, which staggers the entrance animation.
    pub index: usize,
    pub title: &'a str,
    pub href: String,
    pub text: &'a str,
    /// Short hint shown as a tooltip on the title.
    pub hint: Option<&'a str>,
}

impl Render for RecordCard<'_> {
    fn render(&self) -> Markup {
        let delay = controller::card_delay(self.index);
        html! {
            .col {
                .card.h-100.shadow-sm style={ "animation-delay: " (format!("{:.1}", delay.as_secs_f64())) "s;" } {
                    .card-body {
                        h5.card-title {
                            @if let Some(hint) = self.hint {
                                a.text-decoration-none href=(self.href) data-bs-toggle="tooltip" title=(hint) {
                                    (self.title)
                                }
                            } @else {
                                a.text-decoration-none href=(self.href) { (self.title) }
                            }
                        }
                        p.card-text { (self.text) }
                    }
                }
            }
        }
    }
}

pub fn card_grid<'a>(cards: impl IntoIterator<Item = RecordCard<'a>>) -> Markup {
    html! {
        .row.row-cols-1.row-cols-md-3.g-3 {
            @for card in cards {
                (card)
            }
        }
    }
}

pub struct Tab {
    pub id: &'static str,
    pub label: String,
    pub content: Markup,
}

/// Tabs switched by the toolkit; the first one starts active.
pub fn tabs(tabs: &[Tab]) -> Markup {
    html! {
        ul.nav.nav-tabs.mb-3 id=(TAB_LIST) role="tablist" {
            @for (i, tab) in tabs.iter().enumerate() {
                li.nav-item role="presentation" {
                    button.nav-link.active[i == 0]
                        id={ (tab.id) "-tab" }
                        data-bs-toggle="tab"
                        data-bs-target={ "#" (tab.id) }
                        type="button"
                        role="tab"
                    {
                        (tab.label)
                    }
                }
            }
        }
        .tab-content {
            @for (i, tab) in tabs.iter().enumerate() {
                .tab-pane.fade.show[i == 0].active[i == 0] id=(tab.id) role="tabpanel" {
                    (tab.content)
                }
            }
        }
    }
}

/// A titled bullet list, omitted when empty.
pub fn item_list(heading: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            h3.h5.mt-4 { (heading) }
            ul {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

/// A titled list of links, omitted when empty.
pub fn link_list(heading: &str, links: &[(String, &str)]) -> Markup {
    html! {
        @if !links.is_empty() {
            h3.h5.mt-4 { (heading) }
            .list-group {
                @for (href, name) in links {
                    a.list-group-item.list-group-item-action href=(href) { (name) }
                }
            }
        }
    }
}
