use crate::search::SearchResult;

use super::components::{self, RecordCard, Tab};
use super::*;

pub mod detail;

pub fn home(catalog: &Catalog, query: &str, results: Option<&[SearchResult]>) -> Markup {
    let specialties = catalog.specialties().enumerate().map(|(index, s)| RecordCard {
        index,
        title: s.name(),
        href: format!("/specialty/{}", s.id()),
        text: s.description(),
        hint: None,
    });

    let body = html! {
        .text-center.mb-4 {
            h1 { "Medical Reference" }
            p.lead { "Conditions, medications and specialties at a glance." }
        }
        (components::search_form(query))
        (components::results_panel(results))
        h2.h4.mb-3 { "Specialties" }
        (components::card_grid(specialties))
    };
    wrappers::universal(body, "Home")
}

pub fn browse(catalog: &Catalog) -> Markup {
    let (condition_count, medication_count, specialty_count) = catalog.counts();

    let conditions = components::card_grid(catalog.conditions().enumerate().map(
        |(index, c)| RecordCard {
            index,
            title: c.name(),
            href: format!("/condition/{}", c.id()),
            text: c.description(),
            hint: c.specialty().map(|s| s.name()),
        },
    ));
    let medications = components::card_grid(catalog.medications().enumerate().map(
        |(index, m)| RecordCard {
            index,
            title: m.name(),
            href: format!("/medication/{}", m.id()),
            text: m.description(),
            hint: Some(m.class_name()),
        },
    ));
    let specialties = components::card_grid(catalog.specialties().enumerate().map(
        |(index, s)| RecordCard {
            index,
            title: s.name(),
            href: format!("/specialty/{}", s.id()),
            text: s.description(),
            hint: None,
        },
    ));

    let body = html! {
        h1.mb-4 { "Browse" }
        (components::tabs(&[
            Tab {
                id: "conditions",
                label: format!("Conditions ({condition_count})"),
                content: conditions,
            },
            Tab {
                id: "medications",
                label: format!("Medications ({medication_count})"),
                content: medications,
            },
            Tab {
                id: "specialties",
                label: format!("Specialties ({specialty_count})"),
                content: specialties,
            },
        ]))
    };
    wrappers::universal(body, "Browse")
}

pub fn not_found(what: &str) -> Markup {
    let body = html! {
        .text-center.py-5 {
            h1 { "Not found" }
            p.lead { "We could not find " (what) "." }
            a.btn.btn-primary href="/" { "Back to search" }
        }
    };
    wrappers::universal(body, "Not found")
}
