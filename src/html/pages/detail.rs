use super::*;

fn header(kind: &str, badge: &str, name: &str) -> Markup {
    html! {
        nav aria-label="breadcrumb" {
            ol.breadcrumb {
                li.breadcrumb-item { a href="/" { "Home" } }
                li.breadcrumb-item { a href="/browse" { "Browse" } }
                li.breadcrumb-item.active aria-current="page" { (name) }
            }
        }
        h1 {
            (name)
            " "
            span class={ "badge fs-6 align-middle " (badge) } { (kind) }
        }
    }
}

pub fn condition(condition: &Condition) -> Markup {
    let category = &components::results::CONDITION;
    let medications: Vec<_> = condition
        .medications()
        .map(|m| (format!("/medication/{}", m.id()), m.name()))
        .collect();

    let body = html! {
        (header(category.label, category.badge, condition.name()))
        @if let Some(specialty) = condition.specialty() {
            p.text-muted {
                "Specialty: "
                a href={ "/specialty/" (specialty.id()) } { (specialty.name()) }
            }
        }
        p.lead { (condition.description()) }
        (components::item_list("Symptoms", condition.symptoms()))
        (components::item_list("Treatments", condition.treatments()))
        (components::link_list("Medications", &medications))
    };
    wrappers::universal(body, condition.name())
}

pub fn medication(medication: &Medication) -> Markup {
    let category = &components::results::MEDICATION;
    let conditions: Vec<_> = medication
        .conditions()
        .map(|c| (format!("/condition/{}", c.id()), c.name()))
        .collect();
    let specialties: Vec<_> = medication
        .specialties()
        .map(|s| (format!("/specialty/{}", s.id()), s.name()))
        .collect();

    let body = html! {
        (header(category.label, category.badge, medication.name()))
        p.text-muted { "Class: " (medication.class_name()) }
        @if !medication.description().is_empty() {
            p.lead { (medication.description()) }
        }
        h3.h5.mt-4 { "Dosing" }
        p { (medication.dosing()) }
        (components::item_list("Uses", medication.uses()))
        (components::item_list("Side effects", medication.side_effects()))
        (components::item_list("Contraindications", medication.contraindications()))
        (components::link_list("Treats", &conditions))
        (components::link_list("Specialties", &specialties))
    };
    wrappers::universal(body, medication.name())
}

pub fn specialty(specialty: &Specialty) -> Markup {
    let category = &components::results::SPECIALTY;
    let conditions: Vec<_> = specialty
        .conditions()
        .map(|c| (format!("/condition/{}", c.id()), c.name()))
        .collect();
    let medications: Vec<_> = specialty
        .medications()
        .map(|m| (format!("/medication/{}", m.id()), m.name()))
        .collect();

    let body = html! {
        (header(category.label, category.badge, specialty.name()))
        p.lead { (specialty.description()) }
        (components::link_list("Conditions", &conditions))
        (components::link_list("Medications", &medications))
    };
    wrappers::universal(body, specialty.name())
}
