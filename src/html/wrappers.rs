use maud::DOCTYPE;

use super::*;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";

pub(super) fn standard(body: Markup) -> Markup {
    html! {
        nav.navbar.navbar-expand-lg.navbar-dark.bg-primary {
            .container {
                a.navbar-brand href="/" { i.bi.bi-heart-pulse.me-2 {} "MedRef" }
                .navbar-nav {
                    a.nav-link href="/" { "Home" }
                    a.nav-link href="/browse" { "Browse" }
                }
            }
        }
        main.container.py-4 {
            (body)
        }
    }
}

pub(super) fn universal(body: Markup, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "MedRef | " (title) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(BOOTSTRAP_ICONS);
            }
            body {
                (standard(body))
                script src=(BOOTSTRAP_JS) {}
                script type="module" src="/script/main.js" {}
            }
        }
    }
}
