use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::*;

/// Scripts compiled into the binary, by file name.
const SCRIPTS: &[(&str, &str)] = &[("main.js", include_str!("../../static/scripts/main.js"))];

pub async fn script(ReqPath(file_name): ReqPath<String>) -> Response {
    match SCRIPTS.iter().find(|(name, _)| *name == file_name) {
        Some((name, content)) => (
            [
                (header::CONTENT_TYPE, "text/javascript".to_owned()),
                (header::CONTENT_DISPOSITION, format!("inline; filename=\"{name}\"")),
            ],
            *content,
        )
            .into_response(),
        None => {
            tracing::debug!(file_name, "no such script");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
