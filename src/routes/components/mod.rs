use super::*;

/// The results list fragment for a query, for pages that load results in
/// place.
pub async fn search_results(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Markup {
    let results = search::search(&state.catalog, &params.query, params.kind, params.limit);
    html::components::results_list(&results)
}
