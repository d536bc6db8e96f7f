use axum::routing::get;
use axum::Router;

use crate::handlers::fragrance;
use crate::state::AppState;

/// Fragrance API proxy routes mounted under `/api`.
///
/// ```text
/// GET /perfumes/search?q=  -> search_perfumes
/// GET /dupes               -> dupes_without_id
/// GET /dupes/{id}          -> find_dupes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/perfumes/search", get(fragrance::search_perfumes))
        .route("/dupes", get(fragrance::dupes_without_id))
        .route("/dupes/{id}", get(fragrance::find_dupes))
}
