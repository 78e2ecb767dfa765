//! Author list endpoint

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

/// Fallback body sent when the list comes back empty.
const NO_AUTHORS_FOUND: &str = "No authors found";

/// List all authors as formatted summary strings
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Ordered author summaries, or the literal text \"No authors found\" when the list is empty", body = Vec<String>)
    )
)]
pub async fn show_all_authors(State(state): State<AppState>) -> Response {
    let authors = state.services.authors.author_list().await;
    if authors.is_empty() {
        // Zero authors and a swallowed store failure are indistinguishable
        // here; both get the same body and the default status.
        NO_AUTHORS_FOUND.into_response()
    } else {
        Json(authors).into_response()
    }
}
