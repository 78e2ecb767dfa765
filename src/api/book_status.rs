//! Book availability status endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

/// Body sent when the store lookup fails.
const STATUS_NOT_FOUND: &str = "Status not found";

/// List all available book copies with their resolved book titles
#[utoipa::path(
    get,
    path = "/books/status",
    tag = "books",
    responses(
        (status = 200, description = "Available copies with resolved book fields", body = Vec<crate::models::BookInstanceRecord>),
        (status = 500, description = "Store lookup failed; body is the literal text \"Status not found\"")
    )
)]
pub async fn show_all_books_status(State(state): State<AppState>) -> Response {
    match state.services.book_status.available_copies().await {
        Ok(copies) => Json(copies).into_response(),
        Err(err) => {
            // Unlike the author list, a failed lookup is surfaced as a
            // distinct error response rather than an empty result.
            tracing::error!("Book status fetch failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;

    use super::*;
    use crate::{
        error::StoreError,
        models::book_instance::{Book, BookInstanceRecord},
        services::Services,
        source::MockRecordSource,
        AppConfig,
    };

    fn state_with(source: MockRecordSource) -> AppState {
        AppState {
            config: Arc::new(AppConfig::default()),
            services: Arc::new(Services::new(Arc::new(source))),
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn sends_the_resolved_copies_on_success() {
        let copies = vec![
            BookInstanceRecord {
                book: Book {
                    title: "Mock Book Title".to_string(),
                },
                status: "Available".to_string(),
                imprint: None,
                due_back: None,
            },
            BookInstanceRecord {
                book: Book {
                    title: "Mock Book Title 2".to_string(),
                },
                status: "Available".to_string(),
                imprint: None,
                due_back: None,
            },
        ];
        let expected = copies.clone();
        let mut source = MockRecordSource::new();
        source
            .expect_find_book_instances()
            .returning(move |_| Ok(copies.clone()));

        let response = show_all_books_status(State(state_with(source))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<BookInstanceRecord> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn sends_500_and_error_text_when_the_store_fails() {
        let mut source = MockRecordSource::new();
        source
            .expect_find_book_instances()
            .returning(|_| Err(StoreError::Unavailable("database error".to_string())));

        let response = show_all_books_status(State(state_with(source))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Status not found");
    }
}
