//! Book status aggregator: fetches available copies with their book titles.

use std::sync::Arc;

use crate::{
    error::StoreResult,
    models::BookInstanceRecord,
    source::{RecordSource, StatusFilter},
};

/// Equality filter delegated to the store for the status report.
/// Tests assert on this exact shape.
pub const AVAILABLE_INSTANCES: StatusFilter = StatusFilter { equals: "Available" };

#[derive(Clone)]
pub struct BookStatusService {
    source: Arc<dyn RecordSource>,
}

impl BookStatusService {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Fetch every copy currently marked available, with each copy's book
    /// reference resolved by the store. Records come back as-is, no
    /// transformation into display strings.
    ///
    /// Fail-loud: store failures propagate so the handler can surface a
    /// distinct error response, unlike the author list.
    pub async fn available_copies(&self) -> StoreResult<Vec<BookInstanceRecord>> {
        self.source.find_book_instances(AVAILABLE_INSTANCES).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::StoreError,
        models::book_instance::Book,
        source::MockRecordSource,
    };

    fn available(title: &str) -> BookInstanceRecord {
        BookInstanceRecord {
            book: Book {
                title: title.to_string(),
            },
            status: "Available".to_string(),
            imprint: None,
            due_back: None,
        }
    }

    #[tokio::test]
    async fn queries_the_store_with_the_available_filter() {
        let copies = vec![available("Mock Book Title"), available("Mock Book Title 2")];
        let expected = copies.clone();
        let mut source = MockRecordSource::new();
        source
            .expect_find_book_instances()
            .withf(|filter| *filter == StatusFilter { equals: "Available" })
            .returning(move |_| Ok(copies.clone()));
        let service = BookStatusService::new(Arc::new(source));

        let result = service.available_copies().await.unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut source = MockRecordSource::new();
        source
            .expect_find_book_instances()
            .returning(|_| Err(StoreError::Unavailable("database error".to_string())));
        let service = BookStatusService::new(Arc::new(source));

        let result = service.available_copies().await;

        assert!(result.is_err());
    }
}
