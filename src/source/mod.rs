//! Record source: the store capability consumed by the presentation services.
//!
//! The trait keeps the store behind an injectable seam so services can be
//! unit-tested against a deterministic double instead of a live database.

pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::StoreResult,
    models::{AuthorRecord, BookInstanceRecord},
};

pub use postgres::PgRecordSource;

/// Direction of a delegated sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One (field, direction) pair of a delegated sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPair {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Exact-match equality filter on a book instance's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    pub equals: &'static str,
}

/// Fetch/sort/populate capability over the persisted catalog entities.
///
/// Sorting and reference resolution are delegated to the store; callers
/// receive records in store order with references already resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch all authors, sorted by the store according to `order`.
    async fn find_authors(&self, order: &[SortPair]) -> StoreResult<Vec<AuthorRecord>>;

    /// Fetch book instances matching `filter`, with each instance's `book`
    /// reference resolved into its display fields.
    async fn find_book_instances(
        &self,
        filter: StatusFilter,
    ) -> StoreResult<Vec<BookInstanceRecord>>;
}
