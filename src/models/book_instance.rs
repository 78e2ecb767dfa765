//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display fields of the book a copy belongs to, resolved by the store
/// when the instance is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
}

/// A physical copy of a book, with its parent `book` reference resolved.
///
/// `status` is one of "Available", "Maintenance", "Loaned", "Reserved".
/// The status pipeline only ever sees records the store has already
/// filtered down to a single status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookInstanceRecord {
    pub book: Book,
    pub status: String,
    pub imprint: Option<String>,
    pub due_back: Option<NaiveDate>,
}
