//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record as fetched from the store.
///
/// `first_name` may be empty; either date may be absent (covers both a
/// missing value and a value that never parsed into a calendar date).
/// Records are never mutated after fetch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorRecord {
    #[serde(default)]
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
