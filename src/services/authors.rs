//! Author list builder: fetches authors and formats one summary per record.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::{
    models::AuthorRecord,
    source::{RecordSource, SortDirection, SortPair},
};

/// Sort order delegated to the store for the author list.
/// Tests assert on this exact shape.
pub const AUTHOR_LIST_ORDER: &[SortPair] = &[SortPair {
    field: "family_name",
    direction: SortDirection::Ascending,
}];

#[derive(Clone)]
pub struct AuthorsService {
    source: Arc<dyn RecordSource>,
}

impl AuthorsService {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Fetch all authors, sorted by the store, and format one summary line
    /// per record. Output order is the store's order, untouched.
    ///
    /// Fail-soft: a store failure is logged and collapsed into an empty
    /// list. Callers never see an error from this operation.
    pub async fn author_list(&self) -> Vec<String> {
        match self.source.find_authors(AUTHOR_LIST_ORDER).await {
            Ok(authors) => authors.iter().map(author_summary).collect(),
            Err(err) => {
                tracing::warn!("Author list fetch failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Format `"<family>, <first> : <birth year> - <death year>"`.
///
/// An empty first name collapses the whole name portion to an empty string,
/// family name included. The `" - "` separator is emitted even when a year
/// is missing, so `"1835 - "`, `" - 1910"` and `" - "` all occur; combined
/// with the `" : "` separator a missing birth year yields a double space
/// (`"… :  - 1910"`). That spacing is pinned by conformance tests.
fn author_summary(author: &AuthorRecord) -> String {
    let fullname = if author.first_name.is_empty() {
        String::new()
    } else {
        format!("{}, {}", author.family_name, author.first_name)
    };
    let lifetime = format!(
        "{} - {}",
        year_of(author.date_of_birth),
        year_of(author.date_of_death)
    );
    format!("{} : {}", fullname, lifetime)
}

/// Calendar year as a string, or empty when the date is absent or was
/// never a valid date.
fn year_of(date: Option<NaiveDate>) -> String {
    date.map(|d| d.year().to_string()).unwrap_or_default()
}
