//! Postgres-backed record source.
//!
//! Delegated sort criteria become an `ORDER BY` clause; reference
//! resolution becomes a join onto the `books` table.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::StoreResult,
    models::{
        book_instance::{Book, BookInstanceRecord},
        AuthorRecord,
    },
    source::{RecordSource, SortDirection, SortPair, StatusFilter},
};

impl SortDirection {
    fn sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Clone)]
pub struct PgRecordSource {
    pool: Pool<Postgres>,
}

impl PgRecordSource {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn find_authors(&self, order: &[SortPair]) -> StoreResult<Vec<AuthorRecord>> {
        // Sort fields are compile-time constants, never user input, so they
        // can be interpolated into the statement directly.
        let mut sql = String::from(
            "SELECT first_name, family_name, date_of_birth, date_of_death FROM authors",
        );
        if !order.is_empty() {
            let criteria: Vec<String> = order
                .iter()
                .map(|pair| format!("{} {}", pair.field, pair.direction.sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&criteria.join(", "));
        }

        let authors = sqlx::query_as::<_, AuthorRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    async fn find_book_instances(
        &self,
        filter: StatusFilter,
    ) -> StoreResult<Vec<BookInstanceRecord>> {
        let rows = sqlx::query(
            "SELECT bi.status, bi.imprint, bi.due_back, b.title \
             FROM book_instances bi \
             JOIN books b ON b.id = bi.book_id \
             WHERE bi.status = $1",
        )
        .bind(filter.equals)
        .fetch_all(&self.pool)
        .await?;

        let mut instances = Vec::with_capacity(rows.len());
        for row in rows {
            instances.push(BookInstanceRecord {
                book: Book {
                    title: row.try_get("title")?,
                },
                status: row.try_get("status")?,
                imprint: row.try_get("imprint")?,
                due_back: row.try_get("due_back")?,
            });
        }
        Ok(instances)
    }
}
