//! Presentation services

pub mod authors;
pub mod book_status;

use std::sync::Arc;

use crate::source::RecordSource;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub book_status: book_status::BookStatusService,
}

impl Services {
    /// Create all services on top of the given record source
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            authors: authors::AuthorsService::new(source.clone()),
            book_status: book_status::BookStatusService::new(source),
        }
    }
}
