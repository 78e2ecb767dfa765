//! Data models for Libris

pub mod author;
pub mod book_instance;

// Re-export commonly used types
pub use author::AuthorRecord;
pub use book_instance::{Book, BookInstanceRecord};
