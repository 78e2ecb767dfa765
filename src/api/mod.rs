//! API handlers for Libris REST endpoints

pub mod authors;
pub mod book_status;
pub mod health;
pub mod openapi;
