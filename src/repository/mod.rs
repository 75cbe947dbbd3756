//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

pub use books::{BookRepository, InMemoryBookRepository};

use crate::models::book::Book;

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create a repository over an in-memory collection seeded with `books`
    pub fn new(books: Vec<Book>) -> Self {
        Self::with_books(Arc::new(InMemoryBookRepository::new(books)))
    }

    /// Create a repository over any book storage
    pub fn with_books(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}
