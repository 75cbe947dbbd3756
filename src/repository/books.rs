//! Books repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Read/write access to the book collection.
///
/// Lookups, replacements and removals act on the first book whose id
/// matches; ids are not required to be unique.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, in insertion order
    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// First book with the given id
    async fn get_by_id(&self, id: &str) -> AppResult<Book>;

    /// Append a book; no validation is performed
    async fn add(&self, book: Book) -> AppResult<()>;

    /// Replace the first book with the given id, id included
    async fn update(&self, id: &str, book: Book) -> AppResult<()>;

    /// Remove the first book with the given id
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Book collection held in process memory
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

fn position(books: &[Book], id: &str) -> AppResult<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(AppError::book_not_found)
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn get_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let books = self.books.read().await;
        let idx = position(&books, id)?;
        Ok(books[idx].clone())
    }

    async fn add(&self, book: Book) -> AppResult<()> {
        self.books.write().await.push(book);
        Ok(())
    }

    async fn update(&self, id: &str, book: Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        let idx = position(&books, id)?;
        books[idx] = book;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut books = self.books.write().await;
        let idx = position(&books, id)?;
        books.remove(idx);
        Ok(())
    }
}
