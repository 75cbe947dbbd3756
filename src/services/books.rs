//! Books service

use crate::{
    error::AppResult,
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await.inspect_err(|_| {
            tracing::debug!(id, "Book lookup missed");
        })
    }

    pub async fn create(&self, book: Book) -> AppResult<()> {
        let id = book.id.clone();
        self.repository.books.add(book).await?;
        tracing::info!(id = %id, "Book added");
        Ok(())
    }

    /// Replace the book stored under `id`; the replacement may carry a different id
    pub async fn update(&self, id: &str, book: Book) -> AppResult<()> {
        let new_id = book.id.clone();
        self.repository.books.update(id, book).await?;
        tracing::info!(id, new_id = %new_id, "Book updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
