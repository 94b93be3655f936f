//! Book service - Handles book-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Book, BookDetails};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Add a book to an existing seller
    async fn create_book(&self, details: BookDetails) -> AppResult<Book>;

    /// List every book
    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Get book by ID
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    /// Overwrite every field of an existing book
    async fn update_book(&self, id: i32, details: BookDetails) -> AppResult<Book>;

    /// Delete a book. Deleting an absent book is a no-op.
    async fn delete_book(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookService using Unit of Work.
pub struct BookManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookManager<U> {
    /// Create new book service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_seller_exists(&self, seller_id: i32) -> AppResult<()> {
        if self.uow.sellers().exists(seller_id).await? {
            Ok(())
        } else {
            Err(AppError::validation("seller does not exist"))
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookService for BookManager<U> {
    async fn create_book(&self, details: BookDetails) -> AppResult<Book> {
        self.ensure_seller_exists(details.seller_id).await?;

        let book = self.uow.books().create(details).await?;
        tracing::info!(book_id = book.id, seller_id = book.seller_id, "Book created");
        Ok(book)
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.uow.books().list().await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.uow
            .books()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_book(&self, id: i32, details: BookDetails) -> AppResult<Book> {
        // A missing book is 404 whatever seller the body names
        self.uow
            .books()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.ensure_seller_exists(details.seller_id).await?;

        let book = self.uow.books().update(id, details).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        if self.uow.books().delete(id).await? {
            tracing::info!(book_id = id, "Book deleted");
        }
        Ok(())
    }
}
