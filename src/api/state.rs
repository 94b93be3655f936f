//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BookService, SellerService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Seller service
    pub seller_service: Arc<dyn SellerService>,
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// Database connection, absent when services are injected by hand
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by a live database.
    ///
    /// Builds every service through the ServiceContainer over one
    /// shared Unit of Work.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, Some(database))
    }

    /// Create application state from any service container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        database: Option<Arc<Database>>,
    ) -> Self {
        Self {
            seller_service: container.sellers(),
            book_service: container.books(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// The health endpoint reports the database as unavailable.
    pub fn new(seller_service: Arc<dyn SellerService>, book_service: Arc<dyn BookService>) -> Self {
        Self {
            seller_service,
            book_service,
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Book, BookDetails, CreateSeller, Seller, SellerProfile, SellerWithBooks};
    use crate::errors::{AppError, AppResult};
    use crate::services::MockServiceContainer;

    /// Services that find nothing
    struct EmptyStore;

    #[async_trait]
    impl SellerService for EmptyStore {
        async fn create_seller(&self, _input: CreateSeller) -> AppResult<Seller> {
            Err(AppError::internal("read-only store"))
        }

        async fn list_sellers(&self) -> AppResult<Vec<Seller>> {
            Ok(Vec::new())
        }

        async fn get_seller(&self, _id: i32) -> AppResult<SellerWithBooks> {
            Err(AppError::NotFound)
        }

        async fn update_seller(&self, _id: i32, _profile: SellerProfile) -> AppResult<Seller> {
            Err(AppError::NotFound)
        }

        async fn delete_seller(&self, _id: i32) -> AppResult<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl BookService for EmptyStore {
        async fn create_book(&self, _details: BookDetails) -> AppResult<Book> {
            Err(AppError::validation("seller does not exist"))
        }

        async fn list_books(&self) -> AppResult<Vec<Book>> {
            Ok(Vec::new())
        }

        async fn get_book(&self, _id: i32) -> AppResult<Book> {
            Err(AppError::NotFound)
        }

        async fn update_book(&self, _id: i32, _details: BookDetails) -> AppResult<Book> {
            Err(AppError::NotFound)
        }

        async fn delete_book(&self, _id: i32) -> AppResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_from_container_takes_each_service_once() {
        let mut container = MockServiceContainer::new();
        container
            .expect_sellers()
            .times(1)
            .returning(|| Arc::new(EmptyStore));
        container
            .expect_books()
            .times(1)
            .returning(|| Arc::new(EmptyStore));

        let state = AppState::from_container(&container, None);

        assert!(state.database.is_none());
        assert!(state.seller_service.list_sellers().await.unwrap().is_empty());
        assert!(matches!(
            state.book_service.get_book(1).await,
            Err(AppError::NotFound)
        ));
    }
}
