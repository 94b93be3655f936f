//! Service Container - Centralized service access.
//!
//! Builds every service on top of one shared Unit of Work so handlers
//! depend on service traits, not implementations.

use std::sync::Arc;

use super::{BookManager, BookService, SellerManager, SellerService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get seller service
    fn sellers(&self) -> Arc<dyn SellerService>;

    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    seller_service: Arc<dyn SellerService>,
    book_service: Arc<dyn BookService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let seller_service = Arc::new(SellerManager::new(uow.clone()));
        let book_service = Arc::new(BookManager::new(uow));

        Self {
            seller_service,
            book_service,
        }
    }
}

impl ServiceContainer for Services {
    fn sellers(&self) -> Arc<dyn SellerService> {
        self.seller_service.clone()
    }

    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }
}
