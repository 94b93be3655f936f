//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod book_repository;
pub(crate) mod entities;
mod seller_repository;

pub use book_repository::{BookRepository, BookStore};
pub use seller_repository::{SellerRepository, SellerStore};

pub(crate) use book_repository::queries as book_queries;
pub(crate) use seller_repository::queries as seller_queries;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use book_repository::MockBookRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use seller_repository::MockSellerRepository;
