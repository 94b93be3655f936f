//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod book_service;
pub mod container;
mod seller_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use book_service::{BookManager, BookService};
pub use seller_service::{SellerManager, SellerService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
