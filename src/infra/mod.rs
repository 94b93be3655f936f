//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{BookRepository, BookStore, SellerRepository, SellerStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TxBookRepository, TxSellerRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBookRepository, MockSellerRepository};
