//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Keeps multi-statement writes such as a seller delete atomic

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    book_queries, seller_queries, BookRepository, BookStore, SellerRepository, SellerStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock the repositories and provide a test implementation.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get seller repository
    fn sellers(&self) -> Arc<dyn SellerRepository>;

    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// Uses ReadCommitted isolation.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get seller repository for this transaction
    pub fn sellers(&self) -> TxSellerRepository<'_> {
        TxSellerRepository { txn: self.txn }
    }

    /// Get book repository for this transaction
    pub fn books(&self) -> TxBookRepository<'_> {
        TxBookRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    seller_repo: Arc<SellerStore>,
    book_repo: Arc<BookStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let seller_repo = Arc::new(SellerStore::new(db.clone()));
        let book_repo = Arc::new(BookStore::new(db.clone()));
        Self {
            db,
            seller_repo,
            book_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn sellers(&self) -> Arc<dyn SellerRepository> {
        self.seller_repo.clone()
    }

    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware seller repository.
pub struct TxSellerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxSellerRepository<'_> {
    /// Check whether a seller with this ID exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        seller_queries::exists(self.txn, id).await
    }

    /// Delete the seller row; returns whether a row was removed
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        seller_queries::delete(self.txn, id).await
    }
}

/// Transaction-aware book repository.
pub struct TxBookRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxBookRepository<'_> {
    /// Delete every book owned by a seller; returns the number removed
    pub async fn delete_by_seller(&self, seller_id: i32) -> AppResult<u64> {
        book_queries::delete_by_seller(self.txn, seller_id).await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
