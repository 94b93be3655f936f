//! Book repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{Book, BookDetails};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// List all books
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Insert a new book
    async fn create(&self, details: BookDetails) -> AppResult<Book>;

    /// Overwrite every book field; `NotFound` if the book is absent
    async fn update(&self, id: i32, details: BookDetails) -> AppResult<Book>;

    /// Delete one book; returns whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        queries::list(&self.db).await
    }

    async fn create(&self, details: BookDetails) -> AppResult<Book> {
        queries::create(&self.db, details).await
    }

    async fn update(&self, id: i32, details: BookDetails) -> AppResult<Book> {
        queries::update(&self.db, id, details).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        queries::delete(&self.db, id).await
    }
}

/// Statements shared by the pooled store and the transaction-bound repository.
pub(crate) mod queries {
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
        QueryOrder, Set, SqlErr,
    };

    use crate::domain::{Book, BookDetails};
    use crate::errors::{AppError, AppResult, OptionExt};
    use crate::infra::repositories::entities::book::{self, ActiveModel, Entity as BookEntity};

    /// Turn a foreign-key violation on `seller_id` into a client error.
    fn map_write_error(err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::validation("seller does not exist")
            }
            _ => AppError::from(err),
        }
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id).one(conn).await?;
        Ok(result.map(Book::from))
    }

    pub async fn list<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_asc(book::Column::Id)
            .all(conn)
            .await?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    pub async fn create<C: ConnectionTrait>(conn: &C, details: BookDetails) -> AppResult<Book> {
        let active_model = ActiveModel {
            id: NotSet,
            title: Set(details.title),
            author: Set(details.author),
            year: Set(details.year),
            count_pages: Set(details.count_pages),
            seller_id: Set(details.seller_id),
        };

        let model = active_model.insert(conn).await.map_err(map_write_error)?;
        Ok(Book::from(model))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        details: BookDetails,
    ) -> AppResult<Book> {
        let book = BookEntity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = book.into();
        active.title = Set(details.title);
        active.author = Set(details.author);
        active.year = Set(details.year);
        active.count_pages = Set(details.count_pages);
        active.seller_id = Set(details.seller_id);

        let model = active.update(conn).await.map_err(map_write_error)?;
        Ok(Book::from(model))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
        let result = BookEntity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_seller<C: ConnectionTrait>(conn: &C, seller_id: i32) -> AppResult<u64> {
        let result = BookEntity::delete_many()
            .filter(book::Column::SellerId.eq(seller_id))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, DatabaseConnection};

    use super::queries;
    use crate::domain::{BookDetails, SellerProfile};
    use crate::errors::AppError;
    use crate::infra::repositories::seller_queries;
    use crate::infra::Database;

    async fn connection() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        Database::connect_with(options)
            .await
            .expect("in-memory database should migrate")
            .get_connection()
    }

    fn details(seller_id: i32) -> BookDetails {
        BookDetails {
            title: "Mziri".to_string(),
            author: "Lermontov".to_string(),
            year: 2007,
            count_pages: 100,
            seller_id,
        }
    }

    #[tokio::test]
    async fn test_create_for_missing_seller_hits_foreign_key() {
        let conn = connection().await;

        let result = queries::create(&conn, details(42)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(queries::list(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_missing_seller_hits_foreign_key() {
        let conn = connection().await;
        let seller = seller_queries::create(
            &conn,
            SellerProfile {
                first_name: "Vasya".to_string(),
                last_name: "Pupkin".to_string(),
                email: "vp@ya.ru".to_string(),
            },
            "hashed".to_string(),
        )
        .await
        .unwrap();
        let book = queries::create(&conn, details(seller.id)).await.unwrap();

        let result = queries::update(&conn, book.id, details(42)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let stored = queries::find_by_id(&conn, book.id).await.unwrap().unwrap();
        assert_eq!(stored.seller_id, seller.id);
    }
}
