//! Seller repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::{Seller, SellerProfile, SellerWithBooks};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Seller repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Find seller by ID together with the books it owns
    async fn find_with_books(&self, id: i32) -> AppResult<Option<SellerWithBooks>>;

    /// Check whether a seller with this ID exists
    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// List all sellers
    async fn list(&self) -> AppResult<Vec<Seller>>;

    /// Insert a new seller with an already hashed password
    async fn create(&self, profile: SellerProfile, password_hash: String) -> AppResult<Seller>;

    /// Overwrite name and email; `NotFound` if the seller is absent
    async fn update(&self, id: i32, profile: SellerProfile) -> AppResult<Seller>;

    /// Delete the seller row only; returns whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of SellerRepository
pub struct SellerStore {
    db: DatabaseConnection,
}

impl SellerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepository for SellerStore {
    async fn find_with_books(&self, id: i32) -> AppResult<Option<SellerWithBooks>> {
        queries::find_with_books(&self.db, id).await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        queries::exists(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Seller>> {
        queries::list(&self.db).await
    }

    async fn create(&self, profile: SellerProfile, password_hash: String) -> AppResult<Seller> {
        queries::create(&self.db, profile, password_hash).await
    }

    async fn update(&self, id: i32, profile: SellerProfile) -> AppResult<Seller> {
        queries::update(&self.db, id, profile).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        queries::delete(&self.db, id).await
    }
}

/// Statements shared by the pooled store and the transaction-bound repository.
pub(crate) mod queries {
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, PaginatorTrait,
        QueryOrder, Set,
    };

    use crate::domain::{Book, Seller, SellerProfile, SellerWithBooks};
    use crate::errors::{AppResult, OptionExt};
    use crate::infra::repositories::entities::book::{self, Entity as BookEntity};
    use crate::infra::repositories::entities::seller::{self, ActiveModel, Entity as SellerEntity};

    pub async fn find_with_books<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> AppResult<Option<SellerWithBooks>> {
        let Some(model) = SellerEntity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };

        let books = model
            .find_related(BookEntity)
            .order_by_asc(book::Column::Id)
            .all(conn)
            .await?;

        Ok(Some(SellerWithBooks {
            seller: Seller::from(model),
            books: books.into_iter().map(Book::from).collect(),
        }))
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
        let count = SellerEntity::find_by_id(id).count(conn).await?;
        Ok(count > 0)
    }

    pub async fn list<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Seller>> {
        let models = SellerEntity::find()
            .order_by_asc(seller::Column::Id)
            .all(conn)
            .await?;

        Ok(models.into_iter().map(Seller::from).collect())
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        profile: SellerProfile,
        password_hash: String,
    ) -> AppResult<Seller> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            email: Set(profile.email),
            password: Set(password_hash),
        };

        let model = active_model.insert(conn).await?;
        Ok(Seller::from(model))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        profile: SellerProfile,
    ) -> AppResult<Seller> {
        let seller = SellerEntity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = seller.into();
        active.first_name = Set(profile.first_name);
        active.last_name = Set(profile.last_name);
        active.email = Set(profile.email);

        let model = active.update(conn).await?;
        Ok(Seller::from(model))
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
        let result = SellerEntity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
