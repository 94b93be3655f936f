//! Seller service - Handles seller-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::EMAIL_ERROR_MESSAGE;
use crate::domain::{
    is_valid_email, CreateSeller, Password, Seller, SellerProfile, SellerWithBooks,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Seller service trait for dependency injection.
#[async_trait]
pub trait SellerService: Send + Sync {
    /// Register a seller; the password is hashed before it is stored
    async fn create_seller(&self, input: CreateSeller) -> AppResult<Seller>;

    /// List every seller
    async fn list_sellers(&self) -> AppResult<Vec<Seller>>;

    /// Get a seller with the books it owns
    async fn get_seller(&self, id: i32) -> AppResult<SellerWithBooks>;

    /// Overwrite name and email of an existing seller
    async fn update_seller(&self, id: i32, profile: SellerProfile) -> AppResult<Seller>;

    /// Delete a seller and all of its books. Deleting an absent seller is a no-op.
    async fn delete_seller(&self, id: i32) -> AppResult<()>;
}

/// Reject malformed addresses before anything reaches the store.
fn ensure_valid_email(email: &str) -> AppResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::validation(EMAIL_ERROR_MESSAGE))
    }
}

/// Concrete implementation of SellerService using Unit of Work.
pub struct SellerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SellerManager<U> {
    /// Create new seller service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SellerService for SellerManager<U> {
    async fn create_seller(&self, input: CreateSeller) -> AppResult<Seller> {
        ensure_valid_email(&input.email)?;

        let password_hash = Password::new(&input.password)?.into_string();
        let seller = self
            .uow
            .sellers()
            .create(input.profile(), password_hash)
            .await?;

        tracing::info!(seller_id = seller.id, "Seller created");
        Ok(seller)
    }

    async fn list_sellers(&self) -> AppResult<Vec<Seller>> {
        self.uow.sellers().list().await
    }

    async fn get_seller(&self, id: i32) -> AppResult<SellerWithBooks> {
        tracing::debug!(seller_id = id, "Loading seller with books");
        self.uow
            .sellers()
            .find_with_books(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_seller(&self, id: i32, profile: SellerProfile) -> AppResult<Seller> {
        ensure_valid_email(&profile.email)?;

        let seller = self.uow.sellers().update(id, profile).await?;
        tracing::info!(seller_id = id, "Seller updated");
        Ok(seller)
    }

    async fn delete_seller(&self, id: i32) -> AppResult<()> {
        let removed_books = with_transaction!(self.uow, |ctx| {
            if !ctx.sellers().exists(id).await? {
                return Ok(None);
            }

            let books = ctx.books().delete_by_seller(id).await?;
            ctx.sellers().delete(id).await?;
            Ok(Some(books))
        })?;

        match removed_books {
            Some(books) => tracing::info!(seller_id = id, books, "Seller deleted with its books"),
            None => tracing::debug!(seller_id = id, "Seller already absent, nothing to delete"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Book;
    use crate::infra::repositories::{MockBookRepository, MockSellerRepository};
    use crate::infra::{BookRepository, SellerRepository, TransactionContext};
    use mockall::predicate::eq;

    /// Test double for UnitOfWork wrapping mocked repositories
    struct TestUnitOfWork {
        seller_repo: Arc<MockSellerRepository>,
        book_repo: Arc<MockBookRepository>,
    }

    impl TestUnitOfWork {
        fn new(seller_repo: MockSellerRepository) -> Self {
            Self {
                seller_repo: Arc::new(seller_repo),
                book_repo: Arc::new(MockBookRepository::new()),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn sellers(&self) -> Arc<dyn SellerRepository> {
            self.seller_repo.clone()
        }

        fn books(&self) -> Arc<dyn BookRepository> {
            self.book_repo.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            // Transaction not supported in test mock
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    fn test_seller(id: i32) -> Seller {
        Seller {
            id,
            first_name: "I_Hate".to_string(),
            last_name: "Testing".to_string(),
            email: "iht@ya.ru".to_string(),
            password_hash: "hashed".to_string(),
        }
    }

    fn service(repo: MockSellerRepository) -> SellerManager<TestUnitOfWork> {
        SellerManager::new(Arc::new(TestUnitOfWork::new(repo)))
    }

    #[tokio::test]
    async fn test_create_seller_hashes_password() {
        let mut repo = MockSellerRepository::new();
        repo.expect_create()
            .withf(|profile, hash| {
                profile.email == "vp@ya.ru"
                    && hash != "123"
                    && Password::from_hash(hash.clone()).verify("123")
            })
            .times(1)
            .returning(|profile, hash| {
                Ok(Seller {
                    id: 1,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    email: profile.email,
                    password_hash: hash,
                })
            });

        let seller = service(repo)
            .create_seller(CreateSeller {
                first_name: "Vasya".to_string(),
                last_name: "Pupkin".to_string(),
                email: "vp@ya.ru".to_string(),
                password: "123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(seller.id, 1);
        assert_eq!(seller.first_name, "Vasya");
    }

    #[tokio::test]
    async fn test_create_seller_rejects_bad_email_without_touching_store() {
        let mut repo = MockSellerRepository::new();
        repo.expect_create().times(0);

        let result = service(repo)
            .create_seller(CreateSeller {
                first_name: "Vasya".to_string(),
                last_name: "Pupkin".to_string(),
                email: "vp.ya.ru".to_string(),
                password: "123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_seller_not_found() {
        let mut repo = MockSellerRepository::new();
        repo.expect_find_with_books()
            .with(eq(42))
            .returning(|_| Ok(None));

        let result = service(repo).get_seller(42).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_seller_with_books() {
        let mut repo = MockSellerRepository::new();
        repo.expect_find_with_books().returning(|id| {
            Ok(Some(SellerWithBooks {
                seller: test_seller(id),
                books: vec![Book {
                    id: 10,
                    title: "Mziri".to_string(),
                    author: "Lermontov".to_string(),
                    year: 1997,
                    count_pages: 104,
                    seller_id: id,
                }],
            }))
        });

        let result = service(repo).get_seller(3).await.unwrap();
        assert_eq!(result.seller.id, 3);
        assert_eq!(result.books.len(), 1);
        assert_eq!(result.books[0].seller_id, 3);
    }

    #[tokio::test]
    async fn test_list_sellers() {
        let mut repo = MockSellerRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![test_seller(1), test_seller(2)]));

        let sellers = service(repo).list_sellers().await.unwrap();
        assert_eq!(sellers.len(), 2);
    }

    #[tokio::test]
    async fn test_update_seller_passes_path_id() {
        let mut repo = MockSellerRepository::new();
        repo.expect_update()
            .with(
                eq(7),
                eq(SellerProfile {
                    first_name: "Kill".to_string(),
                    last_name: "Me".to_string(),
                    email: "js_forever@ya.ru".to_string(),
                }),
            )
            .times(1)
            .returning(|id, profile| {
                Ok(Seller {
                    id,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    email: profile.email,
                    password_hash: "hashed".to_string(),
                })
            });

        let seller = service(repo)
            .update_seller(
                7,
                SellerProfile {
                    first_name: "Kill".to_string(),
                    last_name: "Me".to_string(),
                    email: "js_forever@ya.ru".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(seller.id, 7);
        assert_eq!(seller.email, "js_forever@ya.ru");
    }

    #[tokio::test]
    async fn test_update_seller_not_found() {
        let mut repo = MockSellerRepository::new();
        repo.expect_update().returning(|_, _| Err(AppError::NotFound));

        let result = service(repo)
            .update_seller(
                99,
                SellerProfile {
                    first_name: "Kill".to_string(),
                    last_name: "Me".to_string(),
                    email: "js_forever@ya.ru".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_seller_revalidates_email() {
        let mut repo = MockSellerRepository::new();
        repo.expect_update().times(0);

        let result = service(repo)
            .update_seller(
                1,
                SellerProfile {
                    first_name: "Kill".to_string(),
                    last_name: "Me".to_string(),
                    email: "no-at-sign".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
