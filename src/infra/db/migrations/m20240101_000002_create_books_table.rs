//! Migration: Create books table with a cascading foreign key to sellers.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_sellers_table::Sellers;
use crate::config::BOOK_FIELD_MAX_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Books::Title)
                            .string_len(BOOK_FIELD_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Books::Author)
                            .string_len(BOOK_FIELD_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Books::Year).integer().not_null())
                    .col(ColumnDef::new(Books::CountPages).integer().not_null())
                    .col(ColumnDef::new(Books::SellerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_seller_id")
                            .from(Books::Table, Books::SellerId)
                            .to(Sellers::Table, Sellers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Seller detail and seller delete both filter on the owner
        manager
            .create_index(
                Index::create()
                    .name("idx_books_seller_id")
                    .table(Books::Table)
                    .col(Books::SellerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    #[iden = "books_table"]
    Table,
    Id,
    Title,
    Author,
    Year,
    CountPages,
    SellerId,
}
