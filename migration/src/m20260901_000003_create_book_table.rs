use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260901_000002_create_shelf_table::Shelf,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(integer(Book::UserId))
                    .col(integer_null(Book::ShelfId))
                    .col(string(Book::Isbn))
                    .col(string(Book::Title))
                    .col(string(Book::Subtitle))
                    .col(string(Book::Author))
                    .col(text(Book::Description))
                    .col(string(Book::Publisher))
                    .col(integer(Book::PageCount))
                    .col(string_null(Book::Image))
                    .col(string_null(Book::GoogleBooksId))
                    .col(
                        timestamp_with_time_zone(Book::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Book::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_user_id")
                            .from(Book::Table, Book::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_shelf_id")
                            .from(Book::Table, Book::ShelfId)
                            .to(Shelf::Table, Shelf::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_user_id_isbn")
                    .table(Book::Table)
                    .col(Book::UserId)
                    .col(Book::Isbn)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    UserId,
    ShelfId,
    Isbn,
    Title,
    Subtitle,
    Author,
    Description,
    Publisher,
    PageCount,
    Image,
    GoogleBooksId,
    CreatedAt,
    UpdatedAt,
}
