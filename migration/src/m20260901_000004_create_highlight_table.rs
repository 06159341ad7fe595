use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Highlight::Table)
                    .if_not_exists()
                    .col(pk_auto(Highlight::Id))
                    .col(integer(Highlight::BookId))
                    .col(integer(Highlight::Page))
                    .col(text(Highlight::Content))
                    .col(string_null(Highlight::Image))
                    .col(
                        timestamp_with_time_zone(Highlight::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Highlight::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_highlight_book_id")
                            .from(Highlight::Table, Highlight::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Highlight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Highlight {
    Table,
    Id,
    BookId,
    Page,
    Content,
    Image,
    CreatedAt,
    UpdatedAt,
}
