use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shelf::Table)
                    .if_not_exists()
                    .col(pk_auto(Shelf::Id))
                    .col(integer(Shelf::UserId))
                    .col(string(Shelf::Name))
                    .col(integer(Shelf::Position))
                    .col(
                        timestamp_with_time_zone(Shelf::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Shelf::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shelf_user_id")
                            .from(Shelf::Table, Shelf::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user's shelf positions never collide
        manager
            .create_index(
                Index::create()
                    .name("idx_shelf_user_id_position")
                    .table(Shelf::Table)
                    .col(Shelf::UserId)
                    .col(Shelf::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shelf::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shelf {
    Table,
    Id,
    UserId,
    Name,
    Position,
    CreatedAt,
    UpdatedAt,
}
