use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Image))
                    .col(string_uniq(User::Slug))
                    .col(text_null(User::Description))
                    .col(string_null(User::Facebook))
                    .col(string_null(User::Twitter))
                    .col(string_null(User::Linkedin))
                    .col(string_null(User::Instagram))
                    .col(string_null(User::Phone))
                    .col(string_null(User::Whatsapp))
                    .col(string_null(User::Telegram))
                    .col(string_null(User::AmazonAssociatesId))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Image,
    Slug,
    Description,
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
    Phone,
    Whatsapp,
    Telegram,
    AmazonAssociatesId,
    CreatedAt,
    UpdatedAt,
}
