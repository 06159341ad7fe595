pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_shelf_table;
mod m20260901_000003_create_book_table;
mod m20260901_000004_create_highlight_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_shelf_table::Migration),
            Box::new(m20260901_000003_create_book_table::Migration),
            Box::new(m20260901_000004_create_highlight_table::Migration),
        ]
    }
}
