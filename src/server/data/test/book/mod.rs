use crate::server::{
    data::book::BookRepository,
    model::book::{CreateBookParam, UpdateBookParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_isbn;
mod update;

fn create_param(user_id: i32, isbn: &str) -> CreateBookParam {
    CreateBookParam {
        user_id,
        isbn: isbn.to_string(),
        title: "The Pragmatic Programmer".to_string(),
        subtitle: String::new(),
        author: "Andrew Hunt".to_string(),
        description: String::new(),
        publisher: "Addison-Wesley".to_string(),
        page_count: 352,
        google_books_id: None,
    }
}
