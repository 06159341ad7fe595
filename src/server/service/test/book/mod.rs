use crate::{
    model::book::BookFormDto,
    server::{
        error::AppError,
        model::book::Book,
        service::{book::BookService, image::ImageStore},
    },
};
use sea_orm::EntityTrait;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, factory};

use super::blank_image;

mod assign_shelf;
mod create;
mod delete;
mod set_cover;

/// Cover and highlight image stores in separate temporary directories.
struct Stores {
    _dir: TempDir,
    covers: ImageStore,
    highlights: ImageStore,
}

impl Stores {
    async fn new() -> Stores {
        let dir = tempfile::tempdir().unwrap();
        let covers = ImageStore::new(dir.path().join("books"));
        let highlights = ImageStore::new(dir.path().join("highlights"));
        covers.ensure_dir().await.unwrap();
        highlights.ensure_dir().await.unwrap();

        Stores {
            _dir: dir,
            covers,
            highlights,
        }
    }
}

fn book_form(isbn: &str) -> BookFormDto {
    BookFormDto {
        isbn: isbn.to_string(),
        title: "Gödel, Escher, Bach".to_string(),
        author: "Douglas Hofstadter".to_string(),
        page_count: "777".to_string(),
        ..Default::default()
    }
}
