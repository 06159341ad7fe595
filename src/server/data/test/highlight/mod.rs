use crate::server::{data::highlight::HighlightRepository, model::highlight::HighlightParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_book;
