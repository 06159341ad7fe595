use crate::server::{
    error::AppError,
    model::highlight::HighlightParam,
    service::{highlight::HighlightService, image::ImageStore},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use super::blank_image;

mod delete;
mod set_image;
