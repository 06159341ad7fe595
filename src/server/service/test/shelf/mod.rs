use crate::server::{
    error::AppError,
    model::shelf::{Shelf, ShelfParam},
    service::shelf::ShelfService,
};
use test_utils::{builder::TestBuilder, factory};

mod move_down;
mod move_up;

/// Appends shelves named after `names` and returns them in position order.
async fn create_shelves(
    service: &ShelfService<'_>,
    user_id: i32,
    names: &[&str],
) -> Result<Vec<Shelf>, AppError> {
    let mut shelves = Vec::new();
    for name in names {
        shelves.push(
            service
                .create(
                    user_id,
                    ShelfParam {
                        name: name.to_string(),
                    },
                )
                .await?,
        );
    }

    Ok(shelves)
}

/// Shelf names of a user in position order, with their positions.
async fn order(service: &ShelfService<'_>, user_id: i32) -> Result<Vec<(String, i32)>, AppError> {
    Ok(service
        .list(user_id)
        .await?
        .into_iter()
        .map(|s| (s.name, s.position))
        .collect())
}
