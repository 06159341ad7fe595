pub use super::book::Entity as Book;
pub use super::highlight::Entity as Highlight;
pub use super::shelf::Entity as Shelf;
pub use super::user::Entity as User;
