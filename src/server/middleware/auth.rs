//! Authorization predicate and request guard.
//!
//! Every action a request can take is a [`Permission`] variant carrying its subject, so
//! [`can`] is an exhaustive match with no unhandled combinations. [`AuthGuard`] resolves
//! the acting user from the session and turns a denied permission into an error.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{book::Book, shelf::Shelf, user::User},
};

/// Actions on a user's own profile and collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Edit,
    CreateBook,
    CreateShelf,
    ListShelves,
    ShowShelves,
}

/// Actions on a book and the highlights attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Edit,
    Delete,
    CreateHighlight,
    EditHighlight,
    DeleteHighlight,
}

/// Actions on a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfAction {
    Edit,
    Delete,
    Up,
    /// Moving down needs the owner's last position to know where the list ends.
    Down { last_position: i32 },
}

/// Something an actor may attempt, together with its subject.
#[derive(Debug, Clone, Copy)]
pub enum Permission<'a> {
    Login,
    Logout,
    User(&'a User, UserAction),
    Book(&'a Book, BookAction),
    Shelf(&'a Shelf, ShelfAction),
}

/// Decides whether `actor` may perform `permission`.
///
/// Logging in is only for anonymous visitors and logging out only for signed-in users.
/// Everything else requires the actor to own the subject; shelf moves additionally stay
/// within `1..=last_position`.
pub fn can(actor: Option<&User>, permission: Permission<'_>) -> bool {
    match permission {
        Permission::Login => actor.is_none(),
        Permission::Logout => actor.is_some(),
        Permission::User(user, _) => owns(actor, user.id),
        Permission::Book(book, _) => owns(actor, book.user_id),
        Permission::Shelf(shelf, action) => {
            owns(actor, shelf.user_id)
                && match action {
                    ShelfAction::Edit | ShelfAction::Delete => true,
                    ShelfAction::Up => shelf.position > 1,
                    ShelfAction::Down { last_position } => shelf.position < last_position,
                }
        }
    }
}

fn owns(actor: Option<&User>, owner_id: i32) -> bool {
    actor.is_some_and(|actor| actor.id == owner_id)
}

/// Describes a denied permission for the server log.
fn describe(permission: &Permission<'_>) -> String {
    match permission {
        Permission::Login => "login".to_string(),
        Permission::Logout => "logout".to_string(),
        Permission::User(user, action) => format!("{:?} on user {}", action, user.id),
        Permission::Book(book, action) => format!("{:?} on book {}", action, book.id),
        Permission::Shelf(shelf, action) => format!("{:?} on shelf {}", action, shelf.id),
    }
}

/// Request-scoped access to the acting user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the user stored in the session, if any.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Logged-in user
    /// - `Ok(None)` - Anonymous request
    /// - `Err(AppError)` - Session or database failure
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    pub async fn require_login(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Checks a permission for an already resolved actor.
    ///
    /// # Returns
    /// - `Ok(())` - Permission granted
    /// - `Err(AuthError::AccessDenied)` - Predicate denied the action
    pub fn authorize(actor: Option<&User>, permission: Permission<'_>) -> Result<(), AppError> {
        if can(actor, permission) {
            return Ok(());
        }

        let who = actor.map_or_else(|| "anonymous".to_string(), |a| format!("user {}", a.id));
        Err(AuthError::AccessDenied(format!("{} attempted {}", who, describe(&permission))).into())
    }
}
