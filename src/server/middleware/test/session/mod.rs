use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession, FormTokenSession},
};
use test_utils::builder::TestBuilder;

mod csrf;
mod form_token;
