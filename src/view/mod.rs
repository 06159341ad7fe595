//! Server-rendered HTML views.
//!
//! Pages are Dioxus components rendered to a string with `dioxus-ssr`. Controllers pass
//! owned domain models in, together with a [`ViewContext`] describing who is looking.

pub mod book;
pub mod error;
pub mod form;
pub mod highlight;
pub mod home;
pub mod layout;
pub mod path;
pub mod shelf;
pub mod user;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::server::model::user::User;

/// Request facts every page needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    /// Acting user, `None` for anonymous visitors.
    pub current_user: Option<User>,
    /// Session form token rendered into every state-changing form.
    pub csrf_token: String,
}

impl ViewContext {
    pub fn actor(&self) -> Option<&User> {
        self.current_user.as_ref()
    }
}

/// Renders a page element as a complete HTML document.
pub fn render(status: StatusCode, element: Element) -> Response {
    (status, Html(document(element))).into_response()
}

fn document(element: Element) -> String {
    let content = dioxus_ssr::render_element(element);

    format!(
        r#"<!DOCTYPE html><html lang="en" data-theme="light">{}</html>"#,
        content
    )
}
