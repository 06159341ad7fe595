use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;

use crate::view::{layout::Layout, render, ViewContext};

/// Renders a generic error page with the given status.
///
/// Error pages have no access to the session, so they are always rendered as seen by an
/// anonymous visitor.
pub fn render_error_page(status: StatusCode, message: &str) -> Response {
    let title = status
        .canonical_reason()
        .unwrap_or("Error")
        .to_string();
    let code = status.as_u16();
    let message = message.to_string();

    render(
        status,
        rsx!(
            Layout {
                title: title.clone(),
                ctx: ViewContext::default(),
                div {
                    class: "flex flex-col items-center gap-4 pt-12",
                    h1 { class: "text-4xl font-bold", "{code}" }
                    h2 { class: "text-xl", "{title}" }
                    p { "{message}" }
                    a { href: "/", class: "btn btn-primary", "Back to home" }
                }
            }
        ),
    )
}
