use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;

use crate::{
    model::highlight::HighlightFormDto,
    server::{
        model::{book::Book, highlight::Highlight, user::User},
        util::validation::ValidationErrors,
    },
    view::{
        form::{CsrfField, Field, FieldKind, ImageUploadForm},
        layout::Layout,
        path, render, ViewContext,
    },
};

pub fn new(
    ctx: ViewContext,
    owner: User,
    book: Book,
    form: HighlightFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    render(
        status,
        rsx!(
            Layout {
                title: format!("New highlight for {}", book.title),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "New highlight for {book.title}" }
                HighlightForm {
                    action: path::highlights(&owner.slug, &book.isbn),
                    back: path::book(&owner.slug, &book.isbn),
                    csrf_token: ctx.csrf_token.clone(),
                    form,
                    errors,
                }
            }
        ),
    )
}

pub fn edit(
    ctx: ViewContext,
    owner: User,
    book: Book,
    highlight: Highlight,
    form: HighlightFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    render(
        status,
        rsx!(
            Layout {
                title: format!("Edit highlight for {}", book.title),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Edit highlight for {book.title}" }
                HighlightForm {
                    action: path::highlight(&owner.slug, &book.isbn, highlight.id),
                    back: path::book(&owner.slug, &book.isbn),
                    csrf_token: ctx.csrf_token.clone(),
                    form,
                    errors,
                }
            }
        ),
    )
}

#[component]
fn HighlightForm(
    action: String,
    back: String,
    csrf_token: String,
    form: HighlightFormDto,
    errors: ValidationErrors,
) -> Element {
    rsx!(form {
        method: "post",
        action: "{action}",
        class: "flex flex-col gap-2 max-w-xl",
        CsrfField { token: csrf_token }
        Field {
            label: "Page",
            name: "page",
            value: form.page.clone(),
            errors: errors.clone(),
            kind: FieldKind::Number,
        }
        Field {
            label: "Content",
            name: "content",
            value: form.content.clone(),
            errors,
            kind: FieldKind::TextArea,
            required: true,
        }
        div {
            class: "flex gap-2 mt-4",
            button { r#type: "submit", class: "btn btn-primary", "Save" }
            a { href: "{back}", class: "btn btn-ghost", "Cancel" }
        }
    })
}

/// Highlight image upload form.
pub fn image(
    ctx: ViewContext,
    owner: User,
    book: Book,
    highlight: Highlight,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    let highlight_path = path::highlight(&owner.slug, &book.isbn, highlight.id);

    render(
        status,
        rsx!(
            Layout {
                title: "Highlight image".to_string(),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Upload image for page {highlight.page}" }
                p {
                    class: "mb-4 text-sm text-base-content/60",
                    "JPG, PNG or GIF, at most 3000 px on each side."
                }
                ImageUploadForm {
                    action: format!("{}/image", highlight_path),
                    csrf_token: ctx.csrf_token.clone(),
                    field: "image",
                    errors,
                    back: path::book(&owner.slug, &book.isbn),
                }
            }
        ),
    )
}
