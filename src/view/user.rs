use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;

use crate::{
    model::user::UserFormDto,
    server::{
        middleware::auth::{can, Permission, UserAction},
        model::{
            book::Book,
            user::{User, UserProfile},
        },
        util::validation::ValidationErrors,
    },
    view::{
        form::{CsrfField, Field, FieldKind},
        layout::Layout,
        path, render, ViewContext,
    },
};

/// Public profile: shelves in position order with their books, then unshelved books.
pub fn show(ctx: ViewContext, user: User, profile: UserProfile) -> Response {
    let actor = ctx.actor();
    let can_edit = can(actor, Permission::User(&user, UserAction::Edit));
    let can_add_book = can(actor, Permission::User(&user, UserAction::CreateBook));
    let can_list_shelves = can(actor, Permission::User(&user, UserAction::ListShelves));
    let slug = user.slug.clone();
    let new_book = format!("{}/new", path::books(&slug));
    let socials = social_links(&user);

    render(
        StatusCode::OK,
        rsx!(
            Layout {
                title: user.name.clone(),
                ctx: ctx.clone(),
                div {
                    class: "flex flex-col gap-8",
                    div {
                        class: "flex flex-wrap items-center gap-4",
                        if let Some(image) = &user.image {
                            img { src: "{image}", alt: "", class: "w-20 h-20 rounded-full" }
                        }
                        div {
                            class: "flex-1",
                            h1 { class: "text-3xl font-bold", "{user.name}" }
                            if let Some(description) = &user.description {
                                p { class: "whitespace-pre-line", "{description}" }
                            }
                            div {
                                class: "flex flex-wrap gap-3 mt-2",
                                for (label, href) in socials {
                                    a { href: "{href}", class: "link", target: "_blank", "{label}" }
                                }
                            }
                        }
                        div {
                            class: "flex flex-wrap gap-2",
                            if can_add_book {
                                a { href: "{new_book}", class: "btn btn-primary", "Add book" }
                            }
                            if can_list_shelves {
                                a { href: path::shelves(&slug), class: "btn btn-outline", "Shelves" }
                            }
                            if can_edit {
                                a { href: path::user_edit(&slug), class: "btn btn-ghost", "Edit profile" }
                            }
                        }
                    }
                    for entry in profile.shelves {
                        section {
                            key: "{entry.shelf.id}",
                            h2 { class: "text-2xl font-semibold mb-4", "{entry.shelf.name}" }
                            BookGrid { slug: slug.clone(), books: entry.books }
                        }
                    }
                    if !profile.unshelved.is_empty() {
                        section {
                            h2 { class: "text-2xl font-semibold mb-4", "Other books" }
                            BookGrid { slug: slug.clone(), books: profile.unshelved }
                        }
                    }
                }
            }
        ),
    )
}

#[component]
fn BookGrid(slug: String, books: Vec<Book>) -> Element {
    if books.is_empty() {
        return rsx!(p { class: "text-base-content/60", "No books yet." });
    }

    rsx!(div {
        class: "grid grid-cols-2 sm:grid-cols-4 md:grid-cols-6 gap-4",
        for book in books {
            a {
                key: "{book.id}",
                href: path::book(&slug, &book.isbn),
                class: "flex flex-col gap-1",
                img {
                    src: book.cover_url(),
                    alt: "{book.title}",
                    class: "w-full aspect-[2/3] object-cover rounded shadow",
                }
                span { class: "text-sm font-medium", "{book.title}" }
                span { class: "text-xs text-base-content/60", "{book.author}" }
            }
        }
    })
}

/// Profile edit form, re-rendered with `errors` after a failed submission.
pub fn edit(
    ctx: ViewContext,
    user: User,
    form: UserFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    let action = path::user(&user.slug);
    let fields: [(&'static str, &'static str, String); 8] = [
        ("amazon_associates_id", "Amazon Associates ID", form.amazon_associates_id.clone()),
        ("facebook", "Facebook", form.facebook.clone()),
        ("twitter", "Twitter", form.twitter.clone()),
        ("linkedin", "Linkedin", form.linkedin.clone()),
        ("instagram", "Instagram", form.instagram.clone()),
        ("phone", "Phone", form.phone.clone()),
        ("whatsapp", "Whatsapp", form.whatsapp.clone()),
        ("telegram", "Telegram", form.telegram.clone()),
    ];

    render(
        status,
        rsx!(
            Layout {
                title: "Edit profile".to_string(),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Edit profile" }
                form {
                    method: "post",
                    action: "{action}",
                    class: "flex flex-col gap-2 max-w-xl",
                    CsrfField { token: ctx.csrf_token.clone() }
                    Field {
                        label: "Description",
                        name: "description",
                        value: form.description.clone(),
                        errors: errors.clone(),
                        kind: FieldKind::TextArea,
                    }
                    for (name, label, value) in fields {
                        Field {
                            key: "{name}",
                            label,
                            name,
                            value,
                            errors: errors.clone(),
                        }
                    }
                    div {
                        class: "flex gap-2 mt-4",
                        button { r#type: "submit", class: "btn btn-primary", "Save" }
                        a { href: "{action}", class: "btn btn-ghost", "Cancel" }
                    }
                }
            }
        ),
    )
}

/// Outbound links for the profile fields the user filled in.
fn social_links(user: &User) -> Vec<(&'static str, String)> {
    let links = [
        ("Facebook", &user.facebook, "https://facebook.com/"),
        ("Twitter", &user.twitter, "https://twitter.com/"),
        ("Linkedin", &user.linkedin, "https://www.linkedin.com/in/"),
        ("Instagram", &user.instagram, "https://instagram.com/"),
        ("Phone", &user.phone, "tel:"),
        ("Whatsapp", &user.whatsapp, "https://wa.me/"),
        ("Telegram", &user.telegram, "https://t.me/"),
    ];

    links
        .into_iter()
        .filter_map(|(label, value, prefix)| {
            value
                .as_deref()
                .map(|value| (label, format!("{}{}", prefix, value)))
        })
        .collect()
}
