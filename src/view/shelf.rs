use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowDown, FaArrowUp},
    Icon,
};

use crate::{
    model::shelf::ShelfFormDto,
    server::{
        middleware::auth::{can, Permission, ShelfAction, UserAction},
        model::{shelf::Shelf, user::User},
        util::validation::ValidationErrors,
    },
    view::{
        form::{CsrfField, DeleteButton, Field},
        layout::Layout,
        path, render, ViewContext,
    },
};

/// Shelf management list with reorder, rename and delete actions.
pub fn index(ctx: ViewContext, owner: User, shelves: Vec<Shelf>) -> Response {
    let actor = ctx.actor();
    let can_create = can(actor, Permission::User(&owner, UserAction::CreateShelf));
    let last_position = shelves.iter().map(|s| s.position).max().unwrap_or(0);

    let rows: Vec<ShelfRowData> = shelves
        .into_iter()
        .map(|shelf| ShelfRowData {
            path: path::shelf(&owner.slug, shelf.id),
            can_up: can(actor, Permission::Shelf(&shelf, ShelfAction::Up)),
            can_down: can(
                actor,
                Permission::Shelf(&shelf, ShelfAction::Down { last_position }),
            ),
            can_edit: can(actor, Permission::Shelf(&shelf, ShelfAction::Edit)),
            can_delete: can(actor, Permission::Shelf(&shelf, ShelfAction::Delete)),
            shelf,
        })
        .collect();
    let new_path = format!("{}/new", path::shelves(&owner.slug));

    render(
        StatusCode::OK,
        rsx!(
            Layout {
                title: "Shelves".to_string(),
                ctx: ctx.clone(),
                div {
                    class: "flex justify-between items-center mb-4",
                    h1 { class: "text-3xl font-bold", "Shelves" }
                    div {
                        class: "flex gap-2",
                        a { href: path::user(&owner.slug), class: "btn btn-ghost", "Back to profile" }
                        if can_create {
                            a { href: "{new_path}", class: "btn btn-primary", "New shelf" }
                        }
                    }
                }
                if rows.is_empty() {
                    p { class: "text-base-content/60", "No shelves yet." }
                }
                ul {
                    class: "list bg-base-200 rounded-box",
                    for row in rows {
                        ShelfRow {
                            key: "{row.shelf.id}",
                            shelf: row.shelf.clone(),
                            path: row.path.clone(),
                            csrf_token: ctx.csrf_token.clone(),
                            can_up: row.can_up,
                            can_down: row.can_down,
                            can_edit: row.can_edit,
                            can_delete: row.can_delete,
                        }
                    }
                }
            }
        ),
    )
}

/// Per-shelf permissions resolved before rendering.
struct ShelfRowData {
    shelf: Shelf,
    path: String,
    can_up: bool,
    can_down: bool,
    can_edit: bool,
    can_delete: bool,
}

#[component]
fn ShelfRow(
    shelf: Shelf,
    path: String,
    csrf_token: String,
    can_up: bool,
    can_down: bool,
    can_edit: bool,
    can_delete: bool,
) -> Element {
    let up_path = format!("{}/up", path);
    let down_path = format!("{}/down", path);
    let edit_path = format!("{}/edit", path);

    rsx!(li {
        class: "list-row items-center",
        span { class: "font-mono text-base-content/60", "{shelf.position}" }
        span { class: "list-col-grow", "{shelf.name}" }
        div {
            class: "flex gap-1",
            if can_up {
                form {
                    method: "post",
                    action: "{up_path}",
                    CsrfField { token: csrf_token.clone() }
                    button {
                        r#type: "submit",
                        class: "btn btn-sm btn-square",
                        title: "Move up",
                        Icon { width: 14, height: 14, icon: FaArrowUp }
                    }
                }
            }
            if can_down {
                form {
                    method: "post",
                    action: "{down_path}",
                    CsrfField { token: csrf_token.clone() }
                    button {
                        r#type: "submit",
                        class: "btn btn-sm btn-square",
                        title: "Move down",
                        Icon { width: 14, height: 14, icon: FaArrowDown }
                    }
                }
            }
            if can_edit {
                a { href: "{edit_path}", class: "btn btn-sm btn-outline", "Rename" }
            }
            if can_delete {
                DeleteButton { path: path.clone(), csrf_token: csrf_token.clone(), label: "Delete" }
            }
        }
    })
}

pub fn new(
    ctx: ViewContext,
    owner: User,
    form: ShelfFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    let shelves_path = path::shelves(&owner.slug);

    render(
        status,
        rsx!(
            Layout {
                title: "New shelf".to_string(),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "New shelf" }
                ShelfForm {
                    action: shelves_path.clone(),
                    back: shelves_path,
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
    shelf: Shelf,
    form: ShelfFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    render(
        status,
        rsx!(
            Layout {
                title: format!("Rename {}", shelf.name),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Rename {shelf.name}" }
                ShelfForm {
                    action: path::shelf(&owner.slug, shelf.id),
                    back: path::shelves(&owner.slug),
                    csrf_token: ctx.csrf_token.clone(),
                    form,
                    errors,
                }
            }
        ),
    )
}

#[component]
fn ShelfForm(
    action: String,
    back: String,
    csrf_token: String,
    form: ShelfFormDto,
    errors: ValidationErrors,
) -> Element {
    rsx!(form {
        method: "post",
        action: "{action}",
        class: "flex flex-col gap-2 max-w-xl",
        CsrfField { token: csrf_token }
        Field {
            label: "Name",
            name: "name",
            value: form.name.clone(),
            errors,
            required: true,
        }
        div {
            class: "flex gap-2 mt-4",
            button { r#type: "submit", class: "btn btn-primary", "Save" }
            a { href: "{back}", class: "btn btn-ghost", "Cancel" }
        }
    })
}
