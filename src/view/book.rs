use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;
use url::Url;

use crate::{
    model::book::BookFormDto,
    server::{
        middleware::auth::{can, BookAction, Permission, UserAction},
        model::{
            book::Book,
            google_books::{self, Volume},
            highlight::Highlight,
            shelf::Shelf,
            user::User,
        },
        util::validation::ValidationErrors,
    },
    view::{
        form::{CsrfField, DeleteButton, Field, FieldKind, ImageUploadForm},
        layout::Layout,
        path, render, ViewContext,
    },
};

const AMAZON_SEARCH_URL: &str = "https://www.amazon.com/s";

/// Book page with its highlights.
///
/// `shelves` are the owner's shelves, offered in the shelf selector when the actor may
/// rearrange them.
pub fn show(
    ctx: ViewContext,
    owner: User,
    book: Book,
    highlights: Vec<Highlight>,
    shelves: Vec<Shelf>,
) -> Response {
    let actor = ctx.actor();
    let can_edit = can(actor, Permission::Book(&book, BookAction::Edit));
    let can_delete = can(actor, Permission::Book(&book, BookAction::Delete));
    let can_add_highlight = can(actor, Permission::Book(&book, BookAction::CreateHighlight));
    let can_edit_highlight = can(actor, Permission::Book(&book, BookAction::EditHighlight));
    let can_delete_highlight = can(actor, Permission::Book(&book, BookAction::DeleteHighlight));
    let can_shelve = can(actor, Permission::User(&owner, UserAction::ShowShelves));

    let book_path = path::book(&owner.slug, &book.isbn);
    let edit_path = format!("{}/edit", book_path);
    let image_path = format!("{}/image", book_path);
    let shelf_path = format!("{}/shelf", book_path);
    let new_highlight_path = format!("{}/new", path::highlights(&owner.slug, &book.isbn));
    let amazon_url = owner
        .amazon_associates_id
        .as_ref()
        .and_then(|tag| {
            Url::parse_with_params(AMAZON_SEARCH_URL, &[("k", book.isbn.as_str()), ("tag", tag)]).ok()
        })
        .map(String::from);
    let google_books_url = book
        .google_books_id
        .as_ref()
        .map(|id| google_books::info_url(id));
    let csrf_token = ctx.csrf_token.clone();

    render(
        StatusCode::OK,
        rsx!(
            Layout {
                title: book.title.clone(),
                ctx: ctx.clone(),
                div {
                    class: "flex flex-col md:flex-row gap-8",
                    img {
                        src: book.cover_url(),
                        alt: "{book.title}",
                        class: "w-48 self-start rounded shadow",
                    }
                    div {
                        class: "flex flex-col gap-2 flex-1",
                        h1 { class: "text-3xl font-bold", "{book.title}" }
                        if !book.subtitle.is_empty() {
                            h2 { class: "text-xl", "{book.subtitle}" }
                        }
                        p { "by {book.author}" }
                        p {
                            class: "text-sm text-base-content/60",
                            "{book.publisher} · {book.page_count} pages · ISBN {book.isbn}"
                        }
                        if !book.description.is_empty() {
                            p { class: "whitespace-pre-line mt-2", "{book.description}" }
                        }
                        div {
                            class: "flex flex-wrap gap-2 mt-2",
                            if let Some(url) = amazon_url {
                                a { href: "{url}", class: "btn btn-sm", target: "_blank", "Buy on Amazon" }
                            }
                            if let Some(url) = google_books_url {
                                a { href: "{url}", class: "btn btn-sm", target: "_blank", "Google Books" }
                            }
                            a { href: path::user(&owner.slug), class: "btn btn-sm btn-ghost", "Back to {owner.name}" }
                        }
                        if can_shelve {
                            form {
                                method: "post",
                                action: "{shelf_path}",
                                class: "flex gap-2 items-center mt-2",
                                CsrfField { token: csrf_token.clone() }
                                select {
                                    name: "shelf_id",
                                    class: "select select-sm",
                                    option { value: "", selected: book.shelf_id.is_none(), "No shelf" }
                                    for shelf in shelves {
                                        option {
                                            key: "{shelf.id}",
                                            value: "{shelf.id}",
                                            selected: book.shelf_id == Some(shelf.id),
                                            "{shelf.name}"
                                        }
                                    }
                                }
                                button { r#type: "submit", class: "btn btn-sm", "Move" }
                            }
                        }
                        div {
                            class: "flex flex-wrap gap-2 mt-2",
                            if can_edit {
                                a { href: "{edit_path}", class: "btn btn-sm btn-outline", "Edit" }
                                a { href: "{image_path}", class: "btn btn-sm btn-outline", "Upload cover" }
                            }
                            if can_delete {
                                DeleteButton {
                                    path: book_path.clone(),
                                    csrf_token: csrf_token.clone(),
                                    label: "Delete book",
                                }
                            }
                        }
                    }
                }
                section {
                    class: "mt-10 flex flex-col gap-4",
                    div {
                        class: "flex justify-between items-center",
                        h2 { class: "text-2xl font-semibold", "Highlights" }
                        if can_add_highlight {
                            a { href: "{new_highlight_path}", class: "btn btn-primary btn-sm", "Add highlight" }
                        }
                    }
                    if highlights.is_empty() {
                        p { class: "text-base-content/60", "No highlights yet." }
                    }
                    for highlight in highlights {
                        HighlightCard {
                            key: "{highlight.id}",
                            highlight_path: path::highlight(&owner.slug, &book.isbn, highlight.id),
                            highlight: highlight.clone(),
                            csrf_token: csrf_token.clone(),
                            can_edit: can_edit_highlight,
                            can_delete: can_delete_highlight,
                        }
                    }
                }
            }
        ),
    )
}

#[component]
fn HighlightCard(
    highlight: Highlight,
    highlight_path: String,
    csrf_token: String,
    can_edit: bool,
    can_delete: bool,
) -> Element {
    let edit_path = format!("{}/edit", highlight_path);
    let image_path = format!("{}/image", highlight_path);

    rsx!(div {
        class: "card bg-base-200",
        div {
            class: "card-body",
            p { class: "text-sm text-base-content/60", "Page {highlight.page}" }
            blockquote { class: "whitespace-pre-line", "{highlight.content}" }
            if let Some(url) = highlight.image_url() {
                img { src: "{url}", alt: "", class: "max-w-md rounded" }
            }
            div {
                class: "card-actions justify-end",
                if can_edit {
                    a { href: "{edit_path}", class: "btn btn-sm btn-outline", "Edit" }
                    a { href: "{image_path}", class: "btn btn-sm btn-outline", "Upload image" }
                }
                if can_delete {
                    DeleteButton { path: highlight_path.clone(), csrf_token, label: "Delete" }
                }
            }
        }
    })
}

/// Google Books search shown above the add book form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookSearch {
    pub keyword: String,
    pub results: Vec<Volume>,
}

/// Add book form, with a catalog search that pre-fills it.
pub fn new(
    ctx: ViewContext,
    owner: User,
    form: BookFormDto,
    errors: ValidationErrors,
    search: BookSearch,
    status: StatusCode,
) -> Response {
    let action = path::books(&owner.slug);
    let back = path::user(&owner.slug);
    let new_path = format!("{}/new", action);

    render(
        status,
        rsx!(
            Layout {
                title: "Add book".to_string(),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Add book" }
                GoogleBooksSearch { action: new_path, search }
                BookForm {
                    action,
                    back,
                    csrf_token: ctx.csrf_token.clone(),
                    form,
                    errors,
                    new_book: true,
                }
            }
        ),
    )
}

#[component]
fn GoogleBooksSearch(action: String, search: BookSearch) -> Element {
    let nothing_found = !search.keyword.is_empty() && search.results.is_empty();
    let results: Vec<(String, String, String, String)> = search
        .results
        .into_iter()
        .map(|volume| {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("volume", &volume.id)
                .finish();
            let cover = volume.cover_url();
            (
                format!("{}?{}", action, query),
                cover,
                volume.volume_info.title,
                volume.id,
            )
        })
        .collect();

    rsx!(
        form {
            method: "get",
            action: "{action}",
            class: "flex gap-2 max-w-xl mb-4",
            input {
                r#type: "search",
                name: "q",
                value: "{search.keyword}",
                placeholder: "Search Google Books by title, author or ISBN",
                class: "input input-bordered w-full",
            }
            button { r#type: "submit", class: "btn", "Search" }
        }
        if nothing_found {
            p { class: "mb-4", "No books found." }
        }
        div {
            class: "grid grid-cols-3 md:grid-cols-6 gap-4 mb-8",
            for (href, cover, title, id) in results {
                a {
                    key: "{id}",
                    href: "{href}",
                    title: "{title}",
                    img {
                        src: "{cover}",
                        alt: "{title}",
                        class: "w-full aspect-[3/4] object-cover rounded shadow",
                    }
                }
            }
        }
    )
}

/// Edit book form. The ISBN and Google Books id are fixed once a book is added.
pub fn edit(
    ctx: ViewContext,
    owner: User,
    book: Book,
    form: BookFormDto,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    let action = path::book(&owner.slug, &book.isbn);

    render(
        status,
        rsx!(
            Layout {
                title: format!("Edit {}", book.title),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Edit {book.title}" }
                BookForm {
                    action: action.clone(),
                    back: action,
                    csrf_token: ctx.csrf_token.clone(),
                    form,
                    errors,
                    new_book: false,
                }
            }
        ),
    )
}

#[component]
fn BookForm(
    action: String,
    back: String,
    csrf_token: String,
    form: BookFormDto,
    errors: ValidationErrors,
    new_book: bool,
) -> Element {
    rsx!(form {
        method: "post",
        action: "{action}",
        class: "flex flex-col gap-2 max-w-xl",
        CsrfField { token: csrf_token }
        if new_book {
            Field {
                label: "ISBN",
                name: "isbn",
                value: form.isbn.clone(),
                errors: errors.clone(),
                required: true,
            }
            Field {
                label: "Google Books ID",
                name: "google_books_id",
                value: form.google_books_id.clone(),
                errors: errors.clone(),
            }
        }
        Field {
            label: "Title",
            name: "title",
            value: form.title.clone(),
            errors: errors.clone(),
            required: true,
        }
        Field {
            label: "Subtitle",
            name: "subtitle",
            value: form.subtitle.clone(),
            errors: errors.clone(),
        }
        Field {
            label: "Author",
            name: "author",
            value: form.author.clone(),
            errors: errors.clone(),
            required: true,
        }
        Field {
            label: "Publisher",
            name: "publisher",
            value: form.publisher.clone(),
            errors: errors.clone(),
        }
        Field {
            label: "Page count",
            name: "page_count",
            value: form.page_count.clone(),
            errors: errors.clone(),
            kind: FieldKind::Number,
        }
        Field {
            label: "Description",
            name: "description",
            value: form.description.clone(),
            errors: errors.clone(),
            kind: FieldKind::TextArea,
        }
        div {
            class: "flex gap-2 mt-4",
            button { r#type: "submit", class: "btn btn-primary", "Save" }
            a { href: "{back}", class: "btn btn-ghost", "Cancel" }
        }
    })
}

/// Cover upload form.
pub fn image(
    ctx: ViewContext,
    owner: User,
    book: Book,
    errors: ValidationErrors,
    status: StatusCode,
) -> Response {
    let book_path = path::book(&owner.slug, &book.isbn);

    render(
        status,
        rsx!(
            Layout {
                title: format!("Cover of {}", book.title),
                ctx: ctx.clone(),
                h1 { class: "text-3xl font-bold mb-4", "Upload cover for {book.title}" }
                p {
                    class: "mb-4 text-sm text-base-content/60",
                    "JPG, PNG or GIF in portrait orientation, at most 3000 px on each side."
                }
                ImageUploadForm {
                    action: format!("{}/image", book_path),
                    csrf_token: ctx.csrf_token.clone(),
                    field: "image",
                    errors,
                    back: book_path.clone(),
                }
            }
        ),
    )
}
