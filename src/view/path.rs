//! URL builders shared by views and redirects.

pub fn user(slug: &str) -> String {
    format!("/users/{}", slug)
}

pub fn user_edit(slug: &str) -> String {
    format!("/users/{}/edit", slug)
}

pub fn books(slug: &str) -> String {
    format!("/users/{}/books", slug)
}

pub fn book(slug: &str, isbn: &str) -> String {
    format!("/users/{}/books/{}", slug, isbn)
}

pub fn shelves(slug: &str) -> String {
    format!("/users/{}/shelves", slug)
}

pub fn shelf(slug: &str, shelf_id: i32) -> String {
    format!("/users/{}/shelves/{}", slug, shelf_id)
}

pub fn highlights(slug: &str, isbn: &str) -> String {
    format!("/users/{}/books/{}/highlights", slug, isbn)
}

pub fn highlight(slug: &str, isbn: &str, highlight_id: i32) -> String {
    format!("/users/{}/books/{}/highlights/{}", slug, isbn, highlight_id)
}

/// Form action that the method override turns into a DELETE.
pub fn delete(path: &str) -> String {
    format!("{}?_method=DELETE", path)
}
