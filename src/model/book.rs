use serde::Deserialize;

/// Submitted new/edit book form.
///
/// `page_count` stays a string so non-numeric input is reported as a validation error
/// instead of a rejected request. The edit form omits `isbn` and `google_books_id`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookFormDto {
    pub csrf_token: String,
    pub isbn: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub description: String,
    pub publisher: String,
    pub page_count: String,
    pub google_books_id: String,
}

/// Submitted shelf selector on the book page. An empty `shelf_id` unshelves the book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssignShelfDto {
    pub csrf_token: String,
    pub shelf_id: String,
}

/// Query string of the add book page.
///
/// `q` searches the Google Books catalog, `volume` pre-fills the form from one result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookSearchQuery {
    pub q: String,
    pub volume: String,
}
