//! Volumes returned by the Google Books catalog.
//!
//! Only the fields used to pre-fill the add book form are read. Every field is optional
//! in the API response, so all of them default when missing.

use serde::Deserialize;
use url::form_urlencoded::byte_serialize;

use crate::model::book::BookFormDto;

const COVER_URL: &str = "https://books.google.com/books/content";
const INFO_URL: &str = "https://books.google.com/books";

/// Front cover thumbnail of a Google Books volume.
pub fn cover_url(volume_id: &str) -> String {
    format!(
        "{}?id={}&printsec=frontcover&img=1&zoom=1",
        COVER_URL,
        encode(volume_id)
    )
}

/// Public catalog page of a Google Books volume.
pub fn info_url(volume_id: &str) -> String {
    format!("{}?id={}", INFO_URL, encode(volume_id))
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Search result page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VolumeList {
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    pub subtitle: String,
    pub authors: Vec<String>,
    pub description: String,
    pub publisher: String,
    pub page_count: Option<i32>,
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

impl Volume {
    /// The volume's ISBN-13, if the catalog lists one.
    pub fn isbn13(&self) -> Option<&str> {
        self.volume_info
            .industry_identifiers
            .iter()
            .find(|i| i.kind == "ISBN_13")
            .map(|i| i.identifier.as_str())
    }

    pub fn cover_url(&self) -> String {
        cover_url(&self.id)
    }

    /// Pre-fills the add book form. Authors are joined with commas.
    pub fn to_form(&self) -> BookFormDto {
        let info = &self.volume_info;

        BookFormDto {
            csrf_token: String::new(),
            isbn: self.isbn13().unwrap_or_default().to_string(),
            title: info.title.clone(),
            subtitle: info.subtitle.clone(),
            author: info.authors.join(", "),
            description: info.description.clone(),
            publisher: info.publisher.clone(),
            page_count: info.page_count.map(|c| c.to_string()).unwrap_or_default(),
            google_books_id: self.id.clone(),
        }
    }
}
