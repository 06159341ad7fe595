//! Google Books catalog lookups used to pre-fill the add book form.

use url::Url;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::google_books::{Volume, VolumeList},
};

const GOOGLE_BOOKS_VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub struct GoogleBooksService<'a> {
    http_client: &'a reqwest::Client,
}

impl<'a> GoogleBooksService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Searches the catalog by free-text keyword.
    ///
    /// # Returns
    /// - `Ok(Vec<Volume>)` - Matching volumes, empty when nothing matched
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned an error status
    /// - `Err(InternalError::GoogleBooks)` - Body was not a volume list
    pub async fn search(&self, keyword: &str) -> Result<Vec<Volume>, AppError> {
        let url = Url::parse_with_params(GOOGLE_BOOKS_VOLUMES_URL, &[("q", keyword)])
            .map_err(|e| InternalError::GoogleBooks(e.to_string()))?;

        let body = self.get(url).await?;
        let list: VolumeList = serde_json::from_str(&body)
            .map_err(|e| InternalError::GoogleBooks(e.to_string()))?;

        Ok(list.items)
    }

    /// Fetches a single volume by its Google Books id.
    ///
    /// # Returns
    /// - `Ok(Some(Volume))` - Volume found
    /// - `Ok(None)` - Unknown id
    /// - `Err(AppError)` - Request failed or the body was not a volume
    pub async fn volume(&self, volume_id: &str) -> Result<Option<Volume>, AppError> {
        let url = volume_url(volume_id)?;

        let response = self.http_client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.error_for_status()?.text().await?;

        let volume = serde_json::from_str(&body)
            .map_err(|e| InternalError::GoogleBooks(e.to_string()))?;

        Ok(Some(volume))
    }

    async fn get(&self, url: Url) -> Result<String, AppError> {
        Ok(self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}

/// Volume URL with the id pushed as a single, percent-encoded path segment.
fn volume_url(volume_id: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(GOOGLE_BOOKS_VOLUMES_URL)
        .map_err(|e| InternalError::GoogleBooks(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| InternalError::GoogleBooks("URL cannot have a path".to_string()))?
        .push(volume_id);

    Ok(url)
}
