use reqwest::StatusCode;
use thiserror::Error;

use crate::models::Movie;

/// External movie catalog endpoint. The whole catalog is assumed to arrive
/// from a single GET; there is no pagination on this API.
pub const CATALOG_BASE_URL: &str = "https://moviesdatabase.p.rapidapi.com";
pub const CATALOG_PATH: &str = "/movies";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog responded with status {0}")]
    Status(StatusCode),

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the external movie catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(CATALOG_BASE_URL.to_string())
    }

    /// Point the client at another base URL. Used by tests to target a stub.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full catalog in one request. Anything other than a 200 with
    /// a JSON array of movies is an error; no retry.
    pub async fn fetch_all_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}{}", self.base_url, CATALOG_PATH);
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.text().await?;
        let movies = serde_json::from_str(&body)?;
        Ok(movies)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
