use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog entry. The id is assigned by the external catalog and used as the
/// primary key on insert, so a re-ingested movie collides on the PK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub description: String,
    pub imdb_code: String,
}

/// One rental-cart line. The id is generated by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub movie_name: String,
    pub release_year: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default)]
    pub user_id: i32,
    #[serde(default)]
    pub movie_id: i32,
    #[serde(default)]
    pub movie_name: String,
    #[serde(default)]
    pub release_year: i32,
}

impl AddToCartRequest {
    /// All four fields are mandatory; a zero or empty value counts as missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id == 0 {
            return Err("userId is required".to_string());
        }
        if self.movie_id == 0 {
            return Err("movieId is required".to_string());
        }
        if self.movie_name.is_empty() {
            return Err("movieName is required".to_string());
        }
        if self.release_year == 0 {
            return Err("releaseYear is required".to_string());
        }
        Ok(())
    }
}
