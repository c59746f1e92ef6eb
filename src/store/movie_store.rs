use serde::Serialize;
use utoipa::ToSchema;

use crate::{db::DbPool, models::Movie, routes::params::FilterAttribute};

const SELECT_MOVIES: &str =
    "SELECT id, title, release_year, genre, description, imdb_code FROM movies";
const SELECT_MOVIES_BY_YEAR: &str =
    "SELECT id, title, release_year, genre, description, imdb_code FROM movies \
     WHERE release_year = $1";
const SELECT_MOVIE_BY_ID: &str =
    "SELECT id, title, release_year, genre, description, imdb_code FROM movies WHERE id = $1";
const INSERT_MOVIE: &str = "INSERT INTO movies (id, title, description, genre, release_year, \
     imdb_code) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";

/// Result of a best-effort bulk insert: how many rows went in, and the ids of
/// the movies that did not (duplicates included).
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct IngestOutcome {
    pub saved: usize,
    pub failed: Vec<i32>,
}

/// Insert one movie, keeping its externally assigned id as the primary key.
/// A duplicate id violates the PK constraint and surfaces here as an error.
pub async fn save(pool: &DbPool, movie: &Movie) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(INSERT_MOVIE)
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .bind(&movie.imdb_code)
        .fetch_one(pool)
        .await?;

    tracing::debug!(movie_id = id, "movie inserted");
    Ok(id)
}

/// Insert each movie sequentially, best effort. No transaction, no rollback:
/// a failed row is logged and reported in the outcome, never propagated.
pub async fn save_all(pool: &DbPool, movies: &[Movie]) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for movie in movies {
        match save(pool, movie).await {
            Ok(_) => outcome.saved += 1,
            Err(err) => {
                tracing::warn!(movie_id = movie.id, error = %err, "failed to save movie");
                outcome.failed.push(movie.id);
            }
        }
    }
    outcome
}

pub async fn get_movies(pool: &DbPool) -> Result<Vec<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(SELECT_MOVIES).fetch_all(pool).await
}

pub async fn fetch_movies_by_year(pool: &DbPool, year: i32) -> Result<Vec<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(SELECT_MOVIES_BY_YEAR)
        .bind(year)
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring match on one attribute. The column name comes
/// from the closed [`FilterAttribute`] enum, never from caller text.
pub async fn fetch_movies_by_search(
    pool: &DbPool,
    attribute: FilterAttribute,
    text: &str,
) -> Result<Vec<Movie>, sqlx::Error> {
    let sql = format!("{SELECT_MOVIES} WHERE {} ILIKE $1", attribute.as_column());
    sqlx::query_as::<_, Movie>(&sql)
        .bind(format!("%{text}%"))
        .fetch_all(pool)
        .await
}

pub async fn get_movie_by(pool: &DbPool, id: i32) -> Result<Option<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(SELECT_MOVIE_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}
