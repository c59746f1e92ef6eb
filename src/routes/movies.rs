use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    routes::params::{FilterAttribute, FilterParams},
    services::movie_service,
    state::AppState,
    store::movie_store::IngestOutcome,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/filter", get(filter_movies))
        .route("/movie", post(ingest_movies))
        .route("/movie/{id}", get(get_movie))
}

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "Full catalog", body = Vec<Movie>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = movie_service::get_movies(&state.pool).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/movie/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Movie not found"),
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let movie = movie_service::get_movie(&state.pool, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    get,
    path = "/movies/filter",
    params(
        ("searchType" = String, Query, description = "One of genre, title, description, imdbCode, year"),
        ("searchText" = String, Query, description = "Substring to match, or the year itself")
    ),
    responses(
        (status = 200, description = "Matching movies", body = Vec<Movie>),
        (status = 400, description = "Empty or unsupported filter"),
    ),
    tag = "Movies"
)]
pub async fn filter_movies(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<Vec<Movie>>> {
    if params.search_type.is_empty() || params.search_text.is_empty() {
        return Err(AppError::BadRequest(
            "searchType or searchText is empty".to_string(),
        ));
    }
    let attribute = FilterAttribute::parse(&params.search_type).ok_or_else(|| {
        AppError::BadRequest(format!("unsupported searchType {:?}", params.search_type))
    })?;

    let movies = movie_service::filtered_movies(&state.pool, attribute, &params.search_text).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/movie",
    responses(
        (status = 200, description = "Ingestion report", body = IngestOutcome),
        (status = 500, description = "Catalog unreachable or undecodable"),
    ),
    tag = "Movies"
)]
pub async fn ingest_movies(State(state): State<AppState>) -> AppResult<Json<IngestOutcome>> {
    let outcome = movie_service::ingest_movies(&state.pool, &state.catalog).await?;
    Ok(Json(outcome))
}
