use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};

use crate::{
    error::{AppError, AppResult},
    models::{AddToCartRequest, CartItem},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart/add", post(add_to_cart))
        .route("/cart/items/{user_id}", get(cart_items))
}

#[utoipa::path(
    post,
    path = "/cart/add",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Generated cart line id", body = i32),
        (status = 400, description = "Missing or zero-valued field"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> AppResult<Json<i32>> {
    // Map the bind failure to 400 rather than axum's default 422.
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;
    payload.validate().map_err(AppError::BadRequest)?;

    let id = cart_service::add_to_cart(&state.pool, &payload).await?;
    Ok(Json(id))
}

#[utoipa::path(
    get,
    path = "/cart/items/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart lines for the user", body = Vec<CartItem>),
        (status = 400, description = "Non-numeric user id"),
    ),
    tag = "Cart"
)]
pub async fn cart_items(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<CartItem>>> {
    let items = cart_service::get_cart_items(&state.pool, user_id).await?;
    Ok(Json(items))
}
