use crate::{
    db::DbPool,
    models::{AddToCartRequest, CartItem},
};

const INSERT_CART_LINE: &str = "INSERT INTO movie_carts (user_id, movie_id, movie_name, \
     release_year) VALUES ($1, $2, $3, $4) RETURNING id";
const SELECT_CART_LINES: &str =
    "SELECT id, user_id, movie_id, movie_name, release_year FROM movie_carts WHERE user_id = $1";

/// Insert one cart line and return the generated id.
pub async fn add_to_cart(pool: &DbPool, request: &AddToCartRequest) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(INSERT_CART_LINE)
        .bind(request.user_id)
        .bind(request.movie_id)
        .bind(&request.movie_name)
        .bind(request.release_year)
        .fetch_one(pool)
        .await?;

    tracing::debug!(cart_id = id, user_id = request.user_id, "cart line inserted");
    Ok(id)
}

/// List a user's cart lines. An unknown user yields an empty list, not an error.
pub async fn get_cart_items(pool: &DbPool, user_id: i32) -> Result<Vec<CartItem>, sqlx::Error> {
    sqlx::query_as::<_, CartItem>(SELECT_CART_LINES)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
