use crate::{
    db::DbPool,
    error::AppResult,
    models::{AddToCartRequest, CartItem},
    store::cart_store,
};

pub async fn add_to_cart(pool: &DbPool, request: &AddToCartRequest) -> AppResult<i32> {
    let id = cart_store::add_to_cart(pool, request).await?;
    Ok(id)
}

pub async fn get_cart_items(pool: &DbPool, user_id: i32) -> AppResult<Vec<CartItem>> {
    Ok(cart_store::get_cart_items(pool, user_id).await?)
}
