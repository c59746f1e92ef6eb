pub mod cart_store;
pub mod movie_store;
