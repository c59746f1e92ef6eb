pub mod cart_service;
pub mod movie_service;
