use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{AddToCartRequest, CartItem, Movie},
    routes::{cart, health, movies, params},
    store::movie_store::IngestOutcome,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        movies::list_movies,
        movies::get_movie,
        movies::filter_movies,
        movies::ingest_movies,
        cart::add_to_cart,
        cart::cart_items,
    ),
    components(
        schemas(
            Movie,
            CartItem,
            AddToCartRequest,
            IngestOutcome,
            health::Greeting,
            params::FilterParams,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Movies", description = "Catalog browsing and ingestion"),
        (name = "Cart", description = "Rental cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<utoipa::openapi::OpenApi> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
