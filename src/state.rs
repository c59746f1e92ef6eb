use crate::{catalog::CatalogClient, db::DbPool};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub catalog: CatalogClient,
}
