//! Products service wiring

use domain_products::{PgProductRepository, ProductService};
use std::sync::Arc;

use crate::state::AppState;

/// Build the product service backed by PostgreSQL
pub fn service(state: &AppState) -> Arc<ProductService<PgProductRepository>> {
    let repository = PgProductRepository::new(state.db.clone());
    Arc::new(ProductService::new(repository))
}
