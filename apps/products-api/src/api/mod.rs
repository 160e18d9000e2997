//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let service = products::service(state);

    Router::new()
        .nest("/products", domain_products::handlers::router(service.clone()))
        .nest("/pdf", domain_products::handlers::pdf_router(service))
        .merge(health::router(state.clone()))
}
