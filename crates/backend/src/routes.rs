use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;

use crate::handlers;

/// Shared state handed to every handler through the router.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Wire every route of the application.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 raw material handlers
        .route("/api/retrieve", get(handlers::a001_raw_material::list_all))
        .route("/api/update", post(handlers::a001_raw_material::import_csv))
        // A002 product handlers
        .route(
            "/api/retrieve/products",
            get(handlers::a002_product::list_all),
        )
        .route(
            "/api/update/product",
            post(handlers::a002_product::import_csv),
        )
        // A003 client handlers
        .route("/api/clients", post(handlers::a003_client::register))
        // P900 product composition handlers
        .route(
            "/api/products/:product_id",
            get(handlers::p900_product_composition::get_composition),
        )
        .with_state(state)
}
