use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::projections::p900_product_composition::repository::{self, CompositionLine};
use crate::routes::AppState;

/// GET /api/products/:product_id
pub async fn get_composition(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<CompositionLine>>, (StatusCode, Json<Value>)> {
    match repository::composition(&state.db, &product_id).await {
        Ok(lines) => Ok(Json(lines)),
        Err(e) => {
            tracing::error!("Failed to fetch product composition: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred while fetching product data." })),
            ))
        }
    }
}
