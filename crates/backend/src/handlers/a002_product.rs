use axum::extract::{Multipart, State};
use axum::Json;
use contracts::domain::common::ImportResult;
use serde_json::{json, Value};

use crate::domain::a002_product::{csv_import, service};
use crate::routes::AppState;
use crate::shared::error::AppError;

/// GET /api/retrieve/products
pub async fn list_all(State(state): State<AppState>) -> Json<Value> {
    match service::list_all(&state.db).await {
        Ok(items) => Json(json!(items)),
        Err(e) => {
            tracing::error!("Failed to list products: {e}");
            Json(json!({ "error": e.to_string() }))
        }
    }
}

/// POST /api/update/product
pub async fn import_csv(State(state): State<AppState>, mut multipart: Multipart) -> Json<Value> {
    match upload_and_import(&state, &mut multipart).await {
        Ok(result) => {
            tracing::info!(
                "Product import: {} rows submitted, {} ids not found",
                result.submitted_count,
                result.not_found_ids.len()
            );
            Json(json!({ "message": "Update successful" }))
        }
        Err(e) => {
            tracing::error!("Product import failed: {e}");
            Json(json!({ "error": e.to_string() }))
        }
    }
}

async fn upload_and_import(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<ImportResult, AppError> {
    let bytes = super::read_file_field(multipart).await?;
    csv_import::import(&state.db, &bytes).await
}
