use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_client::ClientDto;
use serde_json::{json, Value};

use crate::domain::a003_client::service;
use crate::routes::AppState;

/// POST /api/clients
///
/// Unlike the list endpoints, failures here answer 500 with a fixed message;
/// the cause only goes to the server log.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<ClientDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match service::register(&state.db, dto).await {
        Ok(()) => Ok(Json(json!({ "message": "Client added successfully!" }))),
        Err(e) => {
            tracing::error!("Failed to register client: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to add client." })),
            ))
        }
    }
}
