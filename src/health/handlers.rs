use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde_json::json;
use tracing::error;

use crate::common::{app_state::AppState, server_error::ServerError};

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn health_detailed(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let platform = true;

    let db_status = match state.get_questions().ping().await {
        Ok(_) => true,
        Err(e) => {
            error!("Failed database health check: {}", e);
            false
        }
    };

    let json = json!({
        "platform": platform,
        "database": db_status,
    });

    Ok((StatusCode::OK, Json(json)))
}
