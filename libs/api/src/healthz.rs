use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::ApiState;

/// 200 while the database answers, 503 otherwise.
pub(super) async fn get_health(State(state): State<ApiState>) -> StatusCode {
    match state.repo.content.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!(task = "healthz", error = e.to_string());
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
