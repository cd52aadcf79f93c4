use axum::extract::State;
use maud::Markup;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

pub async fn get_home(State(state): State<ApiState>) -> ApiResponse<Markup> {
    state.renderer.home_page().await.into_response("500-001")
}
