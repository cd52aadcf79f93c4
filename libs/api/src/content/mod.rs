use axum::{
    extract::{Path, State},
    Json,
};

pub mod response;

use crate::response::{error_message, ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::response::ContentResp;

/// List all content, newest first
#[utoipa::path(
    get,
    path = "/api/content",
    responses(
        (status = 200, description = "List all content successfully", body = [ContentResp])
    )
)]
pub async fn get_contents(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<ContentResp>>> {
    let contents = state
        .repo
        .content
        .find_all()
        .await
        .into_response("500-002")?;

    Ok(Json(contents.into_iter().map(ContentResp::from).collect()))
}

/// Get one content
#[utoipa::path(
    get,
    path = "/api/content/{id}",
    responses(
        (status = 200, description = "Get content successfully", body = ContentResp),
        (status = 404, description = "Content not found")
    ),
    params(
        ("id" = i32, Path, description = "content id"),
    )
)]
pub async fn get_content(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<ContentResp>> {
    let content = state
        .repo
        .content
        .find_by_id(id)
        .await
        .into_response("500-002")?;

    let Some(content) = content else {
        return Err(ApiError::NotFound(error_message("404-001")));
    };

    Ok(Json(ContentResp::from(content)))
}
