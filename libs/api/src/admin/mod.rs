use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, StatusCode},
    Form,
};
use maud::Markup;
use render::login_page;
use tracing::{error, info, warn};

pub mod request;

use crate::auth::session_token;
use crate::response::{error_message, ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{
    AddContentParam, DeleteContentParam, LoginParam, UpdateContentParam,
};

type Found<V> = (StatusCode, [(HeaderName, V); 1]);
type FoundWithCookie = (StatusCode, [(HeaderName, String); 2]);

fn redirect_to_admin() -> Found<&'static str> {
    (StatusCode::FOUND, [(header::LOCATION, "/admin")])
}

fn parse_id(id: &str) -> ApiResponse<i32> {
    id.trim()
        .parse()
        .map_err(|_| ApiError::ClientError(error_message("400-001")))
}

/// Dashboard for a valid session, login form otherwise.
pub async fn get_admin(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> ApiResponse<Markup> {
    let logged_in = match session_token(&headers) {
        Some(token) => state.sessions.is_valid(&token).await,
        None => false,
    };

    if !logged_in {
        return Ok(login_page(None));
    }

    state.renderer.admin_page().await.into_response("500-006")
}

pub async fn login(
    State(state): State<ApiState>,
    Form(params): Form<LoginParam>,
) -> Result<FoundWithCookie, (StatusCode, Markup)> {
    if !state.admin.authenticate(&params.username, &params.password) {
        warn!(task = "admin login", username = %params.username, "rejected");
        return Err((
            StatusCode::UNAUTHORIZED,
            login_page(Some(&error_message("401-002"))),
        ));
    }

    let Some(token) = state.sessions.issue().await else {
        error!(task = "admin login", "session expiry is out of range");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            login_page(Some(&error_message("500-007"))),
        ));
    };
    info!(task = "admin login", username = %params.username);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, "/admin".to_string()),
            (header::SET_COOKIE, state.sessions.cookie(&token)),
        ],
    ))
}

pub async fn logout(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> FoundWithCookie {
    if let Some(token) = session_token(&headers) {
        if state.sessions.revoke(&token).await {
            info!(task = "admin logout");
        }
    }

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/admin".to_string()),
            (header::SET_COOKIE, state.sessions.cleared_cookie()),
        ],
    )
}

pub async fn add_content(
    State(state): State<ApiState>,
    Form(params): Form<AddContentParam>,
) -> ApiResponse<Found<&'static str>> {
    let id = state
        .repo
        .content
        .create(&params.title, &params.content, &params.category)
        .await
        .into_response("500-003")?;

    info!(task = "add content", id, category = %params.category);

    Ok(redirect_to_admin())
}

pub async fn update_content(
    State(state): State<ApiState>,
    Form(params): Form<UpdateContentParam>,
) -> ApiResponse<Found<&'static str>> {
    let id = parse_id(&params.id)?;

    state
        .repo
        .content
        .update(id, &params.title, &params.content, &params.category)
        .await
        .into_response("500-004")?;

    info!(task = "update content", id);

    Ok(redirect_to_admin())
}

pub async fn delete_content(
    State(state): State<ApiState>,
    Form(params): Form<DeleteContentParam>,
) -> ApiResponse<Found<&'static str>> {
    let id = parse_id(&params.id)?;

    state
        .repo
        .content
        .delete(id)
        .await
        .into_response("500-005")?;

    info!(task = "delete content", id);

    Ok(redirect_to_admin())
}
