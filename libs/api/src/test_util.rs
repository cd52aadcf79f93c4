use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt as _;
use repository::Repository;
use tower::ServiceExt as _;

use crate::{router, ApiState, Credentials, Sessions};

pub(crate) const USERNAME: &str = "admin";
pub(crate) const PASSWORD: &str = "correct horse";

pub(crate) async fn test_app() -> (ApiState, Router) {
    let repository = Repository::new("sqlite::memory:", 1).await.unwrap();
    let state = ApiState::new(
        repository,
        Sessions::new(chrono::Duration::minutes(10)),
        Credentials::new(USERNAME.to_string(), PASSWORD.to_string()),
    );
    let router = router(state.clone(), Path::new("static"));

    (state, router)
}

pub(crate) async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub(crate) fn form(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(token) = token {
        request = request.header(header::COOKIE, format!("rb_session={token}"));
    }
    request.body(Body::from(body.to_string())).unwrap()
}

/// Logs in and returns the session token from the cookie.
pub(crate) async fn login(router: &Router) -> String {
    let response = router
        .clone()
        .oneshot(form(
            "/admin/login",
            "username=admin&password=correct+horse",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("rb_session="))
        .unwrap()
        .to_string()
}
