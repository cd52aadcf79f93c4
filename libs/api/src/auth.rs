use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{
    authorization::Bearer, Authorization, Cookie, HeaderMapExt as _,
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{response::error_message, ApiError, ApiState};

const SESSION_COOKIE: &str = "rb_session";

/// Admin sessions, keyed by token.
///
/// Each successful login gets its own token, so logging in from one browser
/// never authorizes another.
#[derive(Clone, Debug)]
pub struct Sessions {
    tokens: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    ttl: Duration,
    secure_cookie: bool,
}

impl Sessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Arc::default(),
            ttl,
            secure_cookie: false,
        }
    }

    /// Marks the session cookie `Secure`, for deployments behind HTTPS.
    pub fn with_secure_cookie(mut self, secure_cookie: bool) -> Self {
        self.secure_cookie = secure_cookie;
        self
    }

    /// Returns `None` when the expiry does not fit in a timestamp.
    pub async fn issue(&self) -> Option<String> {
        let token = Uuid::new_v4().simple().to_string();
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl)?;

        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token.clone(), expires_at);

        Some(token)
    }

    /// `Set-Cookie` value carrying `token`.
    pub fn cookie(&self, token: &str) -> String {
        self.with_attributes(format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
            self.ttl.num_seconds().max(0)
        ))
    }

    /// `Set-Cookie` value that clears the session cookie.
    pub fn cleared_cookie(&self) -> String {
        self.with_attributes(format!(
            "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0"
        ))
    }

    fn with_attributes(&self, cookie: String) -> String {
        if self.secure_cookie {
            format!("{cookie}; Secure")
        } else {
            cookie
        }
    }

    pub async fn is_valid(&self, token: &str) -> bool {
        let tokens = self.tokens.read().await;
        tokens
            .get(token)
            .is_some_and(|expires_at| *expires_at > Utc::now())
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }
}

/// Token from `Authorization: Bearer` or, failing that, the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) =
        headers.typed_get::<Authorization<Bearer>>()
    {
        return Some(bearer.token().to_string());
    }

    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
}

pub async fn auth(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = session_token(req.headers()) else {
        return Err(ApiError::AuthError(error_message("401-001")));
    };

    if state.sessions.is_valid(&token).await {
        return Ok(next.run(req).await);
    }

    Err(ApiError::AuthError("Session is invalid or expired".to_string()))
}
