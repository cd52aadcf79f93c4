use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context as _;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use render::Renderer;
use repository::Repository;
use toml::{map::Map, Value};
use tower_http::{services::ServeDir, trace::TraceLayer};
use sha2::{Digest as _, Sha256};
use subtle::ConstantTimeEq as _;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use auth::Sessions;

pub mod admin;
mod auth;
pub mod content;
pub mod healthz;
pub mod home;
pub mod not_found;
mod response;
#[cfg(test)]
mod test_util;

#[derive(Debug)]
pub enum ApiError {
    AuthError(String),
    ClientError(String),
    NotFound(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    renderer: Renderer,
    sessions: Sessions,
    admin: Credentials,
}

impl ApiState {
    pub fn new(repo: Repository, sessions: Sessions, admin: Credentials) -> Self {
        Self {
            renderer: Renderer::new(repo.content.clone()),
            repo,
            sessions,
            admin,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub session: Session,
}

#[derive(Clone, Debug)]
pub struct Server {
    pub address: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

/// Upper bound for `[session] ttl_secs`, 30 days.
pub const MAX_SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct Session {
    pub ttl_secs: i64,
    pub secure_cookie: bool,
}

#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        // both fields are always compared
        let username_ok = constant_time_eq(&self.username, username);
        let password_ok = constant_time_eq(&self.password, password);
        !self.username.is_empty() && username_ok & password_ok
    }
}

/// Compares SHA-256 digests in constant time, so neither the content nor the
/// length of the stored value leaks through timing.
fn constant_time_eq(expected: &str, provided: &str) -> bool {
    let expected = Sha256::digest(expected.as_bytes());
    let provided = Sha256::digest(provided.as_bytes());
    expected.ct_eq(&provided).into()
}

#[derive(OpenApi)]
#[openapi(
    paths(content::get_contents, content::get_content),
    components(schemas(content::response::ContentResp)),
    tags(
        (name = "content", description = "Read access to published content")
    )
)]
struct ApiDoc;

pub fn serve(
    repository: Repository,
    config: &Config,
    credentials: Credentials,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let ttl = chrono::Duration::try_seconds(config.session.ttl_secs)
        .context("session ttl is out of range")?;
    let sessions =
        Sessions::new(ttl).with_secure_cookie(config.session.secure_cookie);
    let state = ApiState::new(repository, sessions, credentials);

    Ok(router(state, &config.server.static_dir))
}

pub fn router(state: ApiState, static_dir: &std::path::Path) -> Router {
    // admin mutations
    let admin_router = Router::new()
        .route("/admin/add-content", post(admin::add_content))
        .route("/admin/update-content", post(admin::update_content))
        .route("/admin/delete-content", post(admin::delete_content))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth,
        ))
        .route("/admin", get(admin::get_admin))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout));

    // content
    let content_router = Router::new()
        .route("/api/content", get(content::get_contents))
        .route("/api/content/:id", get(content::get_content));

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/", get(home::get_home))
        .route("/healthz", get(healthz::get_health))
        .merge(content_router)
        .merge(admin_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let server = config
        .get("server")
        .context("failed to get server config")?;

    let address = server
        .get("address")
        .context("failed to load address config")?
        .as_str()
        .context("failed to parse address config")?
        .parse()
        .context("failed to parse address config")?;

    let port = server
        .get("port")
        .context("failed to load port config")?
        .as_integer()
        .context("failed to parse port config")?;

    let static_dir = server
        .get("static_dir")
        .and_then(Value::as_str)
        .unwrap_or("static");

    let database = config
        .get("database")
        .context("failed to get database config")?;

    let url = database
        .get("url")
        .context("failed to load url config")?
        .as_str()
        .context("failed to parse url config")?
        .to_string();

    let max_connections = database
        .get("max_connections")
        .and_then(Value::as_integer)
        .unwrap_or(5);

    let session = config.get("session");

    let ttl_secs = session
        .and_then(|session| session.get("ttl_secs"))
        .and_then(Value::as_integer)
        .unwrap_or(60 * 60);
    anyhow::ensure!(
        (1..=MAX_SESSION_TTL_SECS).contains(&ttl_secs),
        "ttl_secs must be between 1 and {MAX_SESSION_TTL_SECS}"
    );

    let secure_cookie = session
        .and_then(|session| session.get("secure_cookie"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(Config {
        server: Server {
            address,
            port: u16::try_from(port).context("port is out of range")?,
            static_dir: PathBuf::from(static_dir),
        },
        database: Database {
            url,
            max_connections: u32::try_from(max_connections)
                .context("max_connections is out of range")?,
        },
        session: Session {
            ttl_secs,
            secure_cookie,
        },
    })
}

pub fn init_credentials(
    secrets: &Map<String, Value>,
) -> anyhow::Result<Credentials> {
    let username = secrets
        .get("ADMIN_USERNAME")
        .context("ADMIN_USERNAME was not found")?
        .as_str()
        .context("failed to parse ADMIN_USERNAME")?
        .to_string();

    let password = secrets
        .get("ADMIN_PASSWORD")
        .context("ADMIN_PASSWORD was not found")?
        .as_str()
        .context("failed to parse ADMIN_PASSWORD")?
        .to_string();

    anyhow::ensure!(!username.is_empty(), "ADMIN_USERNAME is empty");
    anyhow::ensure!(!password.is_empty(), "ADMIN_PASSWORD is empty");

    Ok(Credentials::new(username, password))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_init_config() {
        // Arrange
        let config = toml::from_str::<Map<String, Value>>(
            r#"
            [server]
            address = "127.0.0.1"
            port = 8080

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();

        // Act
        let config = init_config(&config).unwrap();

        // Assert
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.session.ttl_secs, 3600);
        assert!(!config.session.secure_cookie);
    }

    #[test]
    fn test_init_config_session() {
        // Arrange
        let config = toml::from_str::<Map<String, Value>>(
            r#"
            [server]
            address = "127.0.0.1"
            port = 8080

            [database]
            url = "sqlite::memory:"

            [session]
            ttl_secs = 600
            secure_cookie = true
            "#,
        )
        .unwrap();

        // Act
        let config = init_config(&config).unwrap();

        // Assert
        assert_eq!(config.session.ttl_secs, 600);
        assert!(config.session.secure_cookie);
    }

    #[test]
    fn test_init_config_rejects_out_of_range_ttl() {
        for ttl_secs in ["10000000000000", "0", "-60"] {
            // Arrange
            let config = toml::from_str::<Map<String, Value>>(&format!(
                "[server]\naddress = \"0.0.0.0\"\nport = 80\n\
                 [database]\nurl = \"sqlite::memory:\"\n\
                 [session]\nttl_secs = {ttl_secs}\n"
            ))
            .unwrap();

            // Act
            let err = init_config(&config).unwrap_err();

            // Assert
            assert_eq!(
                err.to_string(),
                format!("ttl_secs must be between 1 and {MAX_SESSION_TTL_SECS}"),
                "{ttl_secs}"
            );
        }
    }

    #[test]
    fn test_init_config_missing_database() {
        // Arrange
        let config = toml::from_str::<Map<String, Value>>(
            "[server]\naddress = \"0.0.0.0\"\nport = 80\n",
        )
        .unwrap();

        // Act
        let err = init_config(&config).unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "failed to get database config");
    }

    #[test]
    fn test_init_credentials() {
        // Arrange
        let secrets = toml::from_str::<Map<String, Value>>(
            "ADMIN_USERNAME = \"editor\"\nADMIN_PASSWORD = \"\"\n",
        )
        .unwrap();

        // Act
        let err = init_credentials(&secrets).unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "ADMIN_PASSWORD is empty");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        // Arrange
        let credentials =
            Credentials::new("editor".to_string(), "hunter2".to_string());

        // Act
        let debug = format!("{credentials:?}");

        // Assert
        assert!(debug.contains("editor"));
        assert!(!debug.contains("hunter2"));
        assert!(credentials.authenticate("editor", "hunter2"));
        assert!(!credentials.authenticate("editor", "hunter"));
    }

    #[test]
    fn test_authenticate() {
        // Arrange
        let credentials =
            Credentials::new("editor".to_string(), "hunter2".to_string());
        let empty = Credentials::new(String::new(), String::new());

        // Act & Assert
        assert!(credentials.authenticate("editor", "hunter2"));
        assert!(!credentials.authenticate("Editor", "hunter2"));
        assert!(!credentials.authenticate("editor", "hunter22"));
        assert!(!credentials.authenticate("", ""));
        assert!(!empty.authenticate("", ""));
        assert!(constant_time_eq("same", "same"));
        assert!(!constant_time_eq("same", "same "));
    }
}
