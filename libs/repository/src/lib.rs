use std::time::Duration;

use content::ContentRepository;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use sea_orm::DbErr;

mod active_models;
pub mod content;

const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Clone, Debug)]
pub struct Repository {
    pub content: ContentRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("content {0} was not found")]
    NotFound(i32),

    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

pub type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl Repository {
    pub async fn new(db_url: &str, max_connections: u32) -> Response<Self> {
        let db = init_db(db_url, max_connections).await?;

        Ok(Self {
            content: ContentRepository::new(db),
        })
    }
}

async fn init_db(
    db_url: &str,
    max_connections: u32,
) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(max_connections.max(1))
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    // every pooled connection to an in-memory sqlite database would open
    // its own empty database
    if is_in_memory(db_url) {
        opt.max_connections(1)
            .idle_timeout(IN_MEMORY_LIFETIME)
            .max_lifetime(IN_MEMORY_LIFETIME);
    }

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    info!(task = "database ready", url = db_url);

    Ok(db)
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}
