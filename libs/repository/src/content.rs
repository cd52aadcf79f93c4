use chrono::Local;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, RepositoryError, Response};
use entity::prelude::*;

/// Sortable creation timestamp, e.g. `2024-05-29 13:47:20`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug)]
pub struct ContentRepository {
    db: DatabaseConnection,
}

impl ContentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ping(&self) -> Response<()> {
        self.db.ping().await.into_response("in database ping")
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl From<content::Model> for ContentEntity {
    fn from(value: content::Model) -> Self {
        ContentEntity {
            id: value.id,
            title: value.title,
            body: value.content,
            category: value.category,
            created_at: value.created_at,
        }
    }
}

impl ContentRepository {
    /// Stores a new record stamped with the current local time and returns
    /// its id.
    pub async fn create(
        &self,
        title: &str,
        body: &str,
        category: &str,
    ) -> Response<i32> {
        let created_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.insert(title, body, category, created_at).await
    }

    pub(crate) async fn insert(
        &self,
        title: &str,
        body: &str,
        category: &str,
        created_at: String,
    ) -> Response<i32> {
        validate(title, body)?;

        let model = content::ActiveModel {
            id: ActiveValue::not_set(),
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(body.to_string()),
            category: ActiveValue::Set(category.to_string()),
            created_at: ActiveValue::Set(created_at),
        };

        let result = Content::insert(model)
            .exec(&self.db)
            .await
            .into_response("in content insert")?;

        Ok(result.last_insert_id)
    }

    /// Overwrites title, body and category. `id` and `created_at` never
    /// change.
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        body: &str,
        category: &str,
    ) -> Response<()> {
        validate(title, body)?;

        let result = Content::update_many()
            .col_expr(content::Column::Title, Expr::value(title))
            .col_expr(content::Column::Content, Expr::value(body))
            .col_expr(content::Column::Category, Expr::value(category))
            .filter(content::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .into_response("in content update")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Response<()> {
        let result = Content::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in content delete")?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    /// All records, newest first.
    pub async fn find_all(&self) -> Response<Vec<ContentEntity>> {
        let contents = newest_first(Content::find())
            .all(&self.db)
            .await
            .into_response("in content find all")?;

        Ok(contents.into_iter().map(ContentEntity::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<ContentEntity>> {
        let content = Content::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in content find by id")?;

        Ok(content.map(ContentEntity::from))
    }

    pub async fn find_by_category(
        &self,
        category: &str,
    ) -> Response<Vec<ContentEntity>> {
        let contents = newest_first(
            Content::find().filter(content::Column::Category.eq(category)),
        )
        .all(&self.db)
        .await
        .into_response("in content find by category")?;

        Ok(contents.into_iter().map(ContentEntity::from).collect())
    }
}

// records created within the same second keep the newest first by id
fn newest_first(select: Select<Content>) -> Select<Content> {
    select
        .order_by_desc(content::Column::CreatedAt)
        .order_by_desc(content::Column::Id)
}

fn validate(title: &str, body: &str) -> Response<()> {
    if title.trim().is_empty() {
        return Err(RepositoryError::Validation("title is empty".to_string()));
    }
    if body.trim().is_empty() {
        return Err(RepositoryError::Validation("content is empty".to_string()));
    }
    Ok(())
}
