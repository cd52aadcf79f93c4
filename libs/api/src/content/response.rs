use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON form of one record. Strings are JSON-escaped by serde, never
/// HTML-escaped.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContentResp {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
}

impl From<ContentEntity> for ContentResp {
    fn from(value: ContentEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.body,
            category: value.category,
            created_at: value.created_at,
        }
    }
}
