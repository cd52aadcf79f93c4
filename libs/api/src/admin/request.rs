use serde::Deserialize;

// Missing fields decode as empty strings so they fail validation with a 400
// instead of a form rejection.

#[derive(Debug, Deserialize)]
pub struct LoginParam {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddContentParam {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContentParam {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteContentParam {
    #[serde(default)]
    pub id: String,
}
