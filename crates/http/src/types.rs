//! Wire types for the newsroom REST API.

use serde::{Deserialize, Deserializer, Serialize};

/// The `{status, ...}` wrapper every API response uses.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success {
        #[serde(default)]
        message: String,
        data: T,
    },
    Error {
        #[serde(default)]
        message: String,
        #[serde(default)]
        errors: Option<serde_json::Value>,
    },
}

/// Credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token bundle returned by a successful login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub expires_at: String,
    pub name: String,
    pub role: String,
}

/// One page of posts from the list endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PostsPage {
    pub items: Vec<PostRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// A post as the API returns it: author and category arrive as nested
/// relation objects, the ID as either a JSON number or a decimal string.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PostRecord {
    #[serde(deserialize_with = "post_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub users: Option<AuthorRef>,
    #[serde(default, rename = "categori_posts")]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AuthorRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: String,
}

/// Flattened row used by the UI table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub created_at: Option<String>,
    pub content: String,
    pub author_name: String,
    pub category_name: String,
    pub tags: String,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            status: record.status,
            created_at: record.created_at,
            content: record.content,
            author_name: record.users.map(|author| author.name).unwrap_or_default(),
            category_name: record
                .category
                .map(|category| category.name)
                .unwrap_or_default(),
            tags: record.tags.unwrap_or_default(),
        }
    }
}

/// Body for `POST /api/posts`. `published` is only sent when the author
/// asked to publish immediately; `category_name` only when provided.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Body for `PUT /api/posts/:id`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub published: bool,
}

// IDs are numeric on the wire in principle, but backends that serialize
// bigints emit them as strings. Accept both, hold an i64.
fn post_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(raw) => raw.trim().parse().map_err(serde::de::Error::custom),
    }
}
