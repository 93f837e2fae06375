//! Post endpoints.

use super::error::ClientError;
use super::NewsroomClient;
use crate::types::{CreatePostRequest, PostsPage, UpdatePostRequest};
use reqwest::Method;

/// Filters and paging for the post list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u32,
    pub page_size: u32,
    pub title: String,
    pub tags: Vec<String>,
    pub user_name: String,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            title: String::new(),
            tags: Vec::new(),
            user_name: String::new(),
        }
    }
}

impl PostQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Query pairs in the shape the API expects; empty filters are omitted,
    /// tags are comma-joined.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        let title = self.title.trim();
        if !title.is_empty() {
            pairs.push(("title", title.to_owned()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        let user_name = self.user_name.trim();
        if !user_name.is_empty() {
            pairs.push(("user_name", user_name.to_owned()));
        }
        pairs
    }
}

impl NewsroomClient {
    /// List every post; the API restricts this to admins.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<PostsPage, ClientError> {
        let request = self
            .request(Method::GET, "/api/posts")
            .query(&query.to_pairs());
        self.execute(request).await
    }

    /// List the authenticated user's posts.
    pub async fn list_my_posts(&self, query: &PostQuery) -> Result<PostsPage, ClientError> {
        let request = self
            .request(Method::GET, "/api/posts/mine")
            .query(&query.to_pairs());
        self.execute(request).await
    }

    pub async fn create_post(
        &self,
        post: &CreatePostRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let request = self.request(Method::POST, "/api/posts").json(post);
        self.execute(request).await
    }

    pub async fn update_post(
        &self,
        id: i64,
        post: &UpdatePostRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/api/posts/{id}"))
            .json(post);
        self.execute(request).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/posts/{id}"));
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_always_carry_paging() {
        let query = PostQuery::new(3, 25);
        assert_eq!(
            query.to_pairs(),
            vec![("page", "3".to_owned()), ("pageSize", "25".to_owned())]
        );
    }

    #[test]
    fn tags_are_comma_joined_in_selection_order() {
        let query = PostQuery {
            tags: vec!["ai".into(), "web".into()],
            ..PostQuery::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("tags", "ai,web".to_owned())));
    }

    #[test]
    fn blank_filters_are_omitted() {
        let query = PostQuery {
            title: "   ".into(),
            user_name: String::new(),
            ..PostQuery::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.iter().all(|(key, _)| *key != "title"));
        assert!(pairs.iter().all(|(key, _)| *key != "user_name"));
    }

    #[test]
    fn filters_are_trimmed() {
        let query = PostQuery {
            title: "  launch  ".into(),
            user_name: " ana ".into(),
            ..PostQuery::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("title", "launch".to_owned())));
        assert!(pairs.contains(&("user_name", "ana".to_owned())));
    }
}
