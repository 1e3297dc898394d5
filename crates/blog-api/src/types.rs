//! Wire types for the blog service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as returned by the blog service
///
/// `published_at` is `None` for drafts; readers of the public site never see
/// those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a post
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for updating an existing post
#[derive(Debug, Clone, Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
    pub edited_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialization() {
        let json = r#"{
            "id": 7,
            "slug": "hello-world",
            "title": "Hello World",
            "content": "First post.",
            "published_at": "2024-03-01T12:00:00Z",
            "view_count": 42,
            "created_at": "2024-02-28T09:30:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.view_count, 42);
        assert!(post.published_at.is_some());
        assert!(post.image_url.is_none());
        assert!(post.edited_at.is_none());
    }

    #[test]
    fn test_draft_has_no_published_at() {
        let json = r#"{
            "id": 8,
            "slug": "wip",
            "title": "Work in progress",
            "content": "Not done yet.",
            "published_at": null,
            "created_at": "2024-03-02T10:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.published_at.is_none());
        assert_eq!(post.view_count, 0);
    }

    #[test]
    fn test_new_post_serialization() {
        let post = NewPost {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            content: "Body text.".to_string(),
            published_at: None,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["slug"], "hello");
        assert!(json["published_at"].is_null());
    }
}
