//! Blog categories, posts and comments
//!
//! Plain aggregates around the page content. Only the status transitions
//! carry rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::{ModelError, ModelResult};

/// Localized name and alias of a category or post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogTranslation {
    pub title: String,
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: Uuid,
    /// Keyed by language code
    pub translations: BTreeMap<String, BlogTranslation>,
    pub created_at: DateTime<Utc>,
}

impl BlogCategory {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            translations: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }
}

impl Default for BlogCategory {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub status: PostStatus,
    pub translations: BTreeMap<String, BlogTranslation>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a draft post
    pub fn draft(category_id: Uuid, author_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category_id,
            author_id,
            status: PostStatus::Draft,
            translations: BTreeMap::new(),
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn publish(&mut self) -> ModelResult<()> {
        if self.status == PostStatus::Published {
            return Err(ModelError::InvalidTransition {
                entity: "post",
                action: "publish",
                status: self.status.to_string(),
            });
        }
        let now = Utc::now();
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn unpublish(&mut self) -> ModelResult<()> {
        if self.status == PostStatus::Draft {
            return Err(ModelError::InvalidTransition {
                entity: "post",
                action: "unpublish",
                status: self.status.to_string(),
            });
        }
        self.status = PostStatus::Draft;
        self.published_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStatus::Pending => write!(f, "pending"),
            CommentStatus::Approved => write!(f, "approved"),
            CommentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    /// Parent comment for replies
    pub parent_id: Option<Uuid>,
    pub author_name: String,
    pub body: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a pending top-level comment
    pub fn new(post_id: Uuid, author_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            parent_id: None,
            author_name: author_name.into(),
            body: body.into(),
            status: CommentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Create a pending reply to `parent` on `post_id`
    pub fn reply_to(
        parent: &Comment,
        post_id: Uuid,
        author_name: impl Into<String>,
        body: impl Into<String>,
    ) -> ModelResult<Self> {
        if parent.post_id != post_id {
            return Err(ModelError::ReplyPostMismatch);
        }
        let mut reply = Self::new(post_id, author_name, body);
        reply.parent_id = Some(parent.id);
        Ok(reply)
    }

    pub fn approve(&mut self) -> ModelResult<()> {
        self.moderate("approve", CommentStatus::Approved)
    }

    pub fn reject(&mut self) -> ModelResult<()> {
        self.moderate("reject", CommentStatus::Rejected)
    }

    fn moderate(&mut self, action: &'static str, to: CommentStatus) -> ModelResult<()> {
        if self.status != CommentStatus::Pending {
            return Err(ModelError::InvalidTransition {
                entity: "comment",
                action,
                status: self.status.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_publish_cycle() {
        let mut post = BlogPost::draft(Uuid::new_v4(), Uuid::new_v4());
        assert!(post.published_at.is_none());

        post.publish().unwrap();
        assert_eq!(post.status, PostStatus::Published);
        assert!(post.published_at.is_some());
        assert!(post.publish().is_err());

        post.unpublish().unwrap();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn test_comment_moderated_once() {
        let mut comment = Comment::new(Uuid::new_v4(), "ana", "Great match report");
        comment.approve().unwrap();
        let err = comment.reject().unwrap_err();
        assert_eq!(err.to_string(), "Cannot reject a comment that is approved");
    }

    #[test]
    fn test_reply_must_share_post() {
        let post_id = Uuid::new_v4();
        let parent = Comment::new(post_id, "ana", "First");

        let reply = Comment::reply_to(&parent, post_id, "ben", "Agreed").unwrap();
        assert_eq!(reply.parent_id, Some(parent.id));
        assert_eq!(reply.status, CommentStatus::Pending);

        assert_eq!(
            Comment::reply_to(&parent, Uuid::new_v4(), "ben", "Elsewhere").unwrap_err(),
            ModelError::ReplyPostMismatch
        );
    }
}
