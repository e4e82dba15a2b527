use crate::category::Category;
use crate::common::query;
use crate::user::User;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(JsonSchema, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub likes: u32,
    pub is_liked: bool,
}

impl Comment {
    pub fn new(author: User, content: impl Into<String>) -> Self {
        Comment {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            created_at: chrono::Utc::now(),
            likes: 0,
            is_liked: false,
        }
    }

    fn toggle_like(&mut self) {
        toggle_like_counter(&mut self.is_liked, &mut self.likes);
    }
}

#[derive(JsonSchema, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: Category,
    pub image_url: Option<String>,
    pub likes: u32,
    pub is_liked: bool,
    pub is_saved: bool,
    pub comments: Vec<Comment>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub tags: Vec<String>,
}

impl Story {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: User,
        category: Category,
    ) -> Self {
        Story {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author,
            category,
            image_url: None,
            likes: 0,
            is_liked: false,
            is_saved: false,
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
            tags: Vec::new(),
        }
    }

    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub(crate) fn toggle_like(&mut self) {
        toggle_like_counter(&mut self.is_liked, &mut self.likes);
    }

    /// Flips the saved flag and returns the new value.
    pub(crate) fn toggle_saved(&mut self) -> bool {
        self.is_saved = !self.is_saved;
        self.is_saved
    }

    pub(crate) fn add_comment(&mut self, author: User, content: String) -> Uuid {
        let comment = Comment::new(author, content);
        let comment_id = comment.id;
        self.comments.push(comment);
        comment_id
    }

    pub(crate) fn toggle_comment_like(&mut self, comment_id: &Uuid) -> bool {
        match self.comments.iter_mut().find(|c| c.id == *comment_id) {
            Some(comment) => {
                comment.toggle_like();
                true
            }
            None => false,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| query::text_exact_matches(t, tag))
    }
}

// Liking a story at u32::MAX changes nothing. Unliking saturates at zero.
fn toggle_like_counter(is_liked: &mut bool, likes: &mut u32) {
    if *is_liked {
        *is_liked = false;
        *likes = likes.saturating_sub(1);
    } else if let Some(next) = likes.checked_add(1) {
        *is_liked = true;
        *likes = next;
    }
}
