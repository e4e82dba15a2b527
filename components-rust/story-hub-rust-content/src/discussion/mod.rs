use crate::category::Category;
use crate::user::User;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(JsonSchema, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionMessage {
    pub id: Uuid,
    pub content: String,
    pub author: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub is_reply: bool,
    pub reply_to_message_id: Option<Uuid>,
}

impl DiscussionMessage {
    pub fn new(author: User, content: impl Into<String>) -> Self {
        DiscussionMessage {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            created_at: chrono::Utc::now(),
            is_reply: false,
            reply_to_message_id: None,
        }
    }
}

#[derive(JsonSchema, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: User,
    pub category: Category,
    pub messages: Vec<DiscussionMessage>,
    /// Seeded counter, independent of message authors.
    pub participants: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_activity: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

impl Discussion {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: User,
        category: Category,
        participants: u32,
    ) -> Self {
        let now = chrono::Utc::now();
        Discussion {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            author,
            category,
            messages: vec![],
            participants,
            created_at: now,
            last_activity: now,
            is_active: true,
        }
    }

    pub fn with_messages(mut self, messages: Vec<DiscussionMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub(crate) fn add_message(&mut self, author: User, content: String) -> Uuid {
        let message = DiscussionMessage::new(author, content);
        let message_id = message.id;
        if self.last_activity < message.created_at {
            self.last_activity = message.created_at;
        }
        self.messages.push(message);
        message_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_discussion() -> Discussion {
        Discussion::new(
            "AI в творческих профессиях",
            "Как искусственный интеллект влияет на творческие процессы",
            User::new("Дмитрий Волков"),
            Category::Technology,
            31,
        )
    }

    #[test]
    fn test_discussion_new() {
        let discussion = create_test_discussion();
        assert!(discussion.messages.is_empty());
        assert!(discussion.is_active);
        assert_eq!(discussion.participants, 31);
        assert_eq!(discussion.created_at, discussion.last_activity);
    }

    #[test]
    fn test_add_message() {
        let mut discussion = create_test_discussion();
        let initial_last_activity = discussion.last_activity;
        let author = User::new("Ольга Иванова");

        let message_id1 = discussion.add_message(author.clone(), "Привет".to_string());
        let message_id2 = discussion.add_message(author.clone(), "Ещё раз".to_string());

        assert_eq!(discussion.messages.len(), 2);
        assert_eq!(discussion.messages[0].id, message_id1);
        assert_eq!(discussion.messages[1].id, message_id2);
        assert_eq!(discussion.messages[0].author, author);
        assert!(!discussion.messages[0].is_reply);
        assert!(discussion.messages[0].reply_to_message_id.is_none());
        assert!(discussion.last_activity >= initial_last_activity);
        assert!(discussion.last_activity >= discussion.created_at);
        assert_eq!(discussion.participants, 31);
    }

    #[test]
    fn test_last_activity_never_moves_back() {
        let mut discussion = create_test_discussion();
        let future = chrono::Utc::now() + chrono::Duration::hours(1);
        discussion.last_activity = future;

        discussion.add_message(User::new("u"), "hi".to_string());

        assert_eq!(discussion.last_activity, future);
        assert_eq!(discussion.messages.len(), 1);
    }
}
