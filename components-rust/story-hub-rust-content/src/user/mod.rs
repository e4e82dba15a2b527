use email_address::EmailAddress;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A user profile. Stories, comments, discussions and messages embed a copy
/// of their author taken at creation time.
#[derive(JsonSchema, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Symbolic icon name.
    pub avatar: Option<String>,
    /// Locally picked image, wins over `avatar` when present.
    pub avatar_data: Option<Vec<u8>>,
    pub bio: Option<String>,
    pub saved_stories: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// What to render for a user's avatar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Avatar<'a> {
    Image(&'a [u8]),
    Icon(&'a str),
}

/// Edited profile fields. Empty `email`/`bio` clear the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: None,
            avatar: None,
            avatar_data: None,
            bio: None,
            saved_stories: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn with_profile(name: &str, email: &str, avatar: &str, bio: &str) -> Self {
        User {
            email: Some(email.to_string()),
            avatar: Some(avatar.to_string()),
            bio: Some(bio.to_string()),
            ..User::new(name)
        }
    }

    pub fn avatar(&self) -> Option<Avatar<'_>> {
        match (&self.avatar_data, &self.avatar) {
            (Some(data), _) => Some(Avatar::Image(data)),
            (None, Some(icon)) => Some(Avatar::Icon(icon)),
            (None, None) => None,
        }
    }

    pub fn has_saved(&self, story_id: &Uuid) -> bool {
        self.saved_stories.contains(story_id)
    }

    pub(crate) fn apply_profile(&mut self, update: ProfileUpdate) -> Result<(), String> {
        let email = non_empty(update.email);

        if let Some(email) = &email {
            EmailAddress::from_str(email).map_err(|e| format!("Invalid email: {e}"))?;
        }

        self.name = update.name;
        self.email = email;
        self.bio = non_empty(update.bio);
        Ok(())
    }

    pub(crate) fn set_avatar_image(&mut self, data: Vec<u8>) {
        self.avatar_data = Some(data);
        self.avatar = None;
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::with_profile(
            "Анна Смирнова",
            "anna@example.com",
            "person.crop.circle.fill",
            "Архитектор и урбанист",
        )
    }

    #[test]
    fn test_user_new() {
        let user = User::new("Игорь");
        assert_eq!(user.name, "Игорь");
        assert!(user.email.is_none());
        assert!(user.saved_stories.is_empty());
        assert!(user.avatar().is_none());
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(User::new("a").id, User::new("a").id);
    }

    #[test]
    fn test_avatar_image_takes_precedence() {
        let mut user = create_test_user();
        assert_eq!(user.avatar(), Some(Avatar::Icon("person.crop.circle.fill")));

        user.avatar_data = Some(vec![1, 2, 3]);
        assert_eq!(user.avatar(), Some(Avatar::Image(&[1, 2, 3])));
    }

    #[test]
    fn test_set_avatar_image_clears_icon() {
        let mut user = create_test_user();
        user.set_avatar_image(vec![0xff, 0xd8]);

        assert!(user.avatar.is_none());
        assert_eq!(user.avatar_data, Some(vec![0xff, 0xd8]));
    }

    #[test]
    fn test_apply_profile_clears_empty_fields() {
        let mut user = create_test_user();
        let result = user.apply_profile(ProfileUpdate {
            name: "Анна С.".to_string(),
            email: "".to_string(),
            bio: "".to_string(),
        });

        assert!(result.is_ok());
        assert_eq!(user.name, "Анна С.");
        assert!(user.email.is_none());
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_apply_profile_invalid_email() {
        let mut user = create_test_user();
        let result = user.apply_profile(ProfileUpdate {
            name: "Другое имя".to_string(),
            email: "not-an-email".to_string(),
            bio: "bio".to_string(),
        });

        assert!(result.unwrap_err().starts_with("Invalid email"));
        assert_eq!(user.name, "Анна Смирнова");
        assert_eq!(user.email.as_deref(), Some("anna@example.com"));
    }

    #[test]
    fn test_apply_profile_valid_email() {
        let mut user = create_test_user();
        let result = user.apply_profile(ProfileUpdate {
            name: "Анна Смирнова".to_string(),
            email: "anna.smirnova@example.org".to_string(),
            bio: "Архитектор".to_string(),
        });

        assert!(result.is_ok());
        assert_eq!(user.email.as_deref(), Some("anna.smirnova@example.org"));
        assert_eq!(user.bio.as_deref(), Some("Архитектор"));
    }
}
