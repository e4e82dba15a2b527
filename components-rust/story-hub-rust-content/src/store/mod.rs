//! In-memory content store: the single source of truth for stories,
//! discussions and the current user.
//!
//! Lookups are linear scans, which is fine at seed scale. Mutations on an
//! unknown id change nothing and notify nobody; the return value tells the
//! caller whether anything happened.

use crate::category::Category;
use crate::common::query;
use crate::config::ContentConfig;
use crate::discussion::{Discussion, DiscussionMessage};
use crate::seed::{self, SeedData};
use crate::story::Story;
use crate::user::{ProfileUpdate, User};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Change notification delivered to subscribers after a mutation completes.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    StoryUpdated { story_id: Uuid },
    CommentAdded { story_id: Uuid, comment_id: Uuid },
    CommentUpdated { story_id: Uuid, comment_id: Uuid },
    MessageAdded { discussion_id: Uuid, message_id: Uuid },
    ProfileUpdated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct ContentStore {
    config: ContentConfig,
    stories: Vec<Story>,
    discussions: Vec<Discussion>,
    current_user: User,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription_id: u64,
}

impl ContentStore {
    /// Creates a store populated with the sample roster.
    pub fn new(config: ContentConfig) -> Self {
        Self::from_seed(config, seed::load())
    }

    pub fn from_seed(config: ContentConfig, seed: SeedData) -> Self {
        ContentStore {
            config,
            stories: seed.stories,
            discussions: seed.discussions,
            current_user: seed.current_user,
            listeners: Vec::new(),
            next_subscription_id: 0,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.discussions
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn categories(&self) -> &'static [Category] {
        Category::all()
    }

    pub fn story(&self, story_id: &Uuid) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == *story_id)
    }

    pub fn discussion(&self, discussion_id: &Uuid) -> Option<&Discussion> {
        self.discussions.iter().find(|d| d.id == *discussion_id)
    }

    // Queries

    /// Stories in the given category, or all stories for `None`.
    pub fn stories_by_category(&self, category: Option<Category>) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .collect()
    }

    /// Case-insensitive substring match on title or content. An empty
    /// string is a substring of everything.
    pub fn stories_matching(&self, search_text: &str) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| story_text_matches(s, search_text))
            .collect()
    }

    /// Category filter followed by search; empty search text means no search.
    /// Whitespace-only text is searched for literally.
    pub fn filtered_stories(
        &self,
        category: Option<Category>,
        search_text: &str,
    ) -> Vec<&Story> {
        self.stories_by_category(category)
            .into_iter()
            .filter(|s| search_text.is_empty() || story_text_matches(s, search_text))
            .collect()
    }

    /// Structured search, e.g. `парки category:architecture author:"Анна"`.
    pub fn search_stories(&self, query: &str) -> Vec<&Story> {
        let matcher = StoryQueryMatcher::new(query);
        log::debug!("search stories - query matcher: {matcher}");

        self.stories
            .iter()
            .filter(|s| matcher.matches_story(s))
            .collect()
    }

    /// Saved stories in collection order, not the order they were saved in.
    pub fn saved_stories(&self) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| self.current_user.has_saved(&s.id))
            .collect()
    }

    pub fn discussions_by_category(&self, category: Option<Category>) -> Vec<&Discussion> {
        self.discussions
            .iter()
            .filter(|d| category.map_or(true, |c| d.category == c))
            .collect()
    }

    pub fn story_count(&self, category: Option<Category>) -> usize {
        self.stories_by_category(category).len()
    }

    pub fn discussion_count(&self, category: Option<Category>) -> usize {
        self.discussions_by_category(category).len()
    }

    pub fn featured_stories(&self, category: Option<Category>) -> Vec<&Story> {
        let mut stories = self.stories_by_category(category);
        stories.truncate(self.config.featured_stories_limit);
        stories
    }

    pub fn community_discussions(&self) -> &[Discussion] {
        prefix(&self.discussions, self.config.community_discussions_limit)
    }

    pub fn open_discussions(&self) -> &[Discussion] {
        prefix(&self.discussions, self.config.open_discussions_limit)
    }

    pub fn must_read_discussions(&self) -> &[Discussion] {
        let limit = self.config.must_read_discussions_limit;
        let start = self.discussions.len().saturating_sub(limit);
        &self.discussions[start..]
    }

    /// Messages of a discussion, empty when the discussion is unknown.
    pub fn messages(&self, discussion_id: &Uuid) -> &[DiscussionMessage] {
        self.discussion(discussion_id)
            .map(|d| d.messages.as_slice())
            .unwrap_or(&[])
    }

    // Mutations

    pub fn toggle_like(&mut self, story_id: &Uuid) -> bool {
        match self.stories.iter_mut().find(|s| s.id == *story_id) {
            Some(story) => {
                story.toggle_like();
                log::debug!(
                    "toggle like - story id: {}, liked: {}, likes: {}",
                    story_id,
                    story.is_liked,
                    story.likes
                );
                self.notify(StoreEvent::StoryUpdated {
                    story_id: *story_id,
                });
                true
            }
            None => {
                log::debug!("toggle like - story id: {story_id} - not found");
                false
            }
        }
    }

    pub fn toggle_save(&mut self, story_id: &Uuid) -> bool {
        match self.stories.iter_mut().find(|s| s.id == *story_id) {
            Some(story) => {
                let saved = story.toggle_saved();
                if saved {
                    self.current_user.saved_stories.push(*story_id);
                } else {
                    self.current_user.saved_stories.retain(|id| id != story_id);
                }
                log::debug!("toggle save - story id: {story_id}, saved: {saved}");
                self.notify(StoreEvent::StoryUpdated {
                    story_id: *story_id,
                });
                true
            }
            None => {
                log::debug!("toggle save - story id: {story_id} - not found");
                false
            }
        }
    }

    /// Appends a comment authored by the current user. Text is not validated.
    pub fn add_comment(&mut self, story_id: &Uuid, content: &str) -> Option<Uuid> {
        let author = self.current_user.clone();
        match self.stories.iter_mut().find(|s| s.id == *story_id) {
            Some(story) => {
                let comment_id = story.add_comment(author, content.to_string());
                log::info!("add comment - story id: {story_id}, comment id: {comment_id}");
                self.notify(StoreEvent::CommentAdded {
                    story_id: *story_id,
                    comment_id,
                });
                Some(comment_id)
            }
            None => {
                log::debug!("add comment - story id: {story_id} - not found");
                None
            }
        }
    }

    /// Flips the like state of the first comment with this id in any story.
    pub fn toggle_comment_like(&mut self, comment_id: &Uuid) -> bool {
        let story_id = self
            .stories
            .iter_mut()
            .find_map(|s| s.toggle_comment_like(comment_id).then_some(s.id));

        match story_id {
            Some(story_id) => {
                log::debug!("toggle comment like - story id: {story_id}, comment id: {comment_id}");
                self.notify(StoreEvent::CommentUpdated {
                    story_id,
                    comment_id: *comment_id,
                });
                true
            }
            None => {
                log::debug!("toggle comment like - comment id: {comment_id} - not found");
                false
            }
        }
    }

    /// Appends a message authored by the current user and bumps the
    /// discussion's last activity.
    pub fn add_message(&mut self, discussion_id: &Uuid, content: &str) -> Option<Uuid> {
        let author = self.current_user.clone();
        match self.discussions.iter_mut().find(|d| d.id == *discussion_id) {
            Some(discussion) => {
                let message_id = discussion.add_message(author, content.to_string());
                log::info!(
                    "add message - discussion id: {discussion_id}, message id: {message_id}"
                );
                self.notify(StoreEvent::MessageAdded {
                    discussion_id: *discussion_id,
                    message_id,
                });
                Some(message_id)
            }
            None => {
                log::debug!("add message - discussion id: {discussion_id} - not found");
                None
            }
        }
    }

    /// Updates the current user. Content created earlier keeps its author
    /// snapshot.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), String> {
        self.current_user.apply_profile(update)?;
        log::info!("update profile - user id: {}", self.current_user.id);
        self.notify(StoreEvent::ProfileUpdated);
        Ok(())
    }

    pub fn set_avatar_image(&mut self, data: Vec<u8>) {
        log::info!("set avatar image - size: {}", data.len());
        self.current_user.set_avatar_image(data);
        self.notify(StoreEvent::ProfileUpdated);
    }

    // Subscriptions

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(ContentConfig::default())
    }
}

fn prefix<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

fn story_text_matches(story: &Story, search_text: &str) -> bool {
    query::text_matches(&story.title, search_text)
        || query::text_matches(&story.content, search_text)
}

#[derive(Clone, Debug)]
struct StoryQueryMatcher {
    terms: Vec<String>,
    field_filters: Vec<(String, String)>,
}

impl Display for StoryQueryMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StoryQueryMatcher(terms: {:?}, field_filters: {:?})",
            self.terms, self.field_filters
        )
    }
}

impl StoryQueryMatcher {
    fn new(query: &str) -> Self {
        let q = query::Query::new(query);

        Self {
            terms: q.terms,
            field_filters: q.field_filters,
        }
    }

    fn matches_story(&self, story: &Story) -> bool {
        for (field, value) in self.field_filters.iter() {
            let matches = match field.as_str() {
                "category" => value
                    .parse::<Category>()
                    .map(|c| c == story.category)
                    .unwrap_or(false),
                "tag" | "tags" => story.has_tag(value),
                "author" => query::text_matches(&story.author.name, value),
                "title" => query::text_matches(&story.title, value),
                "content" => query::text_matches(&story.content, value),
                _ => false, // Unknown field
            };

            if !matches {
                return false;
            }
        }

        self.terms
            .iter()
            .all(|term| story_text_matches(story, term))
    }
}
