pub mod category;
pub mod common;
pub mod config;
pub mod discussion;
pub mod preferences;
pub mod seed;
pub mod store;
pub mod story;
pub mod user;

pub use category::Category;
pub use config::ContentConfig;
pub use discussion::{Discussion, DiscussionMessage};
pub use preferences::{AppTheme, JsonFileStorage, MemoryStorage, PreferenceStorage, Preferences};
pub use store::{ContentStore, StoreEvent, SubscriptionId};
pub use story::{Comment, Story};
pub use user::{Avatar, ProfileUpdate, User};
