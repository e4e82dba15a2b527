use serde::{Deserialize, Serialize};

const FEATURED_STORIES_LIMIT: usize = 6;
const COMMUNITY_DISCUSSIONS_LIMIT: usize = 5;
const OPEN_DISCUSSIONS_LIMIT: usize = 3;
const MUST_READ_DISCUSSIONS_LIMIT: usize = 3;

/// Section sizes used by the home and community screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContentConfig {
    /// Leading stories shown in the home grid.
    pub featured_stories_limit: usize,
    /// Leading discussions shown on the home screen.
    pub community_discussions_limit: usize,
    /// Leading discussions shown in the "open discussions" carousel.
    pub open_discussions_limit: usize,
    /// Trailing discussions shown in "must read".
    pub must_read_discussions_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            featured_stories_limit: FEATURED_STORIES_LIMIT,
            community_discussions_limit: COMMUNITY_DISCUSSIONS_LIMIT,
            open_discussions_limit: OPEN_DISCUSSIONS_LIMIT,
            must_read_discussions_limit: MUST_READ_DISCUSSIONS_LIMIT,
        }
    }
}

impl ContentConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|err| format!("Invalid content config: {err}"))
    }
}
