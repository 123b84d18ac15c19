use serde::{Deserialize, Serialize};

/// Class marker carried by every selectable food element.
pub const FOOD_MARKER: &str = "food";

/// Class flag toggled on a food element while it is selected.
pub const ACTIVE_FLAG: &str = "food--active";

/// Class marker of the child element holding a food's score text.
pub const SCORE_MARKER: &str = "food__score";

/// Class marker of the child element holding a food's display name.
pub const NAME_MARKER: &str = "food__name";

/// Class marker of the element the running total is written into.
pub const DISPLAY_MARKER: &str = "score__number";

/// Class names the scoring component uses to find things on a surface.
///
/// Every field falls back to its default when missing from a board file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub food: String,
    pub active: String,
    pub score: String,
    pub name: String,
    pub display: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            food: FOOD_MARKER.to_string(),
            active: ACTIVE_FLAG.to_string(),
            score: SCORE_MARKER.to_string(),
            name: NAME_MARKER.to_string(),
            display: DISPLAY_MARKER.to_string(),
        }
    }
}
