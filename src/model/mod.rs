//! Wire types for the archive API.
//!
//! Field names follow the JSON the archive returns (snake_case). Detail
//! variants flatten their list counterpart and add the extra fields.

pub mod category;
pub mod media;
pub mod poem;
pub mod poet;
pub mod user;

use serde::{Deserialize, Serialize};

pub use category::{Breadcrumb, Category, CategoryDetail};
pub use media::{Audio, AudioSync};
pub use poem::{Poem, PoemDetail, Verse};
pub use poet::{Century, ParseCenturyError, Poet, PoetDetail};
pub use user::{Favorite, FavoriteToggle, UserSetting, UserSettingUpdate};

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Size of the whole collection, not of this page.
    pub count: u64,
    /// Link to the following page; `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn is_last_page(&self) -> bool {
        self.next.is_none()
    }
}
