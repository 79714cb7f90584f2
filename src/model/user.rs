//! Per-user resources: favorites and reader settings.

use serde::{Deserialize, Serialize};

/// A bookmarked verse (`/favorites/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u64,
    pub user: u64,
    pub user_username: String,
    pub poem: u64,
    pub poem_title: String,
    pub verse: u64,
    pub verse_text: String,
    pub poet_name: String,
    pub created_at: String,
}

/// Body of `POST /favorites/toggle/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub poem: u64,
    pub verse: u64,
}

/// Reader preferences (`/settings/me/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSetting {
    pub id: u64,
    pub user: u64,
    pub username: String,
    pub view_mode: String,
    pub font_size: u32,
    pub show_line_numbers: bool,
    #[serde(default)]
    pub last_highlight: Option<String>,
    pub browse_button_visible: bool,
    pub comments_button_visible: bool,
    pub copy_button_visible: bool,
    pub print_button_visible: bool,
    pub home_button_visible: bool,
    pub random_button_visible: bool,
    pub editor_button_visible: bool,
    pub download_button_visible: bool,
}

/// Partial settings update; unset fields are left untouched by the archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_button_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_button_visible: Option<bool>,
}
