//! Poets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Era a poet is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Century {
    Ancient,
    Classical,
    Contemporary,
    Modern,
}

impl Century {
    pub const ALL: [Century; 4] = [
        Century::Ancient,
        Century::Classical,
        Century::Contemporary,
        Century::Modern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Century::Ancient => "ancient",
            Century::Classical => "classical",
            Century::Contemporary => "contemporary",
            Century::Modern => "modern",
        }
    }

    /// Persian label shown in the century filter.
    pub fn label(&self) -> &'static str {
        match self {
            Century::Ancient => "باستانی",
            Century::Classical => "کلاسیک",
            Century::Contemporary => "معاصر",
            Century::Modern => "نو",
        }
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown century '{0}' (expected ancient, classical, contemporary or modern)")]
pub struct ParseCenturyError(String);

impl FromStr for Century {
    type Err = ParseCenturyError;

    /// Accepts the wire name or the Persian label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Century::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted) || c.label() == wanted)
            .ok_or_else(|| ParseCenturyError(s.to_string()))
    }
}

/// Poet as returned by `/poets/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poet {
    pub id: u64,
    pub name: String,
    pub century: Century,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_slug: Option<String>,
    pub poems_count: u64,
}

/// Poet as returned by `/poets/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoetDetail {
    #[serde(flatten)]
    pub poet: Poet,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub century_display: String,
    pub categories_count: u64,
}
