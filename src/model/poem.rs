//! Poems and verses.

use serde::{Deserialize, Serialize};

use crate::layout::PositionCode;

/// Poem as returned by `/poems/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    pub category: u64,
    pub category_title: String,
    pub poet_name: String,
    pub verses_count: u64,
}

/// Poem as returned by `/poems/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemDetail {
    #[serde(flatten)]
    pub poem: Poem,
    pub poet_id: u64,
    /// In the order the archive sent them; this order is authoritative.
    #[serde(default)]
    pub verses: Vec<Verse>,
}

/// One line of a poem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub id: u64,
    pub poem: u64,
    pub order: i64,
    /// Structural position code; see [`PositionCode`].
    pub position: i64,
    #[serde(default)]
    pub position_display: Option<String>,
    pub text: String,
}

impl Verse {
    pub fn position_code(&self) -> PositionCode {
        PositionCode::from(self.position)
    }
}
