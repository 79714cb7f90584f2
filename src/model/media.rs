//! Recitations and their verse timings.

use serde::{Deserialize, Serialize};

/// A recorded recitation of a poem (`/audios/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    pub id: u64,
    pub poem: u64,
    pub poem_title: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    pub is_direct: bool,
    #[serde(default)]
    pub sync_guid: Option<String>,
    #[serde(default)]
    pub file_checksum: Option<String>,
    pub is_uploaded: bool,
}

/// When a verse starts within a recitation (`/audio-syncs/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSync {
    pub id: u64,
    pub poem: u64,
    pub poem_title: String,
    pub audio: u64,
    pub verse_order: i64,
    pub verse_text: String,
    pub millisec: u64,
}
