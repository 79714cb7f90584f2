//! Typed query strings for the listing endpoints.
//!
//! Unset fields are left out of the query string entirely.

use serde::Serialize;

use crate::model::Century;

/// Apply a crawl page number: page 1 is the unparameterised listing.
pub trait Paged: Clone {
    fn with_page(self, page: Option<u32>) -> Self;

    fn at_page(self, page: u32) -> Self {
        self.with_page((page > 1).then_some(page))
    }
}

macro_rules! paged {
    ($($query:ty),+ $(,)?) => {
        $(
            impl Paged for $query {
                fn with_page(mut self, page: Option<u32>) -> Self {
                    self.page = page;
                    self
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoetQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub century: Option<Century>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poet: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoemQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    /// Filter by the poet owning the poem's category.
    #[serde(rename = "category__poet", skip_serializing_if = "Option::is_none")]
    pub poet: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AudioQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_direct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_uploaded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AudioSyncQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FavoriteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

paged!(
    PoetQuery,
    CategoryQuery,
    PoemQuery,
    VerseQuery,
    AudioQuery,
    AudioSyncQuery,
    FavoriteQuery,
);
