//! `/poems/` and `/verses/` endpoints.

use crate::api::query::{PoemQuery, VerseQuery};
use crate::api::Api;
use crate::client::ApiResult;
use crate::model::{Paginated, Poem, PoemDetail, Verse};

#[derive(Debug, Clone, Copy)]
pub struct Poems<'a> {
    api: &'a Api,
}

impl<'a> Poems<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &PoemQuery) -> ApiResult<Paginated<Poem>> {
        self.api.client().get_with("/poems/", query).await
    }

    /// A poem with its full verse sequence.
    pub async fn get(&self, id: u64) -> ApiResult<PoemDetail> {
        self.api.client().get(&format!("/poems/{}/", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Verses<'a> {
    api: &'a Api,
}

impl<'a> Verses<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &VerseQuery) -> ApiResult<Paginated<Verse>> {
        self.api.client().get_with("/verses/", query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<Verse> {
        self.api.client().get(&format!("/verses/{}/", id)).await
    }
}
