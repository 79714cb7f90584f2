//! `/poets/` endpoints.

use crate::api::query::{Paged, PoetQuery};
use crate::api::Api;
use crate::client::ApiResult;
use crate::crawler::Crawl;
use crate::model::{Paginated, Poet, PoetDetail};

#[derive(Debug, Clone, Copy)]
pub struct Poets<'a> {
    api: &'a Api,
}

impl<'a> Poets<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &PoetQuery) -> ApiResult<Paginated<Poet>> {
        self.api.client().get_with("/poets/", query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<PoetDetail> {
        self.api.client().get(&format!("/poets/{}/", id)).await
    }

    /// Every poet matching `query`, page by page up to the crawl ceiling.
    pub async fn all(&self, query: &PoetQuery) -> ApiResult<Crawl<Poet>> {
        self.api
            .crawler()
            .crawl(|page| {
                let query = query.clone().at_page(page);
                async move { self.list(&query).await }
            })
            .await
    }
}
