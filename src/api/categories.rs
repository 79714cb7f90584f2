//! `/categories/` endpoints.

use crate::api::query::{CategoryQuery, PoemQuery};
use crate::api::Api;
use crate::client::ApiResult;
use crate::model::{Category, CategoryDetail, Paginated, Poem};

#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    api: &'a Api,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &CategoryQuery) -> ApiResult<Paginated<Category>> {
        self.api.client().get_with("/categories/", query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<CategoryDetail> {
        self.api.client().get(&format!("/categories/{}/", id)).await
    }

    /// [`get`](Self::get), falling back to the first page of `/categories/`.
    ///
    /// A category found only in the listing comes back without children or
    /// breadcrumbs. If it is not listed either, the detail error is returned.
    pub async fn get_or_listed(&self, id: u64) -> ApiResult<CategoryDetail> {
        let err = match self.get(id).await {
            Ok(detail) => return Ok(detail),
            Err(e) => e,
        };
        tracing::warn!(category = id, error = %err, "Category detail failed, searching listing");

        let listed = match self.list(&CategoryQuery::default()).await {
            Ok(page) => page.results.into_iter().find(|c| c.id == id),
            Err(e) => {
                tracing::warn!(category = id, error = %e, "Category listing failed too");
                None
            }
        };
        listed
            .map(|category| CategoryDetail {
                category,
                children: Vec::new(),
                breadcrumbs: String::new(),
            })
            .ok_or(err)
    }

    /// Poems filed directly under the category.
    pub async fn poems(&self, id: u64) -> ApiResult<Paginated<Poem>> {
        self.api
            .client()
            .get(&format!("/categories/{}/poems/", id))
            .await
    }

    /// [`poems`](Self::poems), retried once through the generic poem listing.
    ///
    /// Some archive deployments do not serve the nested route; when it fails
    /// for any reason the same set is requested as `/poems/?category={id}`.
    pub async fn poems_or_fallback(&self, id: u64) -> ApiResult<Paginated<Poem>> {
        match self.poems(id).await {
            Ok(poems) => Ok(poems),
            Err(e) => {
                tracing::warn!(category = id, error = %e, "Nested poem listing failed, using poem filter");
                let query = PoemQuery {
                    category: Some(id),
                    ..PoemQuery::default()
                };
                self.api.poems().list(&query).await
            }
        }
    }

    /// Child categories of `id`.
    ///
    /// Secondary content: any failure is logged and yields an empty list.
    pub async fn subcategories_or_empty(&self, id: u64) -> Vec<Category> {
        let query = CategoryQuery {
            parent: Some(id),
            ..CategoryQuery::default()
        };
        match self.list(&query).await {
            Ok(page) => page.results,
            Err(e) => {
                tracing::warn!(category = id, error = %e, "Subcategories unavailable");
                Vec::new()
            }
        }
    }
}
