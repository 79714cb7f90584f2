//! Per-user endpoints: `/favorites/` and `/settings/me/`.
//!
//! These need a bearer token; without one the archive answers 401.

use crate::api::query::FavoriteQuery;
use crate::api::Api;
use crate::client::ApiResult;
use crate::model::{Favorite, FavoriteToggle, Paginated, UserSetting, UserSettingUpdate};

#[derive(Debug, Clone, Copy)]
pub struct Favorites<'a> {
    api: &'a Api,
}

impl<'a> Favorites<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: Option<u32>) -> ApiResult<Paginated<Favorite>> {
        let query = FavoriteQuery {
            page,
            ..FavoriteQuery::default()
        };
        self.api.client().get_with("/favorites/", &query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<Favorite> {
        self.api.client().get(&format!("/favorites/{}/", id)).await
    }

    pub async fn create(&self, favorite: &FavoriteToggle) -> ApiResult<Favorite> {
        self.api.client().post("/favorites/", favorite).await
    }

    /// Bookmark a verse, or remove the bookmark if it already exists.
    pub async fn toggle(&self, favorite: &FavoriteToggle) -> ApiResult<Favorite> {
        self.api.client().post("/favorites/toggle/", favorite).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.api.client().delete(&format!("/favorites/{}/", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    api: &'a Api,
}

impl<'a> Settings<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn me(&self) -> ApiResult<UserSetting> {
        self.api.client().get("/settings/me/").await
    }

    /// Apply a partial update; the archive takes it as a POST.
    pub async fn update(&self, update: &UserSettingUpdate) -> ApiResult<UserSetting> {
        self.api.client().post("/settings/me/", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::harness;
    use crate::client::ApiError;
    use crate::transport::Method;
    use serde_json::json;
    use std::time::Duration;

    fn favorite() -> serde_json::Value {
        json!({
            "id": 11,
            "user": 1,
            "user_username": "reader",
            "poem": 5,
            "poem_title": "غزل ۵",
            "verse": 2,
            "verse_text": "b",
            "poet_name": "حافظ",
            "created_at": "2024-03-01T10:00:00Z"
        })
    }

    fn settings() -> serde_json::Value {
        json!({
            "id": 1,
            "user": 1,
            "username": "reader",
            "view_mode": "classic",
            "font_size": 20,
            "show_line_numbers": true,
            "last_highlight": null,
            "browse_button_visible": true,
            "comments_button_visible": true,
            "copy_button_visible": true,
            "print_button_visible": false,
            "home_button_visible": true,
            "random_button_visible": true,
            "editor_button_visible": false,
            "download_button_visible": true
        })
    }

    #[tokio::test]
    async fn test_toggle_posts_body_with_token() {
        let h = harness();
        h.session.set_token("tok");
        h.transport.push_json(201, favorite());

        let favorite = h
            .api
            .favorites()
            .toggle(&FavoriteToggle { poem: 5, verse: 2 })
            .await
            .unwrap();

        assert_eq!(favorite.id, 11);
        let request = &h.transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/favorites/toggle/");
        assert_eq!(request.body, Some(json!({"poem": 5, "verse": 2})));
        assert_eq!(request.header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_toggle_uses_write_budget() {
        let h = harness();
        h.transport.push_status(429).push_status(429).push_status(429);

        let result = h
            .api
            .favorites()
            .toggle(&FavoriteToggle { poem: 5, verse: 2 })
            .await;

        assert_eq!(result, Err(ApiError::RetriesExhausted { attempts: 3 }));
        assert_eq!(
            h.sleeper.recorded(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[tokio::test]
    async fn test_favorites_anonymous_is_unauthorized() {
        let h = harness();
        h.transport.push_status(401);

        assert_eq!(h.api.favorites().list(None).await, Err(ApiError::Unauthorized));
        assert_eq!(h.transport.requests()[0].query_param("page"), None);
    }

    #[tokio::test]
    async fn test_delete_favorite() {
        let h = harness();
        h.session.set_token("tok");
        h.transport.push_status(204);

        h.api.favorites().delete(11).await.unwrap();

        let request = &h.transport.requests()[0];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/favorites/11/");
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let h = harness();
        h.session.set_token("tok");
        h.transport.push_json(200, settings());
        let mut updated = settings();
        updated["font_size"] = json!(24);
        h.transport.push_json(200, updated);

        let current = h.api.settings().me().await.unwrap();
        assert_eq!(current.font_size, 20);

        let update = UserSettingUpdate {
            font_size: Some(24),
            ..UserSettingUpdate::default()
        };
        let after = h.api.settings().update(&update).await.unwrap();

        assert_eq!(after.font_size, 24);
        let requests = h.transport.requests();
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].path, "/settings/me/");
        assert_eq!(requests[1].body, Some(json!({"font_size": 24})));
    }
}
