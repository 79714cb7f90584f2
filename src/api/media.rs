//! Recitations: `/audios/` and `/audio-syncs/`.

use crate::api::query::{AudioQuery, AudioSyncQuery};
use crate::api::Api;
use crate::client::ApiResult;
use crate::model::{Audio, AudioSync, Paginated};

#[derive(Debug, Clone, Copy)]
pub struct Audios<'a> {
    api: &'a Api,
}

impl<'a> Audios<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &AudioQuery) -> ApiResult<Paginated<Audio>> {
        self.api.client().get_with("/audios/", query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<Audio> {
        self.api.client().get(&format!("/audios/{}/", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AudioSyncs<'a> {
    api: &'a Api,
}

impl<'a> AudioSyncs<'a> {
    pub(crate) fn new(api: &'a Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &AudioSyncQuery) -> ApiResult<Paginated<AudioSync>> {
        self.api.client().get_with("/audio-syncs/", query).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<AudioSync> {
        self.api.client().get(&format!("/audio-syncs/{}/", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{harness, page};
    use serde_json::json;

    #[tokio::test]
    async fn test_audio_listing() {
        let h = harness();
        h.transport.push_json(
            200,
            page(
                1,
                None,
                json!([{
                    "id": 3,
                    "poem": 5,
                    "poem_title": "غزل ۵",
                    "file_url": "https://example.org/5.mp3",
                    "description": null,
                    "download_url": "https://example.org/5.mp3",
                    "is_direct": true,
                    "sync_guid": "f0e1",
                    "file_checksum": "abc",
                    "is_uploaded": false
                }]),
            ),
        );

        let query = AudioQuery {
            poem: Some(5),
            is_direct: Some(true),
            ..AudioQuery::default()
        };
        let audios = h.api.audios().list(&query).await.unwrap();

        assert!(audios.results[0].is_direct);
        let request = &h.transport.requests()[0];
        assert_eq!(request.path, "/audios/");
        assert_eq!(request.query_param("is_direct"), Some("true"));
        assert_eq!(request.query_param("poem"), Some("5"));
    }

    #[tokio::test]
    async fn test_audio_sync_listing() {
        let h = harness();
        h.transport.push_json(
            200,
            page(
                1,
                None,
                json!([{
                    "id": 1,
                    "poem": 5,
                    "poem_title": "غزل ۵",
                    "audio": 3,
                    "verse_order": 1,
                    "verse_text": "a",
                    "millisec": 1500
                }]),
            ),
        );

        let query = AudioSyncQuery {
            audio: Some(3),
            ..AudioSyncQuery::default()
        };
        let syncs = h.api.audio_syncs().list(&query).await.unwrap();

        assert_eq!(syncs.results[0].millisec, 1500);
        assert_eq!(h.transport.requests()[0].path, "/audio-syncs/");
        assert_eq!(h.transport.requests()[0].query_param("audio"), Some("3"));
    }
}
