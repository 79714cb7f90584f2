//! Typed endpoint surface of the archive.
//!
//! # Data Flow
//! ```text
//! caller
//!     → Api::<resource>() handle (poets, categories, poems, ...)
//!     → query.rs (typed filters → query pairs)
//!     → ResilientClient (auth, 429 backoff, classification)
//!     → HttpTransport
//! ```
//!
//! # Design Decisions
//! - Handles borrow the `Api`; they are free to create per call
//! - Collection-wide reads go through the `CollectionCrawler`, which shares
//!   the client's sleeper
//! - Fallbacks for secondary content live here, next to the calls they wrap

pub mod categories;
pub mod media;
pub mod poems;
pub mod poets;
pub mod query;
pub mod user;

use std::sync::Arc;

use crate::client::{ApiResult, ResilientClient};
use crate::config::{ClientConfig, CrawlConfig};
use crate::crawler::CollectionCrawler;
use crate::session::Session;

pub use categories::Categories;
pub use media::{AudioSyncs, Audios};
pub use poems::{Poems, Verses};
pub use poets::Poets;
pub use query::{
    AudioQuery, AudioSyncQuery, CategoryQuery, FavoriteQuery, Paged, PoemQuery, PoetQuery,
    VerseQuery,
};
pub use user::{Favorites, Settings};

/// Entry point for every archive call.
#[derive(Debug, Clone)]
pub struct Api {
    client: ResilientClient,
    crawler: CollectionCrawler,
}

impl Api {
    pub fn new(client: ResilientClient, crawl: CrawlConfig) -> Self {
        let crawler = CollectionCrawler::new(crawl, client.sleeper());
        Self { client, crawler }
    }

    /// Build a reqwest-backed API from configuration.
    pub fn from_config(config: &ClientConfig, session: Arc<dyn Session>) -> ApiResult<Self> {
        let client = ResilientClient::from_config(config, session)?;
        Ok(Self::new(client, config.crawl.clone()))
    }

    pub fn client(&self) -> &ResilientClient {
        &self.client
    }

    pub fn crawler(&self) -> &CollectionCrawler {
        &self.crawler
    }

    pub fn poets(&self) -> Poets<'_> {
        Poets::new(self)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    pub fn poems(&self) -> Poems<'_> {
        Poems::new(self)
    }

    pub fn verses(&self) -> Verses<'_> {
        Verses::new(self)
    }

    pub fn audios(&self) -> Audios<'_> {
        Audios::new(self)
    }

    pub fn audio_syncs(&self) -> AudioSyncs<'_> {
        AudioSyncs::new(self)
    }

    pub fn favorites(&self) -> Favorites<'_> {
        Favorites::new(self)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(self)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use crate::api::Api;
    use crate::client::ResilientClient;
    use crate::config::CrawlConfig;
    use crate::resilience::RecordingSleeper;
    use crate::session::MemorySession;
    use crate::transport::mock::ScriptedTransport;

    pub struct Harness {
        pub api: Api,
        pub transport: Arc<ScriptedTransport>,
        pub sleeper: RecordingSleeper,
        pub session: Arc<MemorySession>,
    }

    pub fn harness() -> Harness {
        let transport = Arc::new(ScriptedTransport::new());
        let sleeper = RecordingSleeper::new();
        let session = Arc::new(MemorySession::new());
        let client = ResilientClient::new(transport.clone(), session.clone())
            .with_sleeper(Arc::new(sleeper.clone()));

        Harness {
            api: Api::new(client, CrawlConfig::default()),
            transport,
            sleeper,
            session,
        }
    }

    /// A one-page listing envelope.
    pub fn page(count: u64, next: Option<&str>, results: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "count": count,
            "next": next,
            "previous": null,
            "results": results,
        })
    }
}
