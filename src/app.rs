//! Wiring for a CLI invocation: session store, query cache, and HTTP
//! client sharing one session state.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::api::HttpClient;
use crate::cache::QueryCache;
use crate::session::SessionStore;
use crate::storage::FileStorage;

pub struct App {
    pub http: HttpClient,
    pub session: SessionStore,
    pub cache: QueryCache,
}

impl App {
    /// File-backed app state under the user's config directory
    /// (`TASKBOARD_DIR` overrides, mainly for scripting and tests).
    pub fn open(api_url: &str) -> Result<App> {
        let dir = state_dir()?;
        let session_storage = FileStorage::open(&dir.join("session.json"))?;
        let cache_storage = FileStorage::open(&dir.join("cache.json"))?;
        Ok(App::from_parts(api_url, session_storage, cache_storage))
    }

    pub fn from_parts(
        api_url: &str,
        session_storage: impl crate::storage::KvStorage + 'static,
        cache_storage: impl crate::storage::KvStorage + 'static,
    ) -> App {
        let session = SessionStore::hydrate(Box::new(session_storage));
        let http = HttpClient::new(api_url, session.shared());
        let cache = QueryCache::new(Box::new(cache_storage));
        App { http, session, cache }
    }
}

fn state_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("TASKBOARD_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().context("Could not determine a config directory")?;
    Ok(base.join("taskboard"))
}
