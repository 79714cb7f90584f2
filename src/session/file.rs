//! Session persisted to a JSON key-value file.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::session::{Session, SessionError, TOKEN_KEY};

type Store = BTreeMap<String, String>;

/// Token kept in a local storage file shared with other keys.
pub struct FileSession {
    path: PathBuf,
    token: ArcSwapOption<String>,
}

impl FileSession {
    /// Open the store at `path`. A missing file means an anonymous session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let store = read_store(&path)?;
        let token = store.get(TOKEN_KEY).cloned().map(Arc::new);
        if token.is_some() {
            tracing::debug!(path = %path.display(), "Loaded stored credential");
        }

        Ok(Self {
            path,
            token: ArcSwapOption::new(token),
        })
    }

    /// Store a new token, persisting it alongside any other keys.
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        let mut store = read_store(&self.path)?;
        store.insert(TOKEN_KEY.to_string(), token.clone());
        write_store(&self.path, &store)?;
        self.token.store(Some(Arc::new(token)));
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn remove_persisted(&self) -> Result<(), SessionError> {
        let mut store = read_store(&self.path)?;
        if store.remove(TOKEN_KEY).is_some() {
            write_store(&self.path, &store)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSession")
            .field("path", &self.path)
            .field("has_token", &self.token.load().is_some())
            .finish()
    }
}

impl Session for FileSession {
    fn token(&self) -> Option<String> {
        self.token.load_full().map(|token| token.as_ref().clone())
    }

    fn clear(&self) {
        self.token.store(None);
        if let Err(e) = self.remove_persisted() {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to remove stored credential");
        }
    }
}

fn read_store(path: &Path) -> Result<Store, SessionError> {
    if !path.exists() {
        return Ok(Store::new());
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn write_store(path: &Path, store: &Store) -> Result<(), SessionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ganjoor-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_is_anonymous() {
        let session = FileSession::load(temp_path("missing")).unwrap();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_token_round_trip_through_disk() {
        let path = temp_path("roundtrip");
        let session = FileSession::load(&path).unwrap();
        session.set_token("tok-123").unwrap();

        let reloaded = FileSession::load(&path).unwrap();
        assert_eq!(reloaded.token().as_deref(), Some("tok-123"));

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_clear_keeps_other_keys() {
        let path = temp_path("clear");
        std::fs::write(&path, r#"{"auth_token":"stale","theme":"night"}"#).unwrap();

        let session = FileSession::load(&path).unwrap();
        assert_eq!(session.token().as_deref(), Some("stale"));

        session.clear();
        assert_eq!(session.token(), None);

        let store: Store = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(!store.contains_key(TOKEN_KEY));
        assert_eq!(store.get("theme").map(String::as_str), Some("night"));

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(FileSession::load(&path), Err(SessionError::Json(_))));
        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_debug_output_hides_token() {
        let path = temp_path("debug");
        std::fs::write(&path, r#"{"auth_token":"s3cr3t-token"}"#).unwrap();

        let printed = format!("{:?}", FileSession::load(&path).unwrap());
        assert!(!printed.contains("s3cr3t-token"));
        assert!(printed.contains("has_token: true"));

        std::fs::remove_file(&path).unwrap_or_default();
    }
}
