//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// The UI and background tasks share one store; `get` hands out a clone
/// so readers never hold the lock across rendering.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and the file path it
    /// was loaded from.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_stored_config() {
        let mut config = Config::default();
        config.api.base_url = "http://metro.example".to_string();
        let store = ConfigStore::new(config, PathBuf::from("/tmp/config.toml"));

        assert_eq!(store.get().api.base_url, "http://metro.example");
        assert_eq!(store.path(), Path::new("/tmp/config.toml"));
    }
}
