//! Shared application state for the web server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use rfpa_core::{AnalysisStore, AppConfig, RfpAnalyzer, StoreError};
use sha2::{Digest, Sha512};
use tracing::info;

use crate::error::WebError;

/// Shared state injected into every handler.
///
/// The configuration is read-only; the store is the only mutable resource
/// and sits behind a mutex.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: RfpAnalyzer,
    store: Arc<Mutex<AnalysisStore>>,
    key: Key,
}

impl AppState {
    pub fn new(config: AppConfig, store: AnalysisStore) -> Self {
        let key = Key::from(Sha512::digest(config.server.secret_key.as_bytes()).as_slice());
        Self {
            config: Arc::new(config),
            analyzer: RfpAnalyzer::new(),
            store: Arc::new(Mutex::new(store)),
            key,
        }
    }

    /// Create the upload folder and open the configured database.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.upload.upload_folder)?;
        info!("Upload folder: {}", config.upload.upload_folder.display());

        let store = AnalysisStore::open(&config.storage.database_path)?;
        Ok(Self::new(config, store))
    }

    /// Run `f` with exclusive access to the store.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&AnalysisStore) -> Result<T, StoreError>,
    ) -> Result<T, WebError> {
        let store = self.store.lock().map_err(|_| WebError::StoreUnavailable)?;
        Ok(f(&store)?)
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
