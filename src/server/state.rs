//! Shared application state
//!
//! One [`AppState`] is built at startup and cloned into every handler.
//! Collections are held behind the [`Collection`] trait so the in-memory
//! backing can be swapped for a persistent one without touching the
//! routes; settings are a singleton guarded by its own lock.

use crate::auth::SessionStore;
use crate::config::AppConfig;
use crate::core::error::BackofficeError;
use crate::core::repository::Collection;
use crate::entities::{Application, Category, Job, Message, Product, SiteSettings};
use crate::storage::InMemoryCollection;
use std::sync::{Arc, RwLock};

/// Everything the handlers need, cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionStore>,

    pub categories: Arc<dyn Collection<Category>>,
    pub products: Arc<dyn Collection<Product>>,
    pub jobs: Arc<dyn Collection<Job>>,
    pub applications: Arc<dyn Collection<Application>>,
    pub messages: Arc<dyn Collection<Message>>,

    settings: Arc<RwLock<SiteSettings>>,
}

impl AppState {
    /// Build a state backed entirely by empty in-memory collections.
    /// Site settings start from the configured defaults.
    pub fn in_memory(config: AppConfig) -> Self {
        let settings = config.site.clone();
        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            categories: Arc::new(InMemoryCollection::<Category>::new()),
            products: Arc::new(InMemoryCollection::<Product>::new()),
            jobs: Arc::new(InMemoryCollection::<Job>::new()),
            applications: Arc::new(InMemoryCollection::<Application>::new()),
            messages: Arc::new(InMemoryCollection::<Message>::new()),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Current settings snapshot
    pub fn settings(&self) -> Result<SiteSettings, BackofficeError> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| BackofficeError::Internal("settings lock poisoned".to_string()))
    }

    /// Replace the settings wholesale (the admin screen saves the full form)
    pub fn replace_settings(&self, new: SiteSettings) -> Result<SiteSettings, BackofficeError> {
        let mut guard = self
            .settings
            .write()
            .map_err(|_| BackofficeError::Internal("settings lock poisoned".to_string()))?;
        *guard = new.clone();
        Ok(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let state = AppState::in_memory(AppConfig::default());
        let initial = state.settings().unwrap();
        assert_eq!(initial.site_tagline, "We Supply Your Growth");

        let mut changed = initial.clone();
        changed.site_title = "New Title".to_string();
        state.replace_settings(changed).unwrap();

        assert_eq!(state.settings().unwrap().site_title, "New Title");
    }

    #[tokio::test]
    async fn test_collections_start_empty() {
        let state = AppState::in_memory(AppConfig::default());
        assert_eq!(state.products.count().await.unwrap(), 0);
        assert_eq!(state.messages.count().await.unwrap(), 0);
    }
}
