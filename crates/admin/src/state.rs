//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminCredentials;
use crate::store::ContentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    credentials: AdminCredentials,
    store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(credentials: AdminCredentials, store: Arc<dyn ContentStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { credentials, store }),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> &AdminCredentials {
        &self.inner.credentials
    }

    #[must_use]
    pub fn store(&self) -> &dyn ContentStore {
        self.inner.store.as_ref()
    }
}
