//! Shared application state injected into every handler.

use std::sync::Arc;

use infocheck_client::{Backend, HttpBackend};

use crate::config::Config;
use crate::templates::Templates;

pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn Backend>,
    pub templates: Templates,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Production state: HTTP backend built from the configured endpoints
    /// and timeout.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = HttpBackend::new(config.backend.endpoints(), config.backend.timeout())?;
        Self::with_backend(config, Arc::new(backend))
    }

    /// State with an injected backend; used by tests to substitute a mock.
    pub fn with_backend(config: Config, backend: Arc<dyn Backend>) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            backend,
            templates: Templates::new()?,
        })
    }
}
