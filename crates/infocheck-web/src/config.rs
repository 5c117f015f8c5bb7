//! Configuration loading for the InfoCheck front-end.
//! Reads infocheck.toml from the current directory or the path in the
//! INFOCHECK_CONFIG env var; every field has a default so the server also
//! starts with no file at all.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use infocheck_client::Endpoints;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Host of the gRPC-web search service.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Host of the REST answering/inference service.
    #[serde(default = "default_rest_base_url")]
    pub rest_base_url: String,
    /// Result count requested from the search service.
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    /// Timeout applied to every backend call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_search_url() -> String { "http://backend.ttst.asia".to_string() }
fn default_rest_base_url() -> String { "http://127.0.0.1:8888".to_string() }
fn default_result_count() -> u32 { 4 }
fn default_timeout_secs() -> u64 { 30 }

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            rest_base_url: default_rest_base_url(),
            result_count: default_result_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            search_url: self.search_url.clone(),
            rest_base_url: self.rest_base_url.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration, following INFOCHECK_CONFIG when set. A missing
    /// file yields the defaults; a present but invalid file is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("INFOCHECK_CONFIG")
            .unwrap_or_else(|_| "infocheck.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
