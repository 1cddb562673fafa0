//! Backend Configuration
//!
//! Explicit configuration for the Ollama backend. There is no process-wide
//! state: a config value is built once, handed to the pipeline constructor,
//! and read-only afterwards, so isolated concurrent instances (and tests
//! against mock servers) are trivially possible.

use std::time::Duration;

/// Default Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Vision-capable model the pipeline is built around.
pub const DEFAULT_MODEL: &str = "llama3.2-vision:11b";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "OLLAMA_BASE_URL";

/// Configuration for [`crate::client::OllamaClient`].
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama HTTP API.
    pub base_url: String,
    /// Model identifier sent with every generate request.
    pub model: String,
    /// Timeout for the lightweight connectivity probe.
    pub probe_timeout: Duration,
    /// Timeout for the generate call. Vision-model inference is slow, so
    /// this is deliberately long.
    pub generate_timeout: Duration,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling cutoff.
    pub top_p: f64,
    /// Maximum number of tokens the model may emit.
    pub num_predict: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            probe_timeout: Duration::from_secs(5),
            generate_timeout: Duration::from_secs(300),
            temperature: 0.3,
            top_p: 0.9,
            num_predict: 1000,
        }
    }
}

impl OllamaConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Honors `OLLAMA_BASE_URL`; everything else is fixed at build time.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            config.base_url = url;
        }
        config
    }

    /// Set the backend base URL.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Set the connectivity probe timeout.
    pub const fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the generate call timeout.
    pub const fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout;
        self
    }
}
