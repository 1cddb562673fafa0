//! Ollama Client
//!
//! The synchronous request/response exchange with the Ollama HTTP API:
//! a bounded connectivity probe against `/api/tags`, the `/api/generate`
//! inference call, and a model listing for installation checks. The client
//! performs no interpretation of model output: it returns the raw response
//! text and leaves extraction to [`crate::extract`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::OllamaConfig;
use crate::error::ScamLensError;
use crate::image::EncodedImage;
use crate::prompt::analysis_prompt;
use crate::traits::InferenceBackend;

/// Request body for `POST /api/generate`. Immutable once built; streaming is
/// always disabled for this flow.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub images: Vec<String>,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options forwarded to the model runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub num_predict: u32,
}

/// Response body of `POST /api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// One installed model as reported by `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelSummary>,
}

/// Client for one Ollama endpoint.
///
/// Holds read-only configuration and a shared `reqwest` client; cloning is
/// cheap and clones share the connection pool, so concurrent requests need
/// no coordination here.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    http_client: reqwest::Client,
}

impl OllamaClient {
    /// Creates a new client with configuration and HTTP client.
    pub const fn new(config: OllamaConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Creates a new client with configuration and a default HTTP client.
    pub fn with_config(config: OllamaConfig) -> Self {
        Self::new(config, reqwest::Client::new())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Check whether the Ollama server is reachable.
    ///
    /// Issues a bounded GET against the tags endpoint. Any transport error,
    /// timeout, or non-success status yields `false`; this probe never
    /// raises past the client boundary.
    pub async fn check_connection(&self) -> bool {
        let url = self.endpoint("api/tags");
        match self
            .http_client
            .get(&url)
            .timeout(self.config.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::error!(error = %err, url = %url, "ollama connection probe failed");
                false
            }
        }
    }

    /// List the models installed on the backend.
    ///
    /// Useful to verify the configured vision model is actually present
    /// before accepting traffic.
    pub async fn list_models(&self) -> Result<Vec<ModelSummary>, ScamLensError> {
        let url = self.endpoint("api/tags");
        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.probe_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScamLensError::BackendError {
                status: status.as_u16(),
            });
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            ScamLensError::BackendUnavailable(format!("invalid model list response: {e}"))
        })?;
        Ok(tags.models)
    }

    /// Run one inference over the encoded image.
    ///
    /// Builds the fixed payload (configured model, analysis prompt, one
    /// base64 image, streaming disabled, configured sampling options) and
    /// returns the raw `response` text of the backend verbatim. A non-success
    /// status maps to [`ScamLensError::BackendError`]; transport failures map
    /// to [`ScamLensError::BackendUnavailable`].
    pub async fn generate(&self, image: &EncodedImage) -> Result<String, ScamLensError> {
        let url = self.endpoint("api/generate");
        let body = GenerateRequest {
            model: self.config.model.clone(),
            prompt: analysis_prompt().to_string(),
            images: vec![image.base64().to_string()],
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                num_predict: self.config.num_predict,
            },
        };

        tracing::debug!(
            model = %self.config.model,
            image_bytes = image.bytes().len(),
            "dispatching generate request"
        );

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .timeout(self.config.generate_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "generate request failed");
            return Err(ScamLensError::BackendError {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            ScamLensError::BackendUnavailable(format!("invalid generate response body: {e}"))
        })?;
        Ok(body.response)
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn check_connection(&self) -> bool {
        Self::check_connection(self).await
    }

    async fn generate(&self, image: &EncodedImage) -> Result<String, ScamLensError> {
        Self::generate(self, image).await
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
