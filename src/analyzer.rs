//! Analysis Pipeline
//!
//! The facade callers use: image admission and normalization, the backend
//! connectivity gate, the inference exchange, and defensive extraction and
//! validation of the result. One call is one independent unit of work; no
//! state is shared across requests beyond the read-only backend handle.

use crate::client::OllamaClient;
use crate::config::OllamaConfig;
use crate::error::ScamLensError;
use crate::extract::extract_analysis;
use crate::image::normalize_image;
use crate::traits::InferenceBackend;
use crate::types::{AnalysisResult, HealthReport, HealthStatus};
use crate::validate::validate;

/// Scam analysis pipeline over a vision-capable inference backend.
#[derive(Debug, Clone)]
pub struct ScamAnalyzer<B = OllamaClient> {
    backend: B,
}

impl ScamAnalyzer<OllamaClient> {
    /// Creates an analyzer over an Ollama backend with the given config.
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            backend: OllamaClient::with_config(config),
        }
    }

    /// Creates an analyzer from environment-derived configuration.
    pub fn from_env() -> Self {
        Self::new(OllamaConfig::from_env())
    }
}

impl<B: InferenceBackend> ScamAnalyzer<B> {
    /// Creates an analyzer over any [`InferenceBackend`].
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Analyze an uploaded image for scam indicators.
    ///
    /// Admission failures (`InvalidInput`, `PayloadTooLarge`) and backend
    /// failures (`BackendUnavailable`, `BackendError`) are the only error
    /// paths. Unusable model output is not one of them: it degrades to the
    /// documented low-confidence fallback result.
    pub async fn analyze(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<AnalysisResult, ScamLensError> {
        let image = normalize_image(bytes, content_type)?;

        if !self.backend.check_connection().await {
            return Err(ScamLensError::BackendUnavailable(
                "connectivity probe failed; ensure the backend is running and the vision model is installed"
                    .to_string(),
            ));
        }

        let raw = self.backend.generate(&image).await?;
        let result = validate(extract_analysis(&raw));

        tracing::info!(
            score = result.score,
            risk_level = %result.risk_level,
            confidence = result.confidence,
            "analysis completed"
        );
        Ok(result)
    }

    /// Report service health, derived purely from the connectivity probe.
    pub async fn health(&self) -> HealthReport {
        let connected = self.backend.check_connection().await;
        HealthReport {
            status: if connected {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            backend_connected: connected,
            model: self.backend.model().to_string(),
        }
    }
}
