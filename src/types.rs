//! Core Result Types
//!
//! The records the pipeline hands back to its caller: the per-request
//! [`AnalysisResult`] and the probe-derived [`HealthReport`].

use serde::{Deserialize, Serialize};

/// Risk vocabulary the prompt asks the model to use.
///
/// The pipeline does not enforce this vocabulary on responses: a live model
/// may drift from it, and rejecting or coercing drifted values would silently
/// change observable behavior. Callers that need strict buckets should match
/// against these constants themselves.
pub const RISK_LOW: &str = "LOW";
pub const RISK_MEDIUM: &str = "MEDIUM";
pub const RISK_HIGH: &str = "HIGH";
pub const RISK_VERY_HIGH: &str = "VERY_HIGH";

/// Final, validated result of one image analysis.
///
/// Constructed exactly once per request by [`crate::validate::validate`] and
/// immutable thereafter. The field invariants hold on every path, including
/// the degraded-parse fallback: `score` is in `0..=100` and `confidence` is
/// in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Scam likelihood, where 100 means definitely a scam.
    pub score: u8,
    /// Free-text reasoning from the model (or a pipeline-supplied note when
    /// the model output could not be used).
    pub explanation: String,
    /// Risk bucket as reported by the model, passed through verbatim.
    pub risk_level: String,
    /// Model's confidence in its own assessment.
    pub confidence: f64,
}

/// Service health derived purely from the backend connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Read-only health report for the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub backend_connected: bool,
    pub model: String,
}
