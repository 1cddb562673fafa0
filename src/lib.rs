//! # Scamlens - Vision-LLM Scam Detection Pipeline
//!
//! Scamlens analyzes screenshots for scam indicators by forwarding them to a
//! vision-capable model on an Ollama backend and turning the model's
//! free-text answer into a normalized risk assessment (score, explanation,
//! risk level, confidence).
//!
//! The pipeline: image admission and normalization -> fixed prompt + encoded
//! image -> bounded inference call -> defensive extraction of the structured
//! payload from free text -> range validation. The backend is asked to emit
//! JSON but may bury it in prose or truncate it mid-field; the extractor
//! recovers every such case into a documented low-confidence fallback, so a
//! structurally valid [`types::AnalysisResult`] is produced for *any* model
//! output. Only admission and transport/backend failures surface as errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scamlens::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = ScamAnalyzer::new(OllamaConfig::from_env());
//!
//!     let screenshot = std::fs::read("suspicious.png")?;
//!     let result = analyzer.analyze(&screenshot, "image/png").await?;
//!     println!(
//!         "score {} ({}) - {}",
//!         result.score, result.risk_level, result.explanation
//!     );
//!
//!     let health = analyzer.health().await;
//!     println!("backend connected: {}", health.backend_connected);
//!     Ok(())
//! }
//! ```
//!
//! This crate is a library: it emits `tracing` events but installs no
//! subscriber, and it exposes no HTTP surface of its own; routing, CORS and
//! process bootstrapping belong to the embedding application.

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod image;
pub mod prompt;
pub mod traits;
pub mod types;
pub mod validate;

/// Convenient re-exports for the common use case.
pub mod prelude {
    pub use crate::analyzer::ScamAnalyzer;
    pub use crate::client::OllamaClient;
    pub use crate::config::OllamaConfig;
    pub use crate::error::{Result, ScamLensError};
    pub use crate::traits::InferenceBackend;
    pub use crate::types::{AnalysisResult, HealthReport, HealthStatus};
}

pub use analyzer::ScamAnalyzer;
pub use client::OllamaClient;
pub use config::OllamaConfig;
pub use error::ScamLensError;
pub use types::{AnalysisResult, HealthReport, HealthStatus};
