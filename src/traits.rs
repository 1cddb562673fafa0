//! Backend Seam
//!
//! The pipeline talks to its inference backend through one trait so that a
//! structured-output-capable backend can replace the free-text one without
//! touching extraction or validation, and so tests can inject doubles.

use async_trait::async_trait;

use crate::error::ScamLensError;
use crate::image::EncodedImage;

/// A vision-capable inference backend.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Lightweight reachability probe. Never fails: any transport error,
    /// timeout, or non-success status maps to `false`.
    async fn check_connection(&self) -> bool;

    /// Run one inference over the encoded image and return the model's raw
    /// text output, uninterpreted.
    async fn generate(&self, image: &EncodedImage) -> Result<String, ScamLensError>;

    /// Identifier of the model this backend runs.
    fn model(&self) -> &str;
}
