use async_trait::async_trait;

use crate::core::models::{ClassifyError, Prediction, SnapshotBuffer};

/// Capability for turning one snapshot into one prediction. The returned
/// future resolves exactly once with either a label or an error, never
/// both. Concurrent calls are independent; callers that need serialized
/// results must serialize themselves.
#[async_trait]
pub trait IntersectionClassifier: Send + Sync {
    async fn classify(&self, snapshot: &SnapshotBuffer) -> Result<Prediction, ClassifyError>;
}
