use chrono::{DateTime, Utc};
use lingvec_common::{AppConfig, Result};
use lingvec_vector::EmbeddingPipeline;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Tokenizers and loaded models, read-only after startup
    pub pipeline: Arc<EmbeddingPipeline>,

    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(pipeline: Arc<EmbeddingPipeline>) -> Self {
        Self {
            pipeline,
            started_at: Utc::now(),
        }
    }

    /// Create application state; completes before any request is served
    pub async fn initialize(config: &AppConfig) -> Result<Self> {
        let pipeline = EmbeddingPipeline::initialize(config).await?;
        Ok(Self::new(Arc::new(pipeline)))
    }
}
