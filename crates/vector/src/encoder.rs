use async_trait::async_trait;
use lingvec_common::Result;

/// A pretrained sentence encoder: normalized text in, fixed-length vector out
#[async_trait]
pub trait TextEncoder: Send + Sync {
    /// Model identifier, for logs and the health endpoint
    fn model_name(&self) -> &str;

    /// Encode one text; model failures surface as `EncodingFailure`
    async fn encode(&self, text: &str) -> Result<Vec<f32>>;
}
