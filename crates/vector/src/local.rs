//! In-process ONNX encoders (fastembed)

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use lingvec_common::{LingvecError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::encoder::TextEncoder;

/// Model names accepted by the local backend
pub const SUPPORTED_MODELS: &[&str] = &[
    "all-minilm-l6-v2",
    "bge-small-en-v1.5",
    "bge-small-zh-v1.5",
    "paraphrase-multilingual-minilm-l12-v2",
    "multilingual-e5-small",
];

/// Resolve a configured model name
pub fn parse_model(name: &str) -> Result<EmbeddingModel> {
    match name.trim().to_ascii_lowercase().as_str() {
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-small-zh-v1.5" => Ok(EmbeddingModel::BGESmallZHV15),
        "paraphrase-multilingual-minilm-l12-v2" => Ok(EmbeddingModel::ParaphraseMLMiniLML12V2),
        "multilingual-e5-small" => Ok(EmbeddingModel::MultilingualE5Small),
        other => Err(LingvecError::config(format!(
            "Unknown local model '{}', expected one of: {}",
            other,
            SUPPORTED_MODELS.join(", ")
        ))),
    }
}

/// Encoder running a fastembed model on the blocking thread pool
pub struct LocalEncoder {
    name: String,
    model: Arc<TextEmbedding>,
}

impl LocalEncoder {
    /// Load (and download if needed) a model. Blocking; call once at startup.
    pub fn load(name: &str, cache_dir: Option<&Path>) -> Result<Self> {
        let model_id = parse_model(name)?;

        let mut options = InitOptions::new(model_id).with_show_download_progress(true);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(dir.to_path_buf());
        }

        info!("Loading local model: {}", name);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| LingvecError::encoding(format!("Failed to load model {}: {}", name, e)))?;

        Ok(Self {
            name: name.to_string(),
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl TextEncoder for LocalEncoder {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        let embeddings = tokio::task::spawn_blocking(move || model.embed(vec![text], None))
            .await
            .map_err(|e| LingvecError::encoding(format!("Inference task failed: {}", e)))?
            .map_err(|e| LingvecError::encoding(format!("Inference failed: {}", e)))?;

        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| LingvecError::encoding("Model returned no embedding"))
    }
}
