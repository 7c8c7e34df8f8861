use lingvec_common::{AppConfig, EmbeddingBackend, LingvecError, ModelLayout, Result};
use lingvec_text::Language;
use std::sync::Arc;
use tracing::info;

use crate::encoder::TextEncoder;
use crate::types::ModelInfo;

/// Text used to discover a model's output dimensionality at startup
const PROBE_TEXT: &str = "dimension probe";

/// An encoder together with its fixed output dimensionality
#[derive(Clone)]
pub struct ModelSlot {
    encoder: Arc<dyn TextEncoder>,
    dimension: usize,
}

impl ModelSlot {
    pub fn encoder(&self) -> &Arc<dyn TextEncoder> {
        &self.encoder
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Encoders for every supported language.
///
/// Built once at startup; every model is probed before the set is
/// returned, so an `EncoderSet` always has known dimensions.
pub struct EncoderSet {
    layout: ModelLayout,
    english: ModelSlot,
    chinese: ModelSlot,
}

impl EncoderSet {
    /// Build encoders for the configured backend and layout
    pub async fn load(config: &AppConfig) -> Result<Self> {
        info!(
            "Loading encoders: backend={:?}, layout={:?}",
            config.embedding_backend, config.model_layout
        );

        match config.model_layout {
            ModelLayout::PerLanguage => {
                let english = build_encoder(config, config.english_model()).await?;
                let chinese = build_encoder(config, config.chinese_model()).await?;
                Self::from_parts(ModelLayout::PerLanguage, english, chinese).await
            }
            ModelLayout::Multilingual => {
                let shared = build_encoder(config, config.shared_model()).await?;
                Self::from_parts(ModelLayout::Multilingual, Arc::clone(&shared), shared).await
            }
        }
    }

    /// Build from already constructed encoders, probing each once
    pub async fn from_parts(
        layout: ModelLayout,
        english: Arc<dyn TextEncoder>,
        chinese: Arc<dyn TextEncoder>,
    ) -> Result<Self> {
        let english_dim = probe(english.as_ref()).await?;
        let chinese_dim = if Arc::ptr_eq(&english, &chinese) {
            english_dim
        } else {
            probe(chinese.as_ref()).await?
        };

        if layout == ModelLayout::Multilingual && english_dim != chinese_dim {
            return Err(LingvecError::config(format!(
                "Multilingual layout needs one dimensionality, got {} (en) and {} (zh)",
                english_dim, chinese_dim
            )));
        }

        Ok(Self {
            layout,
            english: ModelSlot {
                encoder: english,
                dimension: english_dim,
            },
            chinese: ModelSlot {
                encoder: chinese,
                dimension: chinese_dim,
            },
        })
    }

    pub fn layout(&self) -> ModelLayout {
        self.layout
    }

    pub fn slot(&self, lang: Language) -> &ModelSlot {
        match lang {
            Language::English => &self.english,
            Language::Chinese => &self.chinese,
        }
    }

    pub fn dimension(&self, lang: Language) -> usize {
        self.slot(lang).dimension
    }

    /// Model name and dimension per language
    pub fn models(&self) -> Vec<ModelInfo> {
        Language::ALL
            .iter()
            .map(|&language| {
                let slot = self.slot(language);
                ModelInfo {
                    language,
                    model: slot.encoder.model_name().to_string(),
                    dimension: slot.dimension,
                }
            })
            .collect()
    }

    /// Encode normalized text with the language's model
    pub async fn encode(&self, text: &str, lang: Language) -> Result<Vec<f32>> {
        let slot = self.slot(lang);
        let embedding = slot.encoder.encode(text).await?;

        if embedding.len() != slot.dimension {
            return Err(LingvecError::encoding(format!(
                "Model {} returned {} dimensions, expected {}",
                slot.encoder.model_name(),
                embedding.len(),
                slot.dimension
            )));
        }

        Ok(embedding)
    }
}

async fn probe(encoder: &dyn TextEncoder) -> Result<usize> {
    let dimension = encoder.encode(PROBE_TEXT).await?.len();
    if dimension == 0 {
        return Err(LingvecError::encoding(format!(
            "Model {} produced an empty embedding",
            encoder.model_name()
        )));
    }

    info!("Model ready: {} ({} dimensions)", encoder.model_name(), dimension);
    Ok(dimension)
}

async fn build_encoder(config: &AppConfig, model: &str) -> Result<Arc<dyn TextEncoder>> {
    match config.embedding_backend {
        EmbeddingBackend::Ollama => ollama_encoder(config, model).await,
        EmbeddingBackend::Local => local_encoder(config, model).await,
    }
}

#[cfg(feature = "ollama")]
async fn ollama_encoder(config: &AppConfig, model: &str) -> Result<Arc<dyn TextEncoder>> {
    let encoder = crate::ollama::OllamaEncoder::new(
        config.ollama_base_url.as_str(),
        model,
        std::time::Duration::from_secs(config.request_timeout_secs),
    )?;

    // The probe that follows decides whether startup fails
    match encoder.test_connection().await {
        Ok(true) => {}
        Ok(false) => tracing::warn!(
            "Ollama at {} answered with an error status",
            encoder.base_url()
        ),
        Err(e) => tracing::warn!("Ollama at {} is not reachable: {}", encoder.base_url(), e),
    }

    Ok(Arc::new(encoder))
}

#[cfg(not(feature = "ollama"))]
async fn ollama_encoder(_config: &AppConfig, _model: &str) -> Result<Arc<dyn TextEncoder>> {
    Err(LingvecError::config(
        "Ollama backend not compiled in; rebuild with --features ollama",
    ))
}

#[cfg(feature = "local")]
async fn local_encoder(config: &AppConfig, model: &str) -> Result<Arc<dyn TextEncoder>> {
    let model = model.to_string();
    let cache_dir = config.model_cache_dir.clone();

    let encoder = tokio::task::spawn_blocking(move || {
        crate::local::LocalEncoder::load(&model, cache_dir.as_deref())
    })
    .await
    .map_err(|e| LingvecError::encoding(format!("Model loading task failed: {}", e)))??;

    Ok(Arc::new(encoder))
}

#[cfg(not(feature = "local"))]
async fn local_encoder(_config: &AppConfig, _model: &str) -> Result<Arc<dyn TextEncoder>> {
    Err(LingvecError::config(
        "Local backend not compiled in; rebuild with --features local",
    ))
}
