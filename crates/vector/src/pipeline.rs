use lingvec_common::{AppConfig, LingvecError, Result};
use lingvec_text::{Language, Stopwords, Tokenizer};
use std::sync::Arc;
use tracing::{debug, info};

use crate::encoder_set::EncoderSet;
use crate::types::{Embedding, ModelInfo};

/// Text -> tokens -> vector.
///
/// Holds the read-only state shared by all requests: stopword sets,
/// segmentation dictionary and loaded models.
pub struct EmbeddingPipeline {
    tokenizer: Arc<Tokenizer>,
    encoders: EncoderSet,
}

impl EmbeddingPipeline {
    pub fn new(tokenizer: Arc<Tokenizer>, encoders: EncoderSet) -> Self {
        Self {
            tokenizer,
            encoders,
        }
    }

    /// Load stopwords, tokenizers and models. Expensive; run once at startup.
    pub async fn initialize(config: &AppConfig) -> Result<Self> {
        let en_path = config.en_stopwords_path.clone();
        let zh_path = config.zh_stopwords_path.clone();

        let tokenizer = tokio::task::spawn_blocking(move || {
            let stopwords = Stopwords::load(en_path.as_deref(), &zh_path)?;
            Ok::<_, LingvecError>(Tokenizer::new(stopwords))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Tokenizer initialization task failed: {}", e))??;

        let encoders = EncoderSet::load(config).await?;

        info!("Embedding pipeline ready");
        Ok(Self::new(Arc::new(tokenizer), encoders))
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    pub fn dimension(&self, lang: Language) -> usize {
        self.encoders.dimension(lang)
    }

    pub fn models(&self) -> Vec<ModelInfo> {
        self.encoders.models()
    }

    /// Normalized text handed to the encoder.
    ///
    /// When filtering removes every token the trimmed input is used, so
    /// the encoder never sees an empty string.
    pub async fn preprocess(&self, text: &str, lang: Language) -> Result<String> {
        if text.trim().is_empty() {
            return Err(LingvecError::EmptyInput);
        }

        let tokenizer = Arc::clone(&self.tokenizer);
        let owned = text.to_string();
        let tokens = tokio::task::spawn_blocking(move || tokenizer.tokenize(&owned, lang))
            .await
            .map_err(|e| anyhow::anyhow!("Tokenizer task failed: {}", e))??;

        if tokens.is_empty() {
            debug!("All tokens filtered out; encoding raw text");
            return Ok(text.trim().to_string());
        }

        Ok(tokens.to_text())
    }

    /// Embed text in the given language
    pub async fn embed(&self, text: &str, lang: Language) -> Result<Embedding> {
        let normalized = self.preprocess(text, lang).await?;
        let embedding = self.encoders.encode(&normalized, lang).await?;

        debug!("Generated embedding dimension: {}", embedding.len());
        Ok(embedding)
    }

    /// Embed text for a raw language tag such as `"zh"`
    pub async fn embed_tagged(&self, text: &str, tag: &str) -> Result<Embedding> {
        let lang: Language = tag.parse()?;
        self.embed(text, lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubEncoder;
    use lingvec_common::ModelLayout;
    use lingvec_text::StopwordSet;

    struct Fixture {
        pipeline: EmbeddingPipeline,
        english: Arc<StubEncoder>,
        chinese: Arc<StubEncoder>,
    }

    async fn fixture() -> Fixture {
        let english = Arc::new(StubEncoder::new("en-stub", 384));
        let chinese = Arc::new(StubEncoder::new("zh-stub", 768));
        let encoders = EncoderSet::from_parts(
            ModelLayout::PerLanguage,
            english.clone(),
            chinese.clone(),
        )
        .await
        .unwrap();

        let tokenizer = Tokenizer::new(Stopwords::new(
            StopwordSet::english_default(),
            StopwordSet::from_words(["的", "是", "。"]),
        ));

        Fixture {
            pipeline: EmbeddingPipeline::new(Arc::new(tokenizer), encoders),
            english,
            chinese,
        }
    }

    #[tokio::test]
    async fn test_embedding_has_model_dimension() {
        let f = fixture().await;

        let embedding = f.pipeline.embed_tagged("hello world", "en").await.unwrap();
        assert_eq!(embedding.len(), 384);
        assert_eq!(embedding.len(), f.pipeline.dimension(Language::English));

        let embedding = f.pipeline.embed_tagged("你好世界", "zh").await.unwrap();
        assert_eq!(embedding.len(), 768);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let f = fixture().await;
        for lang in Language::ALL {
            assert!(matches!(f.pipeline.embed("", lang).await, Err(LingvecError::EmptyInput)));
            assert!(matches!(f.pipeline.embed("   ", lang).await, Err(LingvecError::EmptyInput)));
        }
    }

    #[tokio::test]
    async fn test_unsupported_language() {
        let f = fixture().await;
        let result = f.pipeline.embed_tagged("bonjour", "fr").await;
        assert!(matches!(result, Err(LingvecError::UnsupportedLanguage(_))));
    }

    #[tokio::test]
    async fn test_deterministic() {
        let f = fixture().await;
        let a = f.pipeline.embed("The quick brown fox", Language::English).await.unwrap();
        let b = f.pipeline.embed("The quick brown fox", Language::English).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_encoder_receives_normalized_text() {
        let f = fixture().await;
        f.pipeline.embed("the quick fox the", Language::English).await.unwrap();
        f.pipeline.embed("这是苹果。", Language::Chinese).await.unwrap();

        assert_eq!(f.english.inputs().last().unwrap(), "quick fox");
        let zh_input = f.chinese.inputs().last().unwrap().clone();
        assert!(!zh_input.is_empty());
        assert!(zh_input.split_whitespace().all(|t| t != "是" && t != "。"));
    }

    #[tokio::test]
    async fn test_all_stopwords_falls_back_to_raw_text() {
        let f = fixture().await;
        let normalized = f.pipeline.preprocess("  the the  ", Language::English).await.unwrap();
        assert_eq!(normalized, "the the");
    }

    #[tokio::test]
    async fn test_encoding_failure_propagates() {
        let tokenizer = Tokenizer::new(Stopwords::default());
        let working = Arc::new(StubEncoder::new("zh", 8));
        let english = Arc::new(StubEncoder::new("en", 8));
        let encoders = EncoderSet::from_parts(ModelLayout::PerLanguage, english.clone(), working)
            .await
            .unwrap();
        let pipeline = EmbeddingPipeline::new(Arc::new(tokenizer), encoders);

        english.set_failing();
        let result = pipeline.embed("hello", Language::English).await;
        assert!(matches!(result, Err(LingvecError::EncodingFailure(_))));
    }
}
