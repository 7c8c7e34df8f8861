//! Lingvec embedding engine
//!
//! 텍스트 임베딩 및 코사인 유사도

mod encoder;
mod encoder_set;
#[cfg(feature = "local")]
mod local;
#[cfg(feature = "ollama")]
mod ollama;
mod pipeline;
mod similarity;
#[cfg(test)]
mod testing;
mod types;

pub use encoder::TextEncoder;
pub use encoder_set::{EncoderSet, ModelSlot};
#[cfg(feature = "local")]
pub use local::{parse_model, LocalEncoder, SUPPORTED_MODELS};
#[cfg(feature = "ollama")]
pub use ollama::OllamaEncoder;
pub use pipeline::EmbeddingPipeline;
pub use similarity::{cosine_similarity, rank};
pub use types::{Embedding, ModelInfo, RankedMatch};
