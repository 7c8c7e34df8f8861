use lingvec_text::Language;
use serde::Serialize;

/// An embedding vector
pub type Embedding = Vec<f32>;

/// Model serving one language
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    /// Language served
    pub language: Language,

    /// Model identifier
    pub model: String,

    /// Output dimensionality
    pub dimension: usize,
}

/// One ranked candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedMatch {
    /// Position of the candidate in the input list
    pub index: usize,

    /// Cosine similarity to the query
    pub score: f32,
}
