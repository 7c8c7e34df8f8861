use chrono::{DateTime, Utc};
use lingvec_common::ModelLayout;
use lingvec_vector::{ModelInfo, RankedMatch};
use serde::{Deserialize, Serialize};

/// Language used when a request omits `lang`
pub const DEFAULT_LANG: &str = "en";

/// Embedding request
#[derive(Debug, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed
    pub text: Option<String>,

    /// Language tag (`en` or `zh`)
    pub lang: Option<String>,
}

/// Embedding response
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub embedding: Vec<f32>,
    pub dimension: usize,
}

/// Similarity request
#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub embedding1: Vec<f32>,
    pub embedding2: Vec<f32>,
}

/// Similarity response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: f32,
}

/// Rank candidates against a query vector
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub query: Vec<f32>,
    pub candidates: Vec<Vec<f32>>,

    /// Keep only the best K matches
    pub top_k: Option<usize>,
}

/// Rank response
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedMatch>,
    pub count: usize,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub layout: ModelLayout,
    pub models: Vec<ModelInfo>,
    pub started_at: DateTime<Utc>,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}
