use actix_web::{post, web, HttpResponse};
use lingvec_vector::{cosine_similarity, rank};
use tracing::debug;

use crate::error::ApiError;
use crate::types::{RankRequest, RankResponse, SimilarityRequest, SimilarityResponse};

/// Cosine similarity of two embeddings
#[post("/similarity")]
pub async fn similarity(body: web::Json<SimilarityRequest>) -> Result<HttpResponse, ApiError> {
    let similarity = cosine_similarity(&body.embedding1, &body.embedding2)?;

    debug!("Similarity computed: {}", similarity);
    Ok(HttpResponse::Ok().json(SimilarityResponse { similarity }))
}

/// Rank candidate embeddings by similarity to a query
#[post("/similarity/rank")]
pub async fn rank_candidates(body: web::Json<RankRequest>) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    // Scoring many long vectors is CPU-bound
    let results = web::block(move || rank(&request.query, &request.candidates, request.top_k))
        .await
        .map_err(|e| ApiError(anyhow::anyhow!("Ranking task failed: {}", e).into()))??;

    debug!("Ranked {} candidates", results.len());
    Ok(HttpResponse::Ok().json(RankResponse {
        count: results.len(),
        results,
    }))
}
