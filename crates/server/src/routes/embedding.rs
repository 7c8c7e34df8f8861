use actix_web::{post, web, HttpResponse};
use lingvec_common::LingvecError;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{EmbeddingRequest, EmbeddingResponse, DEFAULT_LANG};

/// Embed text in the requested language
#[post("/embedding")]
pub async fn embedding(
    state: web::Data<Arc<AppState>>,
    body: web::Json<EmbeddingRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let text = match request.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(LingvecError::EmptyInput.into()),
    };
    let lang = request.lang.as_deref().unwrap_or(DEFAULT_LANG);

    let embedding = state.pipeline.embed_tagged(&text, lang).await?;

    info!(
        "Embedding generated: lang={}, chars={}, dimension={}",
        lang,
        text.chars().count(),
        embedding.len()
    );

    Ok(HttpResponse::Ok().json(EmbeddingResponse {
        dimension: embedding.len(),
        embedding,
    }))
}
