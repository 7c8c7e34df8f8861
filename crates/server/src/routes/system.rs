use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::HealthResponse;

/// Loaded models and their dimensions
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        layout: state.pipeline.encoders().layout(),
        models: state.pipeline.models(),
        started_at: state.started_at,
    })
}
