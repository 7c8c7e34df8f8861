//! Lingvec HTTP server
//!
//! Actix-web 기반 REST API: /embedding, /similarity

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

use actix_web::{web, App, HttpServer};
use lingvec_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::embedding::embedding)
        .service(routes::similarity::similarity)
        .service(routes::similarity::rank_candidates)
        .service(routes::system::health);
}

/// JSON extractor settings: body limit and JSON error bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(error::json_error_handler)
}

/// Load models, then serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState::initialize(&config).await?);

    let bind_addr = config.server_bind_address();
    let limit = config.max_payload_bytes;

    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, config.workers
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(json_config(limit))
            .configure(configure)
    })
    .workers(config.workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
