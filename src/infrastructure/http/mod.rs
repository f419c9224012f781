use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::controllers::{health, SynthesisController};
use crate::infrastructure::config::Config;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Middleware to generate and attach a request ID to each request
async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// Assemble the application router. Shared with the e2e tests, which bind it
/// to an ephemeral port.
pub fn build_router(synthesis_controller: Arc<SynthesisController>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/speakers", get(SynthesisController::list_speakers))
        .route("/synthesize", post(SynthesisController::synthesize))
        .with_state(synthesis_controller)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    synthesis_controller: Arc<SynthesisController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(synthesis_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
