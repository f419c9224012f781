use axum::{extract::State, Json};
use std::sync::Arc;

use crate::controllers::SynthesisController;
use crate::domain::synthesis::HealthResponse;

/// GET /health - Report load status and the bound compute device.
///
/// Must answer while the model is still loading (or has failed to load);
/// in that case `model_loaded` is false and `device` is null.
pub async fn health(State(controller): State<Arc<SynthesisController>>) -> Json<HealthResponse> {
    let status = controller.engine_status();

    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: status.is_ready(),
        device: status.device().map(str::to_string),
    })
}
