use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::synthesis::{
        SpeakersResponse, SynthesisService, SynthesisServiceApi, SynthesizeRequest,
    },
    error::{AppError, AppResult},
    infrastructure::engine::EngineStatus,
};

pub struct SynthesisController {
    synthesis_service: Arc<SynthesisService>,
}

impl SynthesisController {
    pub fn new(synthesis_service: Arc<SynthesisService>) -> Self {
        Self { synthesis_service }
    }

    pub fn engine_status(&self) -> EngineStatus {
        self.synthesis_service.engine_status()
    }

    /// POST /synthesize - Synthesize text in a cloned voice, streamed as WAV
    pub async fn synthesize(
        State(controller): State<Arc<SynthesisController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let wav = controller
            .synthesis_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        // Build headers
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/wav".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            "attachment; filename=output.wav".parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(wav)))
    }

    /// GET /speakers - List available reference-speaker files
    pub async fn list_speakers(
        State(controller): State<Arc<SynthesisController>>,
    ) -> AppResult<Json<SpeakersResponse>> {
        Ok(Json(SpeakersResponse {
            speakers: controller.synthesis_service.list_speakers(),
        }))
    }
}
