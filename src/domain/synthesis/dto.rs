use serde::{Deserialize, Serialize};

/// Request for POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response for GET /speakers
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakersResponse {
    pub speakers: Vec<String>,
}

/// Response for GET /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub device: Option<String>,
}
