use crate::error::AppError;
use crate::infrastructure::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisServiceError {
    #[error("Speaker file not found: {0}")]
    SpeakerNotFound(String),

    #[error("Model not loaded")]
    ModelNotReady,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("model error: {0}")]
    Engine(String),

    #[error("audio encoding failed: {0}")]
    Encoding(String),
}

impl From<EngineError> for SynthesisServiceError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotReady => SynthesisServiceError::ModelNotReady,
            EngineError::Runtime(msg) => SynthesisServiceError::Engine(msg),
            EngineError::Io(e) => SynthesisServiceError::Engine(e.to_string()),
        }
    }
}

impl From<SynthesisServiceError> for AppError {
    fn from(err: SynthesisServiceError) -> Self {
        match err {
            SynthesisServiceError::SpeakerNotFound(name) => {
                AppError::NotFound(format!("Speaker file not found: {name}"))
            }
            SynthesisServiceError::ModelNotReady => {
                AppError::ServiceUnavailable("Model not loaded".to_string())
            }
            SynthesisServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SynthesisServiceError::Engine(msg) => AppError::ExternalService(msg),
            SynthesisServiceError::Encoding(msg) => AppError::Internal(msg),
        }
    }
}
