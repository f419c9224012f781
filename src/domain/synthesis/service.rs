use std::sync::Arc;

use async_trait::async_trait;

use super::dto::SynthesizeRequest;
use super::error::SynthesisServiceError;
use crate::domain::audio;
use crate::domain::speaker::SpeakerLibrary;
use crate::infrastructure::engine::{EngineStatus, TtsEngine};

pub struct SynthesisService {
    engine: Arc<dyn TtsEngine>,
    speakers: Arc<SpeakerLibrary>,
    default_speaker: String,
    default_language: String,
}

impl SynthesisService {
    pub fn new(
        engine: Arc<dyn TtsEngine>,
        speakers: Arc<SpeakerLibrary>,
        default_speaker: String,
        default_language: String,
    ) -> Self {
        Self {
            engine,
            speakers,
            default_speaker,
            default_language,
        }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Synthesize text in a cloned voice.
    ///
    /// This operation:
    /// - Applies the configured speaker/language defaults
    /// - Resolves the speaker selector against the library
    /// - Runs inference on the shared model instance
    ///
    /// Returns WAV bytes (mono, 22050 Hz, 16-bit PCM) ready to stream.
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<Vec<u8>, SynthesisServiceError>;

    /// All reference speakers available to `synthesize`.
    fn list_speakers(&self) -> Vec<String>;

    /// Model lifecycle state, for health reporting.
    fn engine_status(&self) -> EngineStatus;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<Vec<u8>, SynthesisServiceError> {
        if request.text.trim().is_empty() {
            return Err(SynthesisServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        if !self.engine.status().is_ready() {
            return Err(SynthesisServiceError::ModelNotReady);
        }

        let selector = request
            .speaker
            .as_deref()
            .unwrap_or(&self.default_speaker);
        let language = request
            .language
            .as_deref()
            .unwrap_or(&self.default_language);

        let speaker_path = self
            .speakers
            .resolve(selector)
            .ok_or_else(|| SynthesisServiceError::SpeakerNotFound(selector.to_string()))?;

        tracing::info!(
            speaker = %speaker_path.display(),
            language = %language,
            text_length = request.text.len(),
            "Synthesis request"
        );

        let samples = self
            .engine
            .synthesize(&request.text, &speaker_path, language)
            .await?;

        tracing::info!(
            sample_count = samples.len(),
            duration_seconds = samples.len() as f64 / audio::SAMPLE_RATE as f64,
            "Synthesis complete"
        );

        audio::encode_wav(&samples)
            .map_err(|e| SynthesisServiceError::Encoding(e.to_string()))
    }

    fn list_speakers(&self) -> Vec<String> {
        self.speakers.list()
    }

    fn engine_status(&self) -> EngineStatus {
        self.engine.status()
    }
}
