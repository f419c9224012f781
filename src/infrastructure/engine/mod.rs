pub mod sidecar;

pub use sidecar::SidecarEngine;

use async_trait::async_trait;
use std::path::Path;

/// Lifecycle of the external voice-cloning model.
///
/// The model is loaded exactly once per process and treated as read-only
/// afterwards; this enum replaces the nullable global the original design
/// notes warn about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineStatus {
    Uninitialized,
    Loading,
    Ready { device: String },
    Failed { error: String },
}

impl EngineStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, EngineStatus::Ready { .. })
    }

    /// The compute device the model is bound to, once loaded.
    pub fn device(&self) -> Option<&str> {
        match self {
            EngineStatus::Ready { device } => Some(device),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Model not loaded")]
    NotReady,

    #[error("Model runtime error: {0}")]
    Runtime(String),

    #[error("Model runtime I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the external text-to-speech model.
///
/// Implementations own model lifecycle and inference; callers get raw float
/// samples at the fixed output sample rate and encode them themselves.
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Current lifecycle state. Must never block or fail, so health checks
    /// can run while the model is still loading.
    fn status(&self) -> EngineStatus;

    /// Synthesize `text` in the voice of `speaker_wav` for `language`.
    async fn synthesize(
        &self,
        text: &str,
        speaker_wav: &Path,
        language: &str,
    ) -> Result<Vec<f32>, EngineError>;
}
