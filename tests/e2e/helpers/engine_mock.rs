use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use voxclone_server::infrastructure::engine::{EngineError, EngineStatus, TtsEngine};

/// Stand-in for the external voice-cloning model. Produces one second of
/// silence per call and lets tests drive the lifecycle state.
pub struct MockEngine {
    status: RwLock<EngineStatus>,
    calls: AtomicUsize,
}

impl MockEngine {
    pub fn ready(device: &str) -> Self {
        Self {
            status: RwLock::new(EngineStatus::Ready {
                device: device.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn uninitialized() -> Self {
        Self {
            status: RwLock::new(EngineStatus::Uninitialized),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_status(&self, status: EngineStatus) {
        *self.status.write().unwrap() = status;
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsEngine for MockEngine {
    fn status(&self) -> EngineStatus {
        self.status.read().unwrap().clone()
    }

    async fn synthesize(
        &self,
        _text: &str,
        speaker_wav: &Path,
        _language: &str,
    ) -> Result<Vec<f32>, EngineError> {
        if !self.status().is_ready() {
            return Err(EngineError::NotReady);
        }
        if !speaker_wav.exists() {
            return Err(EngineError::Runtime(format!(
                "reference audio missing: {}",
                speaker_wav.display()
            )));
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0.0; 22050])
    }
}
