use std::path::Path;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;

use super::{EngineError, EngineStatus, TtsEngine};

/// Command sent to the model runtime, one JSON object per line on stdin.
#[derive(Debug, Serialize)]
struct SynthesizeCommand<'a> {
    id: u64,
    op: &'static str,
    text: &'a str,
    speaker_wav: &'a str,
    language: &'a str,
}

/// First line the runtime prints after the model finished loading.
#[derive(Debug, Deserialize)]
struct LoadAnnouncement {
    event: String,
    #[serde(default)]
    device: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Reply to a synthesize command, one JSON object per line on stdout.
#[derive(Debug, Deserialize)]
struct SynthesizeReply {
    id: u64,
    #[serde(default)]
    samples: Option<Vec<f32>>,
    #[serde(default)]
    error: Option<String>,
}

struct RuntimeIo {
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    // Held so the runtime is killed when the engine is dropped.
    _child: Child,
}

/// Drives the external pretrained voice-cloning model as a long-lived child
/// process speaking newline-delimited JSON.
///
/// The runtime loads the model once at spawn and announces readiness together
/// with the compute device it probed. Inference requests are serialized
/// behind a mutex: the model library does not document concurrent-inference
/// safety, so concurrent HTTP requests take turns on the one instance.
pub struct SidecarEngine {
    status: RwLock<EngineStatus>,
    io: Mutex<Option<RuntimeIo>>,
    next_id: AtomicU64,
}

impl Default for SidecarEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SidecarEngine {
    pub fn new() -> Self {
        Self {
            status: RwLock::new(EngineStatus::Uninitialized),
            io: Mutex::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    fn set_status(&self, status: EngineStatus) {
        *self.status.write().expect("engine status lock poisoned") = status;
    }

    /// Spawn the model runtime and block until it announces the model is
    /// loaded. `command` is the runtime invocation (program plus arguments);
    /// `device` is forwarded as `--device` (`auto` keeps the runtime's own
    /// capability probe).
    pub async fn load(&self, command: &[String], device: &str) -> Result<(), EngineError> {
        self.set_status(EngineStatus::Loading);

        match self.spawn_and_wait_ready(command, device).await {
            Ok((io, bound_device)) => {
                *self.io.lock().await = Some(io);
                self.set_status(EngineStatus::Ready {
                    device: bound_device.clone(),
                });
                tracing::info!(device = %bound_device, "Model loaded successfully");
                Ok(())
            }
            Err(err) => {
                self.set_status(EngineStatus::Failed {
                    error: err.to_string(),
                });
                tracing::error!(error = %err, "Model load failed");
                Err(err)
            }
        }
    }

    async fn spawn_and_wait_ready(
        &self,
        command: &[String],
        device: &str,
    ) -> Result<(RuntimeIo, String), EngineError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| EngineError::Runtime("model runtime command is empty".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .arg("--device")
            .arg(device)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Runtime("runtime stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Runtime("runtime stdout unavailable".to_string()))?;
        let mut stdout = BufReader::new(stdout).lines();

        // The load can take seconds to minutes; wait for the announcement.
        let line = stdout
            .next_line()
            .await?
            .ok_or_else(|| EngineError::Runtime("runtime exited before loading".to_string()))?;
        let announcement: LoadAnnouncement = serde_json::from_str(&line)
            .map_err(|e| EngineError::Runtime(format!("bad load announcement: {e}")))?;

        if announcement.event != "ready" {
            let detail = announcement
                .error
                .unwrap_or_else(|| format!("unexpected event: {}", announcement.event));
            return Err(EngineError::Runtime(detail));
        }

        let device = announcement
            .device
            .ok_or_else(|| EngineError::Runtime("ready announcement without device".to_string()))?;

        Ok((
            RuntimeIo {
                stdin,
                stdout,
                _child: child,
            },
            device,
        ))
    }
}

#[async_trait]
impl TtsEngine for SidecarEngine {
    fn status(&self) -> EngineStatus {
        self.status.read().expect("engine status lock poisoned").clone()
    }

    async fn synthesize(
        &self,
        text: &str,
        speaker_wav: &Path,
        language: &str,
    ) -> Result<Vec<f32>, EngineError> {
        if !self.status().is_ready() {
            return Err(EngineError::NotReady);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let speaker = speaker_wav.to_string_lossy();
        let command = SynthesizeCommand {
            id,
            op: "synthesize",
            text,
            speaker_wav: speaker.as_ref(),
            language,
        };
        let mut line = serde_json::to_string(&command)
            .map_err(|e| EngineError::Runtime(format!("request encoding failed: {e}")))?;
        line.push('\n');

        // One request on the wire at a time; concurrent callers queue here.
        let mut io_guard = self.io.lock().await;
        let io = io_guard.as_mut().ok_or(EngineError::NotReady)?;

        let write_result = match io.stdin.write_all(line.as_bytes()).await {
            Ok(()) => io.stdin.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = write_result {
            drop(io_guard);
            self.set_status(EngineStatus::Failed {
                error: format!("model runtime write failed: {e}"),
            });
            return Err(EngineError::Io(e));
        }

        let reply_line = match io.stdout.next_line().await? {
            Some(reply) => reply,
            None => {
                drop(io_guard);
                self.set_status(EngineStatus::Failed {
                    error: "model runtime exited".to_string(),
                });
                return Err(EngineError::Runtime("model runtime exited".to_string()));
            }
        };

        let reply: SynthesizeReply = serde_json::from_str(&reply_line)
            .map_err(|e| EngineError::Runtime(format!("bad runtime reply: {e}")))?;

        if reply.id != id {
            return Err(EngineError::Runtime(format!(
                "runtime replied to request {} while {} was pending",
                reply.id, id
            )));
        }

        match (reply.samples, reply.error) {
            (Some(samples), None) => Ok(samples),
            (_, Some(error)) => Err(EngineError::Runtime(error)),
            (None, None) => Err(EngineError::Runtime(
                "runtime reply carried neither samples nor error".to_string(),
            )),
        }
    }
}
