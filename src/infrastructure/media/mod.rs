use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::domain::audio::{CHANNELS, SAMPLE_RATE};

/// Errors from the external media tool boundary.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("FFmpeg not found. Please install FFmpeg first.")]
    ToolMissing,

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Duration probe failed: {0}")]
    ProbeFailed(String),
}

/// Wrapper around the ffmpeg/ffprobe command-line collaborators.
///
/// All transcoding and duration probing is delegated to the external
/// binaries; this type only shapes arguments and surfaces failures.
pub struct MediaTool {
    ffmpeg: String,
    ffprobe: String,
}

impl Default for MediaTool {
    fn default() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }
}

impl MediaTool {
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    /// Verify the media tool can be spawned at all.
    pub async fn check_available(&self) -> Result<(), MediaError> {
        let status = Command::new(&self.ffmpeg)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(MediaError::ToolMissing),
        }
    }

    /// Probe the duration of an audio file, in seconds.
    pub async fn probe_duration(&self, path: &Path) -> Result<f64, MediaError> {
        let output = Command::new(&self.ffprobe)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .await
            .map_err(|_| MediaError::ToolMissing)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MediaError::ProbeFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<f64>()
            .map_err(|e| MediaError::ProbeFailed(format!("unparseable duration: {e}")))
    }

    /// Transcode `input` into WAV / 22050 Hz / mono / 16-bit PCM at `output`,
    /// optionally trimming to a start offset and duration.
    pub async fn convert(
        &self,
        input: &Path,
        output: &Path,
        start: Option<f64>,
        duration: Option<f64>,
    ) -> Result<(), MediaError> {
        let args = convert_args(input, output, start, duration);

        let result = Command::new(&self.ffmpeg)
            .args(&args)
            .output()
            .await
            .map_err(|_| MediaError::ToolMissing)?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(MediaError::ConversionFailed(stderr.trim().to_string()));
        }

        Ok(())
    }
}

/// Build the ffmpeg argument list for a conversion.
fn convert_args(
    input: &Path,
    output: &Path,
    start: Option<f64>,
    duration: Option<f64>,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), input.into()];

    if let Some(start) = start {
        args.push("-ss".into());
        args.push(start.to_string().into());
    }

    if let Some(duration) = duration {
        args.push("-t".into());
        args.push(duration.to_string().into());
    }

    args.extend([
        "-ar".into(),
        SAMPLE_RATE.to_string().into(),
        "-ac".into(),
        CHANNELS.to_string().into(),
        "-acodec".into(),
        "pcm_s16le".into(),
        output.into(),
    ]);

    args
}
