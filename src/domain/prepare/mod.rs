use std::path::{Path, PathBuf};

use crate::infrastructure::media::{MediaError, MediaTool};

/// Recommended duration window for a voice-cloning reference, in seconds.
pub const MIN_RECOMMENDED_SECONDS: f64 = 6.0;
pub const MAX_RECOMMENDED_SECONDS: f64 = 30.0;

#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("FFmpeg not found. Please install FFmpeg first.")]
    ToolMissing,

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Duration probe failed: {0}")]
    ProbeFailed(String),

    #[error("Could not create output directory: {0}")]
    OutputDir(#[from] std::io::Error),
}

impl From<MediaError> for PrepareError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::ToolMissing => PrepareError::ToolMissing,
            MediaError::ConversionFailed(msg) => PrepareError::ConversionFailed(msg),
            MediaError::ProbeFailed(msg) => PrepareError::ProbeFailed(msg),
        }
    }
}

/// Advisory classification of a prepared reference clip. Never blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceAssessment {
    TooShort,
    TooLong,
    Ready,
}

impl ReferenceAssessment {
    pub fn classify(duration_seconds: f64) -> Self {
        if duration_seconds < MIN_RECOMMENDED_SECONDS {
            ReferenceAssessment::TooShort
        } else if duration_seconds > MAX_RECOMMENDED_SECONDS {
            ReferenceAssessment::TooLong
        } else {
            ReferenceAssessment::Ready
        }
    }

    /// The single advisory line reported to the operator.
    pub fn advisory(&self) -> &'static str {
        match self {
            ReferenceAssessment::TooShort => {
                "Warning: Audio is shorter than 6 seconds. Quality may suffer."
            }
            ReferenceAssessment::TooLong => {
                "Warning: Audio is longer than 30 seconds. Consider trimming."
            }
            ReferenceAssessment::Ready => "Audio is ready for voice cloning!",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrepareOptions {
    pub output: Option<PathBuf>,
    pub start: Option<f64>,
    pub duration: Option<f64>,
}

#[derive(Debug)]
pub struct PrepareReport {
    pub output: PathBuf,
    pub input_duration: f64,
    pub output_duration: f64,
    pub assessment: ReferenceAssessment,
}

/// Derive the default output path: `<stem>_prepared.wav` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    input.with_file_name(format!("{stem}_prepared.wav"))
}

/// Orchestrates one reference-audio preparation run.
pub struct PrepareService {
    media: MediaTool,
}

impl PrepareService {
    pub fn new(media: MediaTool) -> Self {
        Self { media }
    }

    /// Transcode `input` into the fixed reference format and classify the
    /// result. The tool check runs before any file check so a missing ffmpeg
    /// is reported first.
    pub async fn prepare(
        &self,
        input: &Path,
        options: PrepareOptions,
    ) -> Result<PrepareReport, PrepareError> {
        self.media.check_available().await?;

        if !input.exists() {
            return Err(PrepareError::InputNotFound(input.display().to_string()));
        }

        let output = options
            .output
            .unwrap_or_else(|| default_output_path(input));
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let input_duration = self.media.probe_duration(input).await?;

        self.media
            .convert(input, &output, options.start, options.duration)
            .await?;

        let output_duration = self.media.probe_duration(&output).await?;
        let assessment = ReferenceAssessment::classify(output_duration);

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            input_duration,
            output_duration,
            ?assessment,
            "Reference audio prepared"
        );

        Ok(PrepareReport {
            output,
            input_duration,
            output_duration,
            assessment,
        })
    }
}
