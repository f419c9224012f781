use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding reference-speaker audio files.
    pub data_dir: PathBuf,
    /// Invocation of the external model runtime (program plus arguments).
    pub model_command: String,
    pub device: DevicePreference,
    pub default_speaker: String,
    pub default_language: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Compute device the model should bind to. `Auto` keeps the runtime's own
/// capability probe (accelerated device if available, general-purpose
/// otherwise); the explicit variants override it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    Auto,
    Cpu,
    Cuda,
}

impl DevicePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevicePreference::Auto => "auto",
            DevicePreference::Cpu => "cpu",
            DevicePreference::Cuda => "cuda",
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            model_command: env::var("MODEL_COMMAND")
                .unwrap_or_else(|_| "xtts-runtime".to_string()),
            device: env::var("DEVICE")
                .unwrap_or_else(|_| "auto".to_string())
                .parse::<String>()
                .map(|s| match s.to_lowercase().as_str() {
                    "cpu" => DevicePreference::Cpu,
                    "cuda" => DevicePreference::Cuda,
                    _ => DevicePreference::Auto,
                })?,
            default_speaker: env::var("DEFAULT_SPEAKER")
                .unwrap_or_else(|_| "speaker.wav".to_string()),
            default_language: env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "ru".to_string()),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    /// The model runtime invocation split into program and arguments.
    pub fn model_command(&self) -> Vec<String> {
        self.model_command
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
