use clap::Parser;
use std::path::PathBuf;

use voxclone_server::domain::audio;
use voxclone_server::infrastructure::config::Config;
use voxclone_server::infrastructure::engine::{SidecarEngine, TtsEngine};

/// Synthesize speech once with voice cloning.
///
/// Loading the model takes seconds to minutes; for repeated synthesis run
/// the server binary instead.
#[derive(Parser, Debug)]
#[command(name = "synthesize")]
struct Args {
    /// Text to synthesize
    text: String,

    /// Path to speaker reference audio
    #[arg(short, long, default_value = "data/speaker.wav")]
    speaker: PathBuf,

    /// Output path
    #[arg(short, long, default_value = "outputs/output.wav")]
    output: PathBuf,

    /// Language code
    #[arg(short, long, default_value = "ru")]
    language: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    // Cheap check first; the model load is the expensive part
    if !args.speaker.exists() {
        eprintln!("Error: Speaker file not found: {}", args.speaker.display());
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    println!("Loading model (device: {})...", config.device.as_str());
    let engine = SidecarEngine::new();
    engine
        .load(&config.model_command(), config.device.as_str())
        .await?;
    if let Some(device) = engine.status().device() {
        println!("Model loaded on {device}");
    }

    let preview: String = args.text.chars().take(50).collect();
    println!("Synthesizing: {preview}...");
    let samples = engine
        .synthesize(&args.text, &args.speaker, &args.language)
        .await?;

    audio::write_wav_file(&args.output, &samples)?;
    println!("Saved to: {}", args.output.display());

    Ok(())
}
