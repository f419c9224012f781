use clap::Parser;
use std::path::PathBuf;

use voxclone_server::domain::audio::SAMPLE_RATE;
use voxclone_server::domain::prepare::{PrepareOptions, PrepareService};
use voxclone_server::infrastructure::media::MediaTool;

/// Prepare reference audio for voice cloning: WAV, 22050 Hz, mono, 16-bit PCM.
#[derive(Parser, Debug)]
#[command(name = "prepare_audio")]
struct Args {
    /// Input audio file (any format)
    input: PathBuf,

    /// Output WAV file (default: <input>_prepared.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start time in seconds
    #[arg(short, long)]
    start: Option<f64>,

    /// Duration in seconds (recommended: 10-15)
    #[arg(short, long)]
    duration: Option<f64>,
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

    let service = PrepareService::new(MediaTool::default());
    let options = PrepareOptions {
        output: args.output,
        start: args.start,
        duration: args.duration,
    };

    let report = match service.prepare(&args.input, options).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("Input:  {}", args.input.display());
    println!("Output: {}", report.output.display());
    println!("Input duration: {:.1}s", report.input_duration);
    println!("Output duration: {:.1}s", report.output_duration);
    println!("Format: WAV, {SAMPLE_RATE} Hz, mono");
    println!("{}", report.assessment.advisory());
}
