use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voxclone_server::controllers::SynthesisController;
use voxclone_server::domain::speaker::SpeakerLibrary;
use voxclone_server::domain::synthesis::SynthesisService;
use voxclone_server::infrastructure::config::{Config, LogFormat};
use voxclone_server::infrastructure::engine::SidecarEngine;
use voxclone_server::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoxClone server on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        data_dir = %config.data_dir.display(),
        device = config.device.as_str(),
        "Speaker library and device configuration"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the engine (owns the external model lifecycle)
    let engine = Arc::new(SidecarEngine::new());

    // 2. Instantiate the speaker library
    let speaker_library = Arc::new(SpeakerLibrary::new(config.data_dir.clone()));

    // 3. Instantiate services (inject engine and library)
    let synthesis_service = Arc::new(SynthesisService::new(
        engine.clone(),
        speaker_library,
        config.default_speaker.clone(),
        config.default_language.clone(),
    ));

    // 4. Instantiate controllers (inject services)
    let synthesis_controller = Arc::new(SynthesisController::new(synthesis_service));

    // Kick off the one-time model load. The listener serves immediately;
    // /synthesize answers 503 and /health reports model_loaded=false until
    // the load completes.
    let model_command = config.model_command();
    let device = config.device.as_str().to_string();
    let load_engine = engine.clone();
    tokio::spawn(async move {
        tracing::info!(device = %device, "Loading voice-cloning model...");
        if let Err(e) = load_engine.load(&model_command, &device).await {
            tracing::error!(error = %e, "Model failed to load; synthesis will stay unavailable");
        }
    });

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(config, synthesis_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voxclone_server=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voxclone_server=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
