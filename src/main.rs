use compat_engine::config::{LoggingSettings, Settings};
use compat_engine::models::EvaluationRequest;
use compat_engine::EngineError;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Initialize the tracing subscriber; logs go to stderr so stdout stays pure JSON
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Read the request from the path given as the first argument, or stdin
fn read_request() -> Result<EvaluationRequest, EngineError> {
    let raw = match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading request from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request: EvaluationRequest = serde_json::from_str(&raw)?;
    request.validate()?;
    for candidate in &request.candidates {
        candidate.validate()?;
    }

    Ok(request)
}

fn run(settings: &Settings) -> Result<(), EngineError> {
    let engine = settings.engine();
    info!(
        "Engine initialized (max failed criteria: {}, tolerances: {:?})",
        engine.max_failed_criteria(),
        engine.tolerances()
    );

    let request = read_request()?;
    let response = engine.evaluate(&request);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &response)?;
    writeln!(out)?;

    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(&settings.logging);

    if let Some(e) = load_error {
        error!("Failed to load configuration: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
