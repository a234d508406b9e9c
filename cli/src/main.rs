//! CLI entrypoint for Sorting Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP API.

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use quiz_application::{ConversationLogger, LlmGateway, NoConversationLogger, RunQuizTurnUseCase};
use quiz_infrastructure::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiGateway,
    OpenAiSettings, Severity,
};
use quiz_presentation::{AppState, Cli, create_router};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::from)?
    };
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    let _log_guard = telemetry::init(cli.verbosity_filter(), &config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Sorting Quiz");

    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }
    if ConfigIssue::has_errors(&issues) {
        return Err(ConfigError::Invalid(issues).into());
    }

    // === Dependency Injection ===
    let gateway = build_gateway(&config)?;
    let transcript = build_transcript(&config)?;
    let quiz = RunQuizTurnUseCase::new(gateway)
        .with_behavior(config.behavior_config())
        .with_conversation_logger(transcript);

    let behavior = quiz.behavior();
    info!(
        model = quiz.model(),
        threshold = behavior.threshold.value(),
        renormalize = behavior.renormalize,
        timeout_secs = behavior.timeout.map(|t| t.as_secs()),
        max_retries = behavior.retry.max_retries,
        "Quiz configured"
    );

    let shutdown = CancellationToken::new();
    let state = Arc::new(AppState::new(quiz).with_shutdown(shutdown.clone()));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind to {}", config.server.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

fn build_gateway(config: &FileConfig) -> Result<Arc<dyn LlmGateway>> {
    let settings = OpenAiSettings {
        model: config.model.name.clone(),
        base_url: config.model.base_url.clone(),
        api_key: config.model.require_api_key()?,
        max_tokens: config.model.max_tokens,
        request_timeout: Duration::from_secs(config.model.request_timeout_seconds),
    };
    let gateway = OpenAiGateway::new(settings).context("failed to create model gateway")?;
    info!(endpoint = gateway.endpoint(), "Model gateway ready");
    Ok(Arc::new(gateway))
}

fn build_transcript(config: &FileConfig) -> Result<Arc<dyn ConversationLogger>> {
    let Some(path) = &config.logging.transcript else {
        return Ok(Arc::new(NoConversationLogger));
    };
    let logger = JsonlConversationLogger::open(path)
        .with_context(|| format!("failed to open transcript {}", path))?;
    info!(path = %logger.path().display(), "Writing transcript");
    Ok(Arc::new(logger))
}

/// Resolve on Ctrl-C, cancelling in-flight turns.
async fn shutdown_signal(token: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    token.cancel();
}
