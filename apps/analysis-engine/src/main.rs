//! Analysis Engine Binary
//!
//! Starts the options risk/reward analysis HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin analysis-engine
//! ```
//!
//! # Environment Variables
//!
//! - `ANALYSIS_ENGINE_CONFIG`: Path to the YAML config (default: config.yaml,
//!   built-in defaults when that file is absent)
//! - `HTTP_PORT`: Overrides `server.http_port`
//! - `RUST_LOG`: Overrides `observability.logging.level`

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use analysis_engine::application::use_cases::AnalyzePortfolioUseCase;
use analysis_engine::config::{Config, load_config_or_default};
use analysis_engine::domain::analysis::PayoffAnalyzer;
use analysis_engine::infrastructure::http::{AppState, create_router};
use analysis_engine::observability::{MetricsConfig, init_logging, init_metrics};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_path = load_dotenv();

    let config_path = std::env::var("ANALYSIS_ENGINE_CONFIG").ok();
    let mut config = load_config_or_default(config_path.as_deref())?;
    apply_env_overrides(&mut config);

    init_logging(&config.observability.logging)?;

    tracing::info!("Starting Analysis Engine");
    match &dotenv_path {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        None => tracing::debug!("No .env file found"),
    }
    log_config(&config);

    if config.observability.metrics.enabled {
        let addr: SocketAddr = format!(
            "{}:{}",
            config.server.bind_address, config.observability.metrics.port
        )
        .parse()?;
        init_metrics(&MetricsConfig::with_addr(addr))?;
    }

    let policy = config.analysis.sampling_policy()?;
    let state = AppState {
        analyze: Arc::new(AnalyzePortfolioUseCase::new(PayoffAnalyzer::new(policy))),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /analyze");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Analysis engine stopped");
    Ok(())
}

/// Load .env from the current or an ancestor directory.
///
/// Returns the file that was loaded, if any.
fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors().skip(1).find_map(|dir| {
        let env_path = dir.join(".env");
        dotenvy::from_path(&env_path).ok().map(|()| env_path)
    })
}

/// Apply environment variables that take precedence over the config file.
fn apply_env_overrides(config: &mut Config) {
    if let Some(port) = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .filter(|p| *p != 0)
    {
        config.server.http_port = port;
    }
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        price_step = %config.analysis.price_step,
        price_margin = %config.analysis.price_margin,
        max_points = config.analysis.max_points,
        metrics_enabled = config.observability.metrics.enabled,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
