//! CLI entrypoint for polls
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use polls_infrastructure::{
    ConfigLoader, FileConfig, SystemClock, TokenAuthenticator, open_repository,
};
use polls_presentation::{AppState, Cli, router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags win over every config source
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(url) = &cli.database {
        config.database.url = url.clone();
    }

    let log_file = cli
        .log_file
        .as_deref()
        .or(config.logging.file.as_deref().map(Path::new));
    let _guard = init_logging(cli.verbose, log_file)?;

    info!("Starting polls");

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration ({} error(s))", issues.iter().filter(|i| i.is_error()).count());
    }

    // === Dependency Injection ===
    let repository = open_repository(&config.database)
        .await
        .with_context(|| format!("Failed to open database '{}'", config.database.url))?;
    let authenticator = TokenAuthenticator::from_users(&config.users);
    if authenticator.is_empty() {
        info!("No accounts configured; every request is anonymous");
    }

    let state = AppState::new(repository, Arc::new(SystemClock), Arc::new(authenticator))?
        .with_behavior(config.polls.to_behavior());
    let app = router(state);

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Console logging filtered by `RUST_LOG` or the `-v` count, plus an
/// optional non-blocking file writer. The returned guard must outlive the
/// server so buffered lines are flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
