mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use boardhost_common::errors::ConfigError;
use boardhost_config::schema::BoardhostConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = boardhost_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Boardhost crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// Load config from the `--config` override or the default location.
/// Logging is not up yet, so failures are returned for the caller to report.
fn load_config(args: &cli::Args) -> Result<BoardhostConfig, ConfigError> {
    match &args.config {
        Some(path) => boardhost_config::load_config_from(path),
        None => boardhost_config::load_config(),
    }
}

fn main() {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config (reported once logging is up)
    let loaded = load_config(&args);

    // Initialize logging: --log-level wins, then the configured level
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => format!("boardhost={level}"),
        (None, Ok(config)) => format!("boardhost={}", config.logging.level.as_directive()),
        (None, Err(_)) => "boardhost=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "boardhost=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Boardhost v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BoardhostConfig::default()
    });

    // Ensure platform directories exist
    if let Err(e) = boardhost_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Background runtime for process watching, window resolution and cleanup
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("boardhost-worker")
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start background runtime: {e}");
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::BoardhostApp::new(config, runtime, args.files, args.viewer);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    app.shutdown();
    tracing::info!("Shutdown complete");
}
