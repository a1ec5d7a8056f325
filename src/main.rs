use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use metrowatch::analytics::{self, AnalyticsClient};
use metrowatch::api::poller;
use metrowatch::config::{Config, ConfigStore};
use metrowatch::ui;
use metrowatch::ui::app::App;
use metrowatch::ui::events::EventHandler;

#[derive(Debug, Parser)]
#[command(
    name = "metrowatch",
    version,
    about = "Terminal dashboard for a metro crowd-monitoring service"
)]
struct Args {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the monitoring API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Override the poll interval in seconds.
    #[arg(long)]
    interval: Option<u64>,

    /// View shown at startup: map, dashboard or activity.
    #[arg(long)]
    view: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config_path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    config.apply_env_overrides();
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(interval) = args.interval {
        config.api.poll_interval_seconds = interval;
    }
    if let Some(view) = args.view {
        config.ui.default_view = view;
    }
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let analytics = if config.analytics.is_configured() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        runtime.spawn(analytics::run_worker(config.analytics.clone(), rx));
        AnalyticsClient::new(tx)
    } else {
        AnalyticsClient::disabled()
    };
    analytics.page_view();

    let tick_rate = Duration::from_millis(config.ui.tick_millis.max(50));
    let events = EventHandler::new(tick_rate);
    let (poller_tx, poller_rx) = tokio::sync::mpsc::channel(8);
    runtime.spawn(poller::run(config.api.clone(), events.sender(), poller_rx));

    let store = ConfigStore::new(config, config_path);
    let mut app = App::new(store, analytics);
    app.set_poller(poller_tx);

    ui::run(app, events, tick_rate)?;

    // The poller and analytics workers die with the runtime.
    runtime.shutdown_background();
    Ok(())
}

/// File logging only; the TUI owns stdout. Set `METROWATCH_LOG` to a
/// file path to enable it, `RUST_LOG` to adjust the filter.
fn init_tracing() {
    let Ok(log_path) = std::env::var("METROWATCH_LOG") else {
        return;
    };
    if log_path.is_empty() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
