use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fsbrowse::app::App;
use fsbrowse::cli::parse_args;
use fsbrowse::config::{Config, Openers, Settings};
use fsbrowse::{BrowserState, LocalFileSystem};

fn init_logging(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn load_settings() -> Settings {
    match Config::load().await {
        Ok(config) => config.settings().await,
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    init_logging(cli.log_level.as_deref());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let settings = rt.block_on(load_settings());

    let start_dir = settings.initial_dir(cli.path);
    let browser = BrowserState::new(LocalFileSystem, Openers::load(), start_dir)?;
    info!(dir = %browser.current_dir().display(), "starting");

    let mut app = App::new(browser, cli.show_hidden || settings.show_hidden);
    let stdin = io::stdin();
    app.run(stdin.lock(), io::stdout())?;
    Ok(())
}
