//! Implementation of the `gpic <folder>` command.
//!
//! Startup order:
//! 1. Load config (file, then CLI overrides)
//! 2. Resolve the folder, compile the extension whitelist and page templates
//! 3. Bind the listener, falling back once to an OS-assigned port
//! 4. Open the browser (best effort) and serve until stopped

use crate::browser::open_url;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::FolderContext;
use crate::error::{GpicError, Result};
use crate::render::Pages;
use crate::scan::ImageMatcher;
use crate::server::{AppState, bind_with_fallback, public_url, serve};
use tracing::{info, warn};

/// Execute the serve command.
pub fn cmd_serve(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let folder = FolderContext::resolve(&cli.folder, &config)?;
    let matcher = ImageMatcher::from_config(&config)?;
    let pages = Pages::compile()?;
    info!(
        "reviewing {} (quarantine: {}, recursive: {})",
        folder.root.display(),
        folder.quarantine_dir.display(),
        config.recursive
    );

    let state = AppState::new(folder, matcher, pages, config.recursive);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| GpicError::ServerError(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(serve_folder(config, state))
}

async fn serve_folder(config: Config, state: AppState) -> Result<()> {
    let bound = bind_with_fallback(&config.bind_address, &config.fallback_address()).await?;
    let url = public_url(&config.bind_address, bound.local_addr);

    println!("Starting server at {}", url);
    if bound.fell_back {
        info!("{} was unavailable, serving on {}", config.bind_address, url);
    }

    if config.open_browser
        && let Err(e) = open_url(&url)
    {
        warn!("{}", e);
    }

    serve(bound.listener, state).await
}

/// Build the effective config: the `--config` file (or defaults) with CLI flags applied.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if cli.recursive {
        config.recursive = true;
    }
    if cli.no_open {
        config.open_browser = false;
    }

    Ok(config)
}
