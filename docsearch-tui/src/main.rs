mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::Result;
use app::{App, RouteNavigator};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use docsearch::{DocumentSource, SearchSession, TokioScheduler};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env.docsearch
    dotenvy::from_filename(".env.docsearch").ok();

    let cli = cli::Cli::parse();

    // Locating the config file must not depend on it parsing.
    if let cli::Commands::ConfigPath = cli.command {
        let path = config::AppConfig::config_path()?;
        if config::AppConfig::write_default_if_missing(&path)? {
            println!("Created default config at {}", path.display());
        }
        println!("{}", path.display());
        return Ok(());
    }

    logging::init_file_tracing(&config::AppConfig::log_path()?)?;
    let cfg = config::AppConfig::load()?;
    info!(title = %cfg.title, "Starting docsearch-tui");

    let source = match cli.command {
        cli::Commands::Run { site_map } => {
            let site_map = site_map.or_else(|| cfg.site_map.clone());
            bootstrap::page_tree_source(site_map.as_deref(), cfg.search.max_tree_depth)?
        }
        cli::Commands::Demo => bootstrap::demo_source(),
        cli::Commands::ConfigPath => return Ok(()),
    };

    run_tui(cfg, source).await
}

async fn run_tui(cfg: config::AppConfig, source: Arc<dyn DocumentSource>) -> Result<()> {
    let store = bootstrap::history_store(&cfg)?;
    let pages = bootstrap::load_pages(source.as_ref()).await;

    let (navigator, routes) = RouteNavigator::channel();
    let (scheduler, fired) = TokioScheduler::new();
    let session = SearchSession::mount(source, store, navigator, scheduler, cfg.search.clone());

    let mut app = App::new(&cfg, session, pages, Instant::now());
    if app.pages.is_empty() {
        app.status_message = Some("No pages loaded, see the log for details".to_string());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, runtime::Inbox { fired, routes }).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {:?}", err);
    }
    info!("docsearch-tui stopped");
    res
}
