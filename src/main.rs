use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use warp_palette::app::{
    catalog,
    config::{self, WarpConfig},
    r#loop::run_loop,
    state::AppState,
};
use warp_palette::domain::browser::{BrowserFacade, PaletteSignal};
use warp_palette::infrastructure::background::{BackgroundProcess, Disconnected};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn setup_logging(config_dir: &std::path::Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(config_dir)?;
    let file_appender = tracing_appender::rolling::never(config_dir, "warp.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything fallible that does not need the terminal happens first, so
    // a failure never leaves the terminal in raw mode.
    let config_dir = config::config_dir().context("could not determine a home directory")?;
    let _log_guard = setup_logging(&config_dir)?;
    let config = WarpConfig::load();

    let socket_path = config
        .resolved_socket_path()
        .context("could not determine a home directory")?;
    let (facade, signals): (Arc<dyn BrowserFacade>, _) =
        match BackgroundProcess::connect(&socket_path).await {
            Ok((process, signals)) => (Arc::new(process), signals),
            Err(error) => {
                tracing::warn!(%error, "running without a background process");
                // Nothing will ever send on this channel; the palette still
                // works for local commands.
                let (_tx, rx) = tokio::sync::mpsc::channel::<PaletteSignal>(1);
                (Arc::new(Disconnected), rx)
            }
        };

    let app_state = AppState::new(catalog::builtin_commands(), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, facade, signals).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
