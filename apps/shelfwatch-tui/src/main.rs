//! Shelfwatch - Inventory Health Console
//!
//! Terminal dashboard over the latest inventory snapshot.

mod app;
mod keybindings;
mod logging;
mod mode;
mod views;
mod widgets;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use shelfwatch_client::SnapshotFetcher;
use shelfwatch_core::{DashboardConfig, DashboardEvent};

use app::App;

/// How long to wait for input before checking for fetch results
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The log file location is itself configured, so the config is read
    // before logging starts and its source is reported afterwards.
    let config = DashboardConfig::load()?;
    let log_path = logging::init(&config.log)?;
    let config_source = DashboardConfig::source_path()
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    info!(
        url = %config.latest_url(),
        config = %config_source,
        log = %log_path.display(),
        version = shelfwatch_core::version(),
        "Starting shelfwatch"
    );

    // One fetch per session, reported back over a channel.
    let fetcher = SnapshotFetcher::new(&config)?;
    let (tx, mut rx) = mpsc::channel::<DashboardEvent>(1);
    let fetch_task = tokio::spawn(async move {
        let event = fetcher.fetch_event().await;
        if tx.send(event).await.is_err() {
            debug!("Dashboard closed before the snapshot arrived");
        }
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.latest_url());
    let res = run_app(&mut terminal, &mut app, &mut rx);

    // A fetch still in flight must not outlive the dashboard.
    fetch_task.abort();
    rx.close();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }
    info!("Shelfwatch stopped");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetch_results: &mut mpsc::Receiver<DashboardEvent>,
) -> io::Result<()> {
    loop {
        while let Ok(event) = fetch_results.try_recv() {
            app.dispatch(event);
        }

        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}
