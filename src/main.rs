use std::io::{self, stdout};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod app;
mod cli;
mod cost;
mod error;
mod models;
mod theme;
mod ui;

use api::ApiClient;
use app::{App, AppEvent, FeatureRequest};
use error::Result;

fn main() -> Result<()> {
    init_logger();
    let config = cli::parse_args()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(ApiClient::new(config.api_base));
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Categories load once on startup
    {
        let client = Arc::clone(&client);
        let tx = tx.clone();
        runtime.spawn(async move {
            let result = client.fetch_categories().await;
            let _ = tx.send(AppEvent::Categories(result));
        });
    }

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let mut app = App::new();
    let result = run(&mut terminal, &mut app, &rx, &runtime, &client, &tx);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
    runtime: &tokio::runtime::Runtime,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    loop {
        // Apply any fetch results that arrived since the last tick
        while let Ok(app_event) = rx.try_recv() {
            match app_event {
                AppEvent::Categories(result) => app.on_categories(result),
                AppEvent::Features { seq, result } => app.on_features(seq, result),
            }
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(request) = app.handle_key(key.code) {
                    spawn_feature_fetch(runtime, client, tx, request);
                }
            }
        }

        if app.quit {
            break;
        }
    }

    Ok(())
}

/// Start a feature fetch for a newly selected category. The request carries
/// the sequence it was issued under so stale responses can be discarded.
fn spawn_feature_fetch(
    runtime: &tokio::runtime::Runtime,
    client: &Arc<ApiClient>,
    tx: &mpsc::Sender<AppEvent>,
    request: FeatureRequest,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client.fetch_features(request.category_id).await;
        let _ = tx.send(AppEvent::Features {
            seq: request.seq,
            result,
        });
    });
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("appcost_tui=warn"));

    // Stderr only; stdout belongs to the terminal UI
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
