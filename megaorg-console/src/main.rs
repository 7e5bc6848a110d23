//! # Mega Org Console
//!
//! Terminal dashboard for the Mega Org task administration API. Renders the
//! sidebar-plus-content shell with ratatui and talks to the API through the
//! `megaorg-client` stores.
//!
//! ## Usage
//!
//! ```bash
//! API_BASE_URL=http://localhost:3010/api cargo run -p megaorg-console
//! ```

use std::io;
use std::sync::Arc;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use megaorg_client::{ApiClient, ApiTaskStore, ApiUserStore, ClientConfig};
use megaorg_console::app::App;
use megaorg_console::commands::Dispatcher;
use megaorg_console::{input, views};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the terminal UI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "megaorg_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Mega Org Console v{} starting", env!("CARGO_PKG_VERSION"));

    let client = ApiClient::new(&config)?;
    let tasks = Arc::new(ApiTaskStore::new(client.clone()));
    let users = Arc::new(ApiUserStore::new(client));

    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(tasks, users, tx.clone());
    input::spawn(tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, dispatcher, rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dispatcher: Dispatcher,
    mut events: mpsc::UnboundedReceiver<megaorg_console::commands::AppEvent>,
) -> anyhow::Result<()> {
    let mut app = App::new();

    loop {
        terminal.draw(|f| views::draw(f, &app))?;

        let Some(event) = events.recv().await else {
            break;
        };
        let commands = app.handle_event(event);
        dispatcher.dispatch_all(commands);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
