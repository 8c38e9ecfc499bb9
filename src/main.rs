// lotovista - live terminal dashboard for lottery draw results
//
// Polls the results feed on the draw schedule and renders the latest draws
// as cards grouped by time slot, with a Honduras wall clock and a lucky-
// numbers roulette on the side.

mod app;
mod clock;
mod feed;
mod pipeline;
mod poller;
mod theme;
mod ui;

use anyhow::Result;
use app::{event::handle_key_event, AppState};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use poller::Poller;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Results endpoint serving the draws JSON
    #[arg(long, default_value = "http://localhost:8000/api/resultados-v2")]
    endpoint: String,

    /// Page path deciding which game to show, e.g. "/pega-3";
    /// unrecognized paths show every game
    #[arg(long, default_value = "/")]
    page: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging()?;

    let category = pipeline::classify(&args.page);
    tracing::info!(page = %args.page, ?category, endpoint = %args.endpoint, "starting");

    let mut app = AppState::new(category);
    let mut poller = Poller::new(args.endpoint)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &mut poller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }
    Ok(())
}

/// The TUI owns stdout, so logs go to a file next to the binary.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", "lotovista.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("lotovista=info".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    poller: &mut Poller,
) -> Result<()> {
    loop {
        app.on_tick(poller);
        terminal.draw(|f| ui::draw(f, app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app::config::UI_TICK)? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, poller, key.code);
            }
        }
    }
}
