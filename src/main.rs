use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Datelike, Utc};
use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use counsel_tui::{
    app::{update, AppState, PendingAnchor, Viewport},
    config::UiConfig,
    event::AppEvent,
    model::SectionId,
    tax::TaxTable,
    view::render,
    watcher,
};
use ratatui::{backend::CrosstermBackend, Terminal};

#[derive(Parser)]
#[command(name = "counsel-tui")]
#[command(about = "Terminal front-end for the Hargrove & Mercer site", long_about = None)]
struct Cli {
    /// Scroll to this section after load (the URL-fragment analog)
    #[arg(long, value_name = "SECTION")]
    anchor: Option<String>,

    /// JSON figures file replacing the builtin tax table (hot-reloaded)
    #[arg(long, value_name = "FILE")]
    figures: Option<PathBuf>,

    /// Header elevation threshold in layout units
    #[arg(long, value_name = "UNITS")]
    shadow_threshold: Option<u32>,

    /// Re-hide reveal blocks when they leave the viewport
    #[arg(long)]
    repeat_reveals: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = UiConfig::default();
    if let Some(threshold) = cli.shadow_threshold {
        config.shadow_threshold = threshold;
    }
    if cli.repeat_reveals {
        config.reveal_once = false;
    }

    // Load external figures when given; a broken file degrades to the builtin
    // table rather than refusing to start.
    let figures = match &cli.figures {
        Some(path) => TaxTable::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "falling back to builtin figures");
            TaxTable::builtin()
        }),
        None => TaxTable::builtin(),
    };

    let anchor_settle = config.anchor_settle;
    let mut state = AppState::with_parts(config, figures, Utc::now().year());

    if let Ok((width, height)) = crossterm::terminal::size() {
        state.viewport = Viewport { width, height };
        state
            .carousel
            .apply_resize(state.viewport.width_units(), state.config.breakpoints);
    }

    // Initial fragment: scroll after a short settle delay, like a page loaded
    // with a hash in the URL.
    if let Some(anchor) = &cli.anchor {
        match SectionId::from_anchor(anchor) {
            Some(section) => {
                state.pending_anchor = Some(PendingAnchor {
                    section,
                    at: Utc::now() + anchor_settle,
                });
            }
            None => tracing::warn!(anchor = %anchor, "unknown anchor section"),
        }
    }

    // Figures-file watcher (only when an external file is in play)
    let watcher_rx = match &cli.figures {
        Some(path) => Some(
            watcher::start_watching(path.clone())
                .map_err(|e| color_eyre::eyre::eyre!("failed to start figures watcher: {}", e))?,
        ),
        None => None,
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, state, watcher_rx.as_ref());

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    watcher_rx: Option<&std::sync::mpsc::Receiver<AppEvent>>,
) -> Result<()> {
    // 50ms tick drives the scroll animation, reveal stagger and form timers
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    loop {
        // Render current state
        terminal.draw(|frame| {
            render(&state, frame);
        })?;

        // Poll terminal events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    state = update(
                        state,
                        AppEvent::Key {
                            key,
                            at: Utc::now(),
                        },
                    );
                }
                Event::Resize(width, height) => {
                    state = update(
                        state,
                        AppEvent::Resized {
                            width,
                            height,
                            at: Utc::now(),
                        },
                    );
                }
                _ => {}
            }
        }

        // Drain figures watcher events
        if let Some(rx) = watcher_rx {
            while let Ok(event) = rx.try_recv() {
                state = update(state, event);
            }
        }

        // Tick event
        if last_tick.elapsed() >= tick_rate {
            state = update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        // Check quit condition
        if state.should_quit {
            break;
        }
    }

    Ok(())
}
