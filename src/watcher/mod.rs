//! Figures-file watching.
//!
//! The tax table is hand-edited once a year; when the app runs with
//! `--figures`, changes to that file re-parse and land in the event loop as
//! `FiguresReloaded`. A notify watcher provides immediacy and a modification-
//! time poll backstops filesystems where change notification is unreliable;
//! reloads are idempotent, so an occasional double fire is harmless.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::WatcherError;
use crate::event::AppEvent;
use crate::tax::TaxTable;

/// Result type for watcher operations
pub type WatcherResult<T> = Result<T, WatcherError>;

/// Poll interval for the modification-time backstop.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Start watching the figures file and return a channel of reload events.
///
/// # Imperative Shell
/// All I/O lives here; parsing goes through `TaxTable::load` and the pure
/// core only ever sees complete `AppEvent`s.
pub fn start_watching(figures_path: PathBuf) -> WatcherResult<mpsc::Receiver<AppEvent>> {
    let (tx, rx) = mpsc::channel();

    // Watch the parent directory so editor save-by-rename and file recreation
    // are still observed.
    let watch_dir = figures_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let tx_watcher = tx.clone();
    let watched_file = figures_path.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            handle_watch_event(res, &watched_file, &tx_watcher);
        },
        Config::default().with_poll_interval(Duration::from_millis(200)),
    )?;
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    // Modification-time poll backstop
    let poll_path = figures_path.clone();
    let tx_poll = tx.clone();
    std::thread::spawn(move || {
        let mut last_seen = modified_time(&poll_path);
        loop {
            std::thread::sleep(POLL_INTERVAL);
            let current = modified_time(&poll_path);
            if current != last_seen {
                last_seen = current;
                if current.is_some() && reload_figures(&poll_path, &tx_poll).is_err() {
                    return;
                }
            }
        }
    });

    // Keep the notify watcher alive for the life of the process
    std::thread::spawn(move || {
        let _watcher = watcher;
        loop {
            std::thread::sleep(Duration::from_secs(1));
        }
    });

    Ok(rx)
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Handles a single watch event; only changes to the figures file matter.
fn handle_watch_event(
    res: Result<notify::Event, notify::Error>,
    figures_path: &Path,
    tx: &mpsc::Sender<AppEvent>,
) {
    match res {
        Ok(event) => {
            if event.paths.iter().any(|path| path == figures_path) && figures_path.exists() {
                let _ = reload_figures(figures_path, tx);
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "figures watcher error");
            let _ = tx.send(AppEvent::Error {
                source: "figures_watcher".to_string(),
                error: WatcherError::Notify(e.to_string()).into(),
            });
        }
    }
}

/// Re-parse the figures file and emit the result. Returns Err only when the
/// receiving side is gone and the thread should exit.
fn reload_figures(path: &Path, tx: &mpsc::Sender<AppEvent>) -> Result<(), ()> {
    match TaxTable::load(path) {
        Ok(table) => tx
            .send(AppEvent::FiguresReloaded(table))
            .map_err(|_| ()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "figures reload failed");
            tx.send(AppEvent::Error {
                source: path.display().to_string(),
                error: e.into(),
            })
            .map_err(|_| ())
        }
    }
}
