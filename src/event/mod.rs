use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::error::SiteError;
use crate::tax::TaxTable;

/// All events that can occur in the application.
/// Sourced from keyboard input, the timer tick, terminal resizes and the
/// figures-file watcher.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event, timestamped by the shell (deadlines for form
    /// phases and menu navigation start from the keypress)
    Key { key: KeyEvent, at: DateTime<Utc> },

    /// Timer tick (drives scroll animation, reveal stagger, form phases,
    /// debounce and settle deadlines)
    Tick(DateTime<Utc>),

    /// Terminal resized; dimensions are cells, timestamp anchors the
    /// carousel-reset debounce window
    Resized {
        width: u16,
        height: u16,
        at: DateTime<Utc>,
    },

    /// The hand-edited figures file changed on disk and re-parsed cleanly
    FiguresReloaded(TaxTable),

    /// Error occurred (non-fatal - figures parse, I/O, watcher)
    Error { source: String, error: SiteError },
}
