use chrono::{DateTime, Utc};

use crate::app::{handle_key, AppState, Viewport};
use crate::event::AppEvent;

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O, no side effects - fully deterministic and unit testable.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Key { key, at } => handle_key(state, key, at),

        AppEvent::Tick(now) => {
            tick(&mut state, now);
            state
        }

        AppEvent::Resized { width, height, at } => {
            state.viewport = Viewport { width, height };

            // Past the collapse breakpoint the mobile menu cannot stay open;
            // this is immediate, only the carousel reset is debounced.
            if state.menu.is_open()
                && state.viewport.width_units() > state.config.menu_collapse_width
            {
                state.menu.close();
            }

            state.pending_carousel_reset = Some(at + state.config.resize_debounce);

            let max = state.max_scroll();
            state.scroll.clamp(max);
            state.observe_reveals(at);
            state
        }

        AppEvent::FiguresReloaded(figures) => {
            state.figures = figures;
            state.restamp();
            state
        }

        AppEvent::Error { source, error } => {
            state.push_error(format!("{}: {}", source, error));
            state
        }
    }
}

/// Advance every deadline-driven piece of state.
fn tick(state: &mut AppState, now: DateTime<Utc>) {
    // Scroll animation pauses while the menu locks the page.
    if !state.menu.scroll_locked() {
        state.scroll.animate();
    }

    // Deferred initial-load anchor scroll, once layout has settled.
    if let Some(pending) = state.pending_anchor {
        if now >= pending.at {
            state.pending_anchor = None;
            let top = state
                .layout()
                .section_top(pending.section)
                .min(state.max_scroll());
            state.scroll.start_smooth(top);
        }
    }

    // Debounced carousel reset after the last resize.
    if let Some(deadline) = state.pending_carousel_reset {
        if now >= deadline {
            state.pending_carousel_reset = None;
            state
                .carousel
                .apply_resize(state.viewport.width_units(), state.config.breakpoints);
        }
    }

    state.form.tick(now, &state.config);
    state.observe_reveals(now);
}
