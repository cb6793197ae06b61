use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{AppState, FOOTER_ROWS, HEADER_ROWS};

pub mod components;
pub mod page;

pub use page::render_page;

/// Main view dispatcher: fixed header, scrollable page window, status footer.
/// The nav menu and help overlays draw on top when active.
pub fn render(state: &AppState, frame: &mut Frame) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(frame.area());

    components::header::render_header(frame, areas[0], state);
    page::render_page(frame, areas[1], state);
    components::footer::render_footer(frame, areas[2], state);

    if state.menu.is_open() {
        components::nav_menu::render_menu(frame, areas[1], state);
    }

    if state.show_help {
        components::help_overlay::render_help_overlay(frame);
    }
}
