//! Nav overlay, the mobile menu analog. Modal while open: the page behind it
//! is scroll-locked.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::model::{NavTarget, Theme};

const MENU_WIDTH: u16 = 32;

/// Render the open menu anchored to the right edge of the content area.
pub fn render_menu(frame: &mut Frame, content_area: Rect, state: &AppState) {
    let width = MENU_WIDTH.min(content_area.width);
    let height = (state.content.nav.len() as u16 + 2).min(content_area.height);
    let menu_area = Rect {
        x: content_area.right().saturating_sub(width),
        y: content_area.y,
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = state
        .content
        .nav
        .iter()
        .enumerate()
        .map(|(i, entry)| entry_line(state, i, &entry.label, &entry.target))
        .collect();

    let menu = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACCENT)),
        )
        .style(Style::default().bg(Theme::MENU_BG).fg(Theme::TEXT));

    frame.render_widget(menu, menu_area);
}

fn entry_line(state: &AppState, index: usize, label: &str, target: &NavTarget) -> Line<'static> {
    let marker = match target {
        NavTarget::Section(_) => "",
        NavTarget::External { .. } => " ↗",
    };
    let mut style = Style::default().fg(Theme::TEXT);
    if index == state.menu_selected {
        style = style.bg(Theme::SELECTION_BG).add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(format!(" {}{}", label, marker), style))
}
