use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::theme::Theme;

/// Render the help overlay.
/// Displayed as a centered popup when show_help is true; any key dismisses it.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACCENT)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn build_help_text() -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(Theme::INFO)),
            Span::raw(action),
        ])
    };

    vec![
        heading("Page"),
        entry("j/k ↓/↑", "scroll one row"),
        entry("Ctrl+d/u", "scroll half a page"),
        entry("1-7", "jump to a section"),
        entry("t", "back to top (once visible)"),
        Line::default(),
        heading("Menu"),
        entry("m", "open or close the menu"),
        entry("Enter", "follow the selected link"),
        entry("Esc", "close, focus returns to the toggle"),
        Line::default(),
        heading("Widgets"),
        entry("Tab", "cycle focus: page, menu, slider, FAQ, bios, form"),
        entry("←/→", "testimonials slider"),
        entry("Enter", "toggle the selected panel / submit the form"),
        Line::default(),
        heading("Other"),
        entry("?", "this help"),
        entry("q", "quit"),
    ]
}

/// Create a centered rect using percentage of the available area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
