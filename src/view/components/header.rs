use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Focus};
use crate::model::{SectionId, Theme};

/// Render the fixed site header: firm name with the menu toggle, the inline
/// section nav, and a bottom rule. Past the scroll threshold the whole bar
/// renders elevated.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = if state.header_elevated() {
        Theme::HEADER_BG_ELEVATED
    } else {
        Theme::HEADER_BG
    };

    let lines = vec![
        brand_line(state),
        nav_line(),
        rule_line(state, area.width as usize),
    ];

    let header = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(header, area);
}

fn brand_line(state: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " HARGROVE & MERCER",
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Attorneys at Law", Style::default().fg(Theme::MUTED_TEXT)),
        Span::raw("   "),
        menu_toggle_span(state),
    ])
}

/// The toggle control mirrors the menu's expanded state, the aria-expanded
/// analog of the markup it drives.
fn menu_toggle_span(state: &AppState) -> Span<'static> {
    let label = if state.menu.is_open() {
        "[≡ menu ▾]"
    } else {
        "[≡ menu]"
    };
    let mut style = Style::default().fg(Theme::INFO);
    if state.focus == Focus::MenuToggle {
        style = style.bg(Theme::SELECTION_BG);
    }
    Span::styled(label, style)
}

fn nav_line() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, section) in SectionId::ALL.iter().enumerate() {
        spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(Theme::INFO),
        ));
        spans.push(Span::styled(
            format!(" {}  ", section.title()),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

fn rule_line(state: &AppState, width: usize) -> Line<'static> {
    let style = if state.header_elevated() {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::MUTED_TEXT)
    };
    Line::from(Span::styled("─".repeat(width), style))
}
