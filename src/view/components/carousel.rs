//! Testimonials slider widget.
//!
//! Renders into the fixed row slots layout reserves for it: visible cards
//! side by side, one dot per page, and prev/next controls that dim at the
//! ends.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::layout::wrap;
use crate::app::{AppState, Focus};
use crate::model::Theme;

/// Column width of one card, separator included.
const CARD_WIDTH: usize = 26;

/// One row of the carousel widget. `line` indexes into the slot rows layout
/// reserved (see `CAROUSEL_ROWS`).
pub fn carousel_line(state: &AppState, line: usize) -> Line<'static> {
    match line {
        0 | 1 => quote_line(state, line),
        2 => client_line(state),
        3 => Line::default(),
        4 => dots_line(state),
        5 => controls_line(state),
        _ => Line::default(),
    }
}

fn cards(state: &AppState) -> Vec<&crate::model::Testimonial> {
    state
        .carousel
        .visible_range()
        .filter_map(|i| state.content.testimonials.get(i))
        .collect()
}

fn pad(text: String) -> String {
    let mut padded: String = text.chars().take(CARD_WIDTH - 2).collect();
    while padded.chars().count() < CARD_WIDTH {
        padded.push(' ');
    }
    padded
}

fn quote_line(state: &AppState, line: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for card in cards(state) {
        let quote_lines = wrap(&card.quote, CARD_WIDTH - 4);
        let text = quote_lines
            .get(line)
            .cloned()
            .unwrap_or_default();
        spans.push(Span::styled(
            pad(format!("“{}", text)),
            Style::default()
                .fg(Theme::TEXT)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

fn client_line(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for card in cards(state) {
        spans.push(Span::styled(
            pad(format!("— {}", card.client)),
            Style::default().fg(Theme::MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

/// One dot per page, the active page filled.
fn dots_line(state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for page in 0..state.carousel.page_count() {
        let (glyph, color) = if page == state.carousel.page() {
            ("●", Theme::DOT_ACTIVE)
        } else {
            ("○", Theme::DOT_INACTIVE)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn controls_line(state: &AppState) -> Line<'static> {
    let carousel = &state.carousel;
    let active = Style::default().fg(Theme::INFO);
    let disabled = Style::default().fg(Theme::HIDDEN_TEXT);
    let mut label_style = Style::default().fg(Theme::MUTED_TEXT);
    if state.focus == Focus::Carousel {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "‹ prev",
            if carousel.at_first() { disabled } else { active },
        ),
        Span::styled(
            format!("   {} / {}   ", carousel.page() + 1, carousel.page_count()),
            label_style,
        ),
        Span::styled(
            "next ›",
            if carousel.at_last() { disabled } else { active },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layout::CAROUSEL_ROWS;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn every_slot_line_renders() {
        let state = AppState::new(2026);
        for line in 0..CAROUSEL_ROWS {
            let _ = carousel_line(&state, line);
        }
    }

    #[test]
    fn dots_match_page_count() {
        let state = AppState::new(2026);
        let dots = text_of(&dots_line(&state));
        let filled = dots.matches('●').count();
        let empty = dots.matches('○').count();
        assert_eq!(filled, 1);
        assert_eq!(filled + empty, state.carousel.page_count());
    }

    #[test]
    fn active_dot_follows_page() {
        let mut state = AppState::new(2026);
        state.carousel.next();
        let dots = text_of(&dots_line(&state));
        let first_filled = dots.find('●').unwrap();
        let first_empty = dots.find('○').unwrap();
        assert!(first_empty < first_filled);
    }

    #[test]
    fn controls_show_page_position() {
        let state = AppState::new(2026);
        let controls = text_of(&controls_line(&state));
        assert!(controls.contains("1 / 3"));
        assert!(controls.contains("prev"));
        assert!(controls.contains("next"));
    }

    #[test]
    fn client_row_shows_visible_cards_only() {
        let state = AppState::new(2026);
        let clients = text_of(&client_line(&state));
        // 80-column default viewport shows 2 cards
        assert_eq!(state.carousel.visible(), 2);
        assert!(clients.contains("Whitfield"));
        assert!(clients.contains("Castellanos"));
        assert!(!clients.contains("Lindqvist"));
    }
}
