use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Focus};
use crate::model::Theme;

/// Render the status bar: keybinding hints for the focused region, the
/// back-to-top control once it is visible, and a non-fatal error count.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(build_footer_text(state)).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on focus and scroll state.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();

    let hint = |spans: &mut Vec<Span<'static>>, keys: &'static str, action: &'static str| {
        spans.push(Span::styled(keys, Style::default().fg(Theme::INFO)));
        spans.push(Span::raw(format!(":{} ", action)));
    };

    hint(&mut spans, "q", "quit");

    if state.menu.is_open() {
        hint(&mut spans, "j/k", "choose");
        hint(&mut spans, "Enter", "go");
        hint(&mut spans, "Esc", "close");
    } else {
        match state.focus {
            Focus::Form => {
                hint(&mut spans, "Tab", "field");
                hint(&mut spans, "Enter", "send");
                hint(&mut spans, "Esc", "leave");
            }
            Focus::Faq | Focus::Bios => {
                hint(&mut spans, "j/k", "choose");
                hint(&mut spans, "Enter", "toggle");
                hint(&mut spans, "Tab", "focus");
            }
            Focus::Carousel => {
                hint(&mut spans, "←/→", "slide");
                hint(&mut spans, "Tab", "focus");
            }
            _ => {
                hint(&mut spans, "m", "menu");
                hint(&mut spans, "j/k", "scroll");
                hint(&mut spans, "1-7", "sections");
                hint(&mut spans, "Tab", "focus");
            }
        }
        hint(&mut spans, "?", "help");
    }

    if state.back_to_top_visible() {
        spans.push(Span::styled(
            " ↑ t",
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(":top "));
    }

    if !state.errors.is_empty() {
        spans.push(Span::styled(
            format!(" ⚠ {}", state.errors.len()),
            Style::default().fg(Theme::ERROR),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text_of(state: &AppState) -> String {
        build_footer_text(state)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn render_footer_does_not_panic() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = AppState::new(2026);
        terminal
            .draw(|frame| render_footer(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn default_footer_shows_page_hints() {
        let state = AppState::new(2026);
        let text = text_of(&state);
        assert!(text.contains("q:quit"));
        assert!(text.contains("m:menu"));
        assert!(text.contains("1-7:sections"));
    }

    #[test]
    fn menu_open_shows_menu_hints() {
        let mut state = AppState::new(2026);
        state.menu.toggle();
        let text = text_of(&state);
        assert!(text.contains("Enter:go"));
        assert!(text.contains("Esc:close"));
    }

    #[test]
    fn form_focus_shows_form_hints() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Form;
        let text = text_of(&state);
        assert!(text.contains("Enter:send"));
    }

    #[test]
    fn back_to_top_hint_appears_past_threshold() {
        let mut state = AppState::new(2026);
        assert!(!text_of(&state).contains("t:top"));
        state.scroll.scroll_by(50, 1000);
        assert!(text_of(&state).contains("t:top"));
    }

    #[test]
    fn error_count_appears() {
        let mut state = AppState::new(2026);
        state.push_error("figures.json: bad".into());
        assert!(text_of(&state).contains("⚠ 1"));
    }
}
