use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppState, Focus};
use crate::model::{NavTarget, SectionId};

/// Half-page jump size for Ctrl+D / Ctrl+U
const PAGE_JUMP: isize = 10;

/// Pure navigation state transition function.
/// Takes current state + keyboard event + the keypress timestamp, returns new
/// state. No I/O, no side effects, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent, now: DateTime<Utc>) -> AppState {
    // Help overlay has priority: any key dismisses it
    if state.show_help {
        state.show_help = false;
        return state;
    }

    // Open menu is modal and locks page scrolling
    if state.menu.is_open() {
        return handle_menu_key(state, key, now);
    }

    // Focused form captures text input
    if state.focus == Focus::Form {
        return handle_form_key(state, key, now);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        KeyCode::Char('m') => open_menu(state),
        KeyCode::Char('?') => {
            state.show_help = true;
            state
        }
        KeyCode::Char('t') => back_to_top(state),
        KeyCode::Tab => {
            state.focus = state.focus.next();
            state
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            state
        }
        KeyCode::Char(c @ '1'..='7') => jump_to_section(state, c, now),
        KeyCode::Left => {
            state.carousel.prev();
            state
        }
        KeyCode::Right => {
            state.carousel.next();
            state
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            scroll_content(state, PAGE_JUMP, now)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            scroll_content(state, -PAGE_JUMP, now)
        }
        KeyCode::Char('j') | KeyCode::Down => move_down(state, now),
        KeyCode::Char('k') | KeyCode::Up => move_up(state, now),
        KeyCode::Enter | KeyCode::Char(' ') => activate(state, now),
        KeyCode::Esc => {
            // Leave any widget focus back to the page
            state.focus = Focus::Content;
            state
        }
        _ => state,
    }
}

/// Key handling while the nav overlay is open. The page is scroll-locked, so
/// only menu navigation and dismissal work here.
fn handle_menu_key(mut state: AppState, key: KeyEvent, now: DateTime<Utc>) -> AppState {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            state
        }
        KeyCode::Esc => {
            // Close and return focus to the toggle control
            state.menu.close();
            state.focus = Focus::MenuToggle;
            state
        }
        KeyCode::Char('m') => {
            state.menu.close();
            state
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let last = state.content.nav.len().saturating_sub(1);
            state.menu_selected = (state.menu_selected + 1).min(last);
            state
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
            state
        }
        KeyCode::Enter => activate_nav_entry(state, now),
        _ => state,
    }
}

/// Activate the selected nav entry. Same-page anchors close the menu, scroll
/// smoothly and record history; cross-page links with a fragment only close
/// the menu (navigation proceeds outside this program).
fn activate_nav_entry(mut state: AppState, now: DateTime<Utc>) -> AppState {
    let Some(entry) = state.content.nav.get(state.menu_selected).cloned() else {
        return state;
    };
    match entry.target {
        NavTarget::Section(section) => {
            state.menu.close();
            state.focus = Focus::Content;
            state.visit(section);
            state.observe_reveals(now);
        }
        NavTarget::External { fragment, .. } => {
            if fragment.is_some() {
                state.menu.close();
            }
        }
    }
    state
}

/// Key handling while the contact form is focused.
fn handle_form_key(mut state: AppState, key: KeyEvent, now: DateTime<Utc>) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.focus = Focus::Content;
            state
        }
        KeyCode::Tab | KeyCode::Down => {
            state.form.focus_next();
            state
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.focus_prev();
            state
        }
        KeyCode::Enter => {
            let config = state.config.clone();
            state.form.submit(now, &config);
            state
        }
        KeyCode::Backspace => {
            state.form.backspace();
            state
        }
        KeyCode::Char(c) => {
            state.form.insert_char(c);
            state
        }
        _ => state,
    }
}

fn open_menu(mut state: AppState) -> AppState {
    state.menu.toggle();
    if state.menu.is_open() {
        state.menu_selected = 0;
        state.focus = Focus::MenuToggle;
    }
    state
}

/// Back-to-top control: only reacts once it is visible.
fn back_to_top(mut state: AppState) -> AppState {
    if state.back_to_top_visible() {
        state.scroll.start_smooth(0);
    }
    state
}

/// Number keys jump straight to a section, like the footer anchor links.
fn jump_to_section(mut state: AppState, digit: char, now: DateTime<Utc>) -> AppState {
    let index = (digit as usize) - ('1' as usize);
    if let Some(&section) = SectionId::ALL.get(index) {
        state.visit(section);
        state.observe_reveals(now);
    }
    state
}

fn scroll_content(mut state: AppState, delta: isize, now: DateTime<Utc>) -> AppState {
    let max = state.max_scroll();
    state.scroll.scroll_by(delta, max);
    state.observe_reveals(now);
    state
}

fn move_down(mut state: AppState, now: DateTime<Utc>) -> AppState {
    match state.focus {
        Focus::Faq => {
            let last = state.faq.panel_count().saturating_sub(1);
            state.faq_selected = (state.faq_selected + 1).min(last);
            state
        }
        Focus::Bios => {
            let last = state.bios.panel_count().saturating_sub(1);
            state.bio_selected = (state.bio_selected + 1).min(last);
            state
        }
        _ => scroll_content(state, 1, now),
    }
}

fn move_up(mut state: AppState, now: DateTime<Utc>) -> AppState {
    match state.focus {
        Focus::Faq => {
            state.faq_selected = state.faq_selected.saturating_sub(1);
            state
        }
        Focus::Bios => {
            state.bio_selected = state.bio_selected.saturating_sub(1);
            state
        }
        _ => scroll_content(state, -1, now),
    }
}

/// Enter/Space on the focused widget.
fn activate(mut state: AppState, now: DateTime<Utc>) -> AppState {
    match state.focus {
        Focus::MenuToggle => open_menu(state),
        Focus::Carousel => {
            state.carousel.next();
            state
        }
        Focus::Faq => {
            let index = state.faq_selected;
            state.faq.toggle(index);
            state.observe_reveals(now);
            state
        }
        Focus::Bios => {
            let index = state.bio_selected;
            state.bios.toggle(index);
            state.observe_reveals(now);
            state
        }
        Focus::Content | Focus::Form => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::{FormField, FormPhase};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn press(state: AppState, code: KeyCode) -> AppState {
        handle_key(state, key(code), Utc::now())
    }

    #[test]
    fn quit_key_sets_should_quit() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn m_opens_and_closes_menu() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('m'));
        assert!(state.menu.is_open());
        assert_eq!(state.menu_selected, 0);

        let state = press(state, KeyCode::Char('m'));
        assert!(!state.menu.is_open());
    }

    #[test]
    fn escape_closes_menu_and_focuses_toggle() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('m'));
        let state = press(state, KeyCode::Esc);
        assert!(!state.menu.is_open());
        assert_eq!(state.focus, Focus::MenuToggle);
    }

    #[test]
    fn open_menu_locks_page_scroll() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('m'));
        let before = state.scroll.offset;
        let state = press(state, KeyCode::Char('j'));
        // j moved the menu selection, not the page
        assert_eq!(state.scroll.offset, before);
        assert_eq!(state.menu_selected, 1);
    }

    #[test]
    fn menu_selection_clamps_at_ends() {
        let state = AppState::new(2026);
        let mut state = press(state, KeyCode::Char('m'));
        let last = state.content.nav.len() - 1;
        for _ in 0..20 {
            state = press(state, KeyCode::Char('j'));
        }
        assert_eq!(state.menu_selected, last);
        for _ in 0..20 {
            state = press(state, KeyCode::Char('k'));
        }
        assert_eq!(state.menu_selected, 0);
    }

    #[test]
    fn menu_enter_on_section_closes_scrolls_and_records_history() {
        let state = AppState::new(2026);
        let mut state = press(state, KeyCode::Char('m'));
        // Entry 1 is "Practice Areas"
        state = press(state, KeyCode::Char('j'));
        let state = press(state, KeyCode::Enter);
        assert!(!state.menu.is_open());
        assert_eq!(state.history, vec![SectionId::Practice]);
        assert!(state.scroll.is_animating());
        assert_eq!(state.focus, Focus::Content);
    }

    #[test]
    fn menu_enter_on_cross_page_fragment_only_closes_menu() {
        let state = AppState::new(2026);
        let mut state = press(state, KeyCode::Char('m'));
        // Last entry is the external "Client Portal" link with a fragment
        let last = state.content.nav.len() - 1;
        for _ in 0..last {
            state = press(state, KeyCode::Char('j'));
        }
        let state = press(state, KeyCode::Enter);
        assert!(!state.menu.is_open());
        assert!(state.history.is_empty());
        assert!(!state.scroll.is_animating());
    }

    #[test]
    fn j_scrolls_page_when_content_focused() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('j'));
        assert_eq!(state.scroll.offset, 1);
        let state = press(state, KeyCode::Char('k'));
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn scroll_up_at_top_stays_at_top() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('k'));
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn scroll_clamps_at_page_bottom() {
        let mut state = AppState::new(2026);
        let max = state.max_scroll();
        for _ in 0..(max + 50) {
            state = press(state, KeyCode::Char('j'));
        }
        assert_eq!(state.scroll.offset, max);
    }

    #[test]
    fn ctrl_d_and_u_page_jump() {
        let state = AppState::new(2026);
        let state = handle_key(state, ctrl(KeyCode::Char('d')), Utc::now());
        assert_eq!(state.scroll.offset, 10);
        let state = handle_key(state, ctrl(KeyCode::Char('u')), Utc::now());
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn manual_scroll_cancels_smooth_scroll() {
        let mut state = AppState::new(2026);
        state.visit(SectionId::Contact);
        assert!(state.scroll.is_animating());
        let state = press(state, KeyCode::Char('j'));
        assert!(!state.scroll.is_animating());
    }

    #[test]
    fn arrow_keys_drive_carousel_from_page_focus() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Right);
        assert_eq!(state.carousel.page(), 1);
        let state = press(state, KeyCode::Left);
        assert_eq!(state.carousel.page(), 0);
    }

    #[test]
    fn carousel_arrows_inert_at_ends() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Left);
        assert_eq!(state.carousel.page(), 0);

        let mut state = state;
        for _ in 0..20 {
            state = press(state, KeyCode::Right);
        }
        assert_eq!(state.carousel.page(), state.carousel.page_count() - 1);
    }

    #[test]
    fn tab_cycles_focus_zones() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::MenuToggle);
        let state = press(state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Carousel);
        let state = press(state, KeyCode::BackTab);
        assert_eq!(state.focus, Focus::MenuToggle);
    }

    #[test]
    fn enter_on_menu_toggle_opens_menu() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Tab); // MenuToggle
        let state = press(state, KeyCode::Enter);
        assert!(state.menu.is_open());
    }

    #[test]
    fn faq_focus_selects_and_toggles_single_open() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Faq;
        let state = press(state, KeyCode::Char('j'));
        assert_eq!(state.faq_selected, 1);
        let state = press(state, KeyCode::Enter);
        assert!(state.faq.is_open(1));

        // Opening another panel closes the first
        let state = press(state, KeyCode::Char('j'));
        let state = press(state, KeyCode::Enter);
        assert!(!state.faq.is_open(1));
        assert!(state.faq.is_open(2));
        assert_eq!(state.faq.open_count(), 1);
    }

    #[test]
    fn bio_focus_allows_multiple_open() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Bios;
        let state = press(state, KeyCode::Enter);
        let state = press(state, KeyCode::Char('j'));
        let state = press(state, KeyCode::Enter);
        assert!(state.bios.is_open(0));
        assert!(state.bios.is_open(1));
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('7'));
        assert_eq!(state.history, vec![SectionId::Contact]);
        assert!(state.scroll.is_animating());
    }

    #[test]
    fn back_to_top_only_when_visible() {
        let mut state = AppState::new(2026);
        state.scroll.scroll_by(10, 1000); // 100 units, below threshold
        let state = press(state, KeyCode::Char('t'));
        assert!(!state.scroll.is_animating());

        let mut state = state;
        state.scroll.scroll_by(50, 1000); // 600 units
        let state = press(state, KeyCode::Char('t'));
        assert!(state.scroll.is_animating());
    }

    #[test]
    fn help_overlay_toggles_and_any_key_dismisses() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::Char('?'));
        assert!(state.show_help);
        let state = press(state, KeyCode::Char('x'));
        assert!(!state.show_help);
    }

    #[test]
    fn form_focus_captures_typing() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Form;
        let state = press(state, KeyCode::Char('q'));
        // 'q' is typed into the field, not quit
        assert!(!state.should_quit);
        assert_eq!(state.form.field(FormField::Name).value, "q");
    }

    #[test]
    fn form_tab_moves_between_fields() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Form;
        let state = press(state, KeyCode::Tab);
        assert_eq!(state.form.active, FormField::Email);
        let state = press(state, KeyCode::BackTab);
        assert_eq!(state.form.active, FormField::Name);
    }

    #[test]
    fn form_enter_submits_invalid_form_blocks() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Form;
        let state = press(state, KeyCode::Enter);
        assert!(matches!(state.form.phase, FormPhase::Idle));
        assert!(state.form.field(FormField::Name).invalid);
    }

    #[test]
    fn form_escape_returns_to_content() {
        let mut state = AppState::new(2026);
        state.focus = Focus::Form;
        let state = press(state, KeyCode::Esc);
        assert_eq!(state.focus, Focus::Content);
    }

    #[test]
    fn unknown_key_is_noop() {
        let state = AppState::new(2026);
        let state = press(state, KeyCode::F(5));
        assert!(!state.should_quit);
        assert_eq!(state.scroll.offset, 0);
    }
}
