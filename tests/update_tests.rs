use chrono::{Duration as ChronoDuration, Utc};
use counsel_tui::app::{handle_key, update, AppState, Focus, FormPhase};
use counsel_tui::event::AppEvent;
use counsel_tui::tax::{FigureKind, TaxTable};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = handle_key(state, key(KeyCode::Char(c)), Utc::now());
    }
    state
}

#[test]
fn form_submission_pipeline_end_to_end() {
    let mut state = AppState::new(2026);
    state.focus = Focus::Form;

    // Fill the three required fields
    let state = type_text(state, "Avery Quinn");
    let state = handle_key(state, key(KeyCode::Tab), Utc::now());
    let state = type_text(state, "avery@example.com");
    let state = handle_key(state, key(KeyCode::Tab), Utc::now());
    let state = handle_key(state, key(KeyCode::Tab), Utc::now());
    let state = type_text(state, "We would like to update our wills.");

    let t0 = Utc::now();
    let state = handle_key(state, key(KeyCode::Enter), t0);
    assert!(matches!(state.form.phase, FormPhase::Sending { .. }));

    // 1s later: sent, with the success panel up
    let state = update(state, AppEvent::Tick(t0 + ChronoDuration::milliseconds(1050)));
    assert!(matches!(state.form.phase, FormPhase::Sent { .. }));
    assert!(state.form.feedback.is_some());

    // 2s after that: reset to idle with cleared fields
    let state = update(state, AppEvent::Tick(t0 + ChronoDuration::milliseconds(3200)));
    assert!(matches!(state.form.phase, FormPhase::Idle));
    assert_eq!(
        state.form.field(counsel_tui::app::FormField::Name).value,
        ""
    );
    assert!(state.form.feedback.is_none());
}

#[test]
fn invalid_submission_never_enters_the_pipeline() {
    let mut state = AppState::new(2026);
    state.focus = Focus::Form;
    let state = type_text(state, "Avery");
    // no email, no message
    let state = handle_key(state, key(KeyCode::Enter), Utc::now());
    assert!(matches!(state.form.phase, FormPhase::Idle));

    // Ticks never advance a blocked form
    let state = update(state, AppEvent::Tick(Utc::now() + ChronoDuration::seconds(10)));
    assert!(matches!(state.form.phase, FormPhase::Idle));
}

#[test]
fn resize_to_wide_viewport_recomputes_carousel_after_debounce() {
    let state = AppState::new(2026);
    assert_eq!(state.carousel.visible(), 2); // 800 units

    let t0 = Utc::now();
    let state = update(
        state,
        AppEvent::Resized {
            width: 130, // 1300 units -> 3 cards
            height: 40,
            at: t0,
        },
    );
    // Debounce window still open
    assert_eq!(state.carousel.visible(), 2);

    let state = update(state, AppEvent::Tick(t0 + ChronoDuration::milliseconds(200)));
    assert_eq!(state.carousel.visible(), 3);
    assert_eq!(state.carousel.page(), 0);
    assert_eq!(state.carousel.page_count(), 2);
}

#[test]
fn narrow_viewport_shows_one_card_per_page() {
    let state = AppState::new(2026);
    let t0 = Utc::now();
    let state = update(
        state,
        AppEvent::Resized {
            width: 40, // 400 units
            height: 24,
            at: t0,
        },
    );
    let state = update(state, AppEvent::Tick(t0 + ChronoDuration::milliseconds(200)));
    assert_eq!(state.carousel.visible(), 1);
    assert_eq!(
        state.carousel.page_count(),
        state.content.testimonials.len()
    );
}

#[test]
fn resize_above_breakpoint_closes_open_menu_immediately() {
    let state = AppState::new(2026);
    let state = handle_key(state, key(KeyCode::Char('m')), Utc::now());
    assert!(state.menu.is_open());

    let state = update(
        state,
        AppEvent::Resized {
            width: 90, // 900 units > 768
            height: 24,
            at: Utc::now(),
        },
    );
    assert!(!state.menu.is_open());
    assert!(!state.menu.scroll_locked());
}

#[test]
fn figures_reload_updates_rendered_copy_and_resolver() {
    let state = AppState::new(2026);
    assert!(state.content.faq[1].answer.contains("$19,000"));

    let table = TaxTable::parse(r#"{ "annualGiftExclusion": { "2026": 20000 } }"#).unwrap();
    let state = update(state, AppEvent::FiguresReloaded(table));

    assert!(state.content.faq[1].answer.contains("$20,000"));
    assert_eq!(
        state
            .figures
            .resolve(FigureKind::AnnualGiftExclusion, 2026)
            .unwrap()
            .amount,
        20_000
    );
    // Estate figures came from the replaced (now empty) kinds: tokens survive
    assert!(state.content.faq[2].answer.contains("{tax-estate-exemption}"));
}

#[test]
fn reveal_progresses_as_the_page_scrolls() {
    let mut state = AppState::new(2026);
    state = update(state, AppEvent::Tick(Utc::now()));
    let initially = state.reveal.revealed_count();
    assert!(initially > 0);
    assert!(initially < state.reveal.len());

    // Scroll to the bottom and keep ticking past every stagger delay
    let max = state.max_scroll();
    state.scroll.scroll_by(max as isize, max);
    let mut now = Utc::now();
    for _ in 0..20 {
        now += ChronoDuration::milliseconds(100);
        state = update(state, AppEvent::Tick(now));
    }
    assert_eq!(state.reveal.revealed_count(), state.reveal.len());
}

#[test]
fn one_shot_reveals_survive_scrolling_back_to_top() {
    let mut state = AppState::new(2026);
    let max = state.max_scroll();
    state.scroll.scroll_by(max as isize, max);
    let mut now = Utc::now();
    for _ in 0..20 {
        now += ChronoDuration::milliseconds(100);
        state = update(state, AppEvent::Tick(now));
    }
    let revealed = state.reveal.revealed_count();

    state.scroll.scroll_by(-(max as isize), max);
    let state = update(state, AppEvent::Tick(now + ChronoDuration::seconds(1)));
    assert_eq!(state.reveal.revealed_count(), revealed);
}

#[test]
fn repeatable_mode_rehides_blocks_scrolled_away() {
    let mut config = counsel_tui::config::UiConfig::default();
    config.reveal_once = false;
    let mut state = AppState::with_parts(config, TaxTable::builtin(), 2026);

    let max = state.max_scroll();
    state.scroll.scroll_by(max as isize, max);
    let mut now = Utc::now();
    for _ in 0..20 {
        now += ChronoDuration::milliseconds(100);
        state = update(state, AppEvent::Tick(now));
    }
    assert_eq!(state.reveal.revealed_count(), state.reveal.len());

    state.scroll.scroll_by(-(max as isize), max);
    let state = update(state, AppEvent::Tick(now + ChronoDuration::seconds(1)));
    assert!(state.reveal.revealed_count() < state.reveal.len());
}

#[test]
fn watcher_error_event_degrades_to_status_message() {
    let state = AppState::new(2026);
    let before = state.content.clone();
    let state = update(
        state,
        AppEvent::Error {
            source: "figures.json".into(),
            error: counsel_tui::error::SiteError::Figures("expected value at line 1".into()),
        },
    );
    // Page keeps rendering the last good content
    assert_eq!(state.content, before);
    assert_eq!(state.errors.len(), 1);
}
