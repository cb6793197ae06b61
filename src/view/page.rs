//! Scrollable page window.
//!
//! Renders the slice of layout rows under the viewport, styling each row by
//! kind and reveal state, and substituting the carousel and form widget lines
//! into their reserved slots. The footer copyright year is stamped here at
//! render time.

use std::sync::OnceLock;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use regex::Regex;

use crate::app::{AppState, Focus, RowKind};
use crate::model::Theme;
use crate::view::components::{carousel, contact_form};

pub fn render_page(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = state.layout();
    let top = state.scroll.offset;
    let bottom = (top + area.height as usize).min(layout.rows.len());

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in &layout.rows[top.min(layout.rows.len())..bottom] {
        lines.push(render_row(state, row));
    }

    let page = Paragraph::new(lines).style(Style::default().bg(Theme::BACKGROUND));
    frame.render_widget(page, area);
}

fn render_row(state: &AppState, row: &crate::app::layout::PageRow) -> Line<'static> {
    // Widget slots render through their components
    match row.kind {
        RowKind::CarouselSlot { line } => return carousel::carousel_line(state, line),
        RowKind::FormSlot { line } => return contact_form::form_line(state, line),
        _ => {}
    }

    // Unrevealed blocks render as hidden (pre-transition) text
    if let Some(block) = row.reveal {
        if !state.reveal.is_revealed(block) {
            return Line::from(Span::styled(
                row.text.clone(),
                Style::default().fg(Theme::HIDDEN_TEXT),
            ));
        }
    }

    let style = match row.kind {
        RowKind::HeroHeading => Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        RowKind::HeroTagline => Style::default().fg(Theme::MUTED_TEXT),
        RowKind::SectionTitle(_) => Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        RowKind::GroupHeading => Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
        RowKind::BioToggle { attorney } => {
            if state.focus == Focus::Bios && state.bio_selected == attorney {
                Style::default().fg(Theme::TEXT).bg(Theme::SELECTION_BG)
            } else {
                Style::default().fg(Theme::ACCENT_DEEP)
            }
        }
        RowKind::BioBody { .. } => Style::default().fg(Theme::TEXT),
        RowKind::FaqQuestion { index } => {
            if state.focus == Focus::Faq && state.faq_selected == index {
                Style::default().fg(Theme::TEXT).bg(Theme::SELECTION_BG)
            } else {
                Style::default().fg(Theme::ACCENT_DEEP)
            }
        }
        RowKind::FaqAnswer { .. } => Style::default().fg(Theme::TEXT),
        RowKind::FooterRule => Style::default().fg(Theme::MUTED_TEXT),
        RowKind::FooterCopyright | RowKind::FooterPrivacy => {
            Style::default().fg(Theme::MUTED_TEXT)
        }
        _ => Style::default().fg(Theme::TEXT),
    };

    let text = match row.kind {
        RowKind::FooterCopyright => stamp_copyright(&row.text, state.current_year),
        RowKind::FooterPrivacy => {
            format!("{}: {}", row.text, privacy_date(state.current_year))
        }
        _ => row.text.clone(),
    };

    Line::from(Span::styled(text, style))
}

fn copyright_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(©\s*)\d{4}").expect("valid copyright pattern"))
}

/// Rewrite the 4-digit year following the copyright glyph to `year`.
pub fn stamp_copyright(text: &str, year: i32) -> String {
    copyright_pattern()
        .replace(text, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], year)
        })
        .into_owned()
}

/// Privacy-policy date string for the current year.
pub fn privacy_date(year: i32) -> String {
    format!("January {}", year)
}
