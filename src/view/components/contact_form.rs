//! Contact form widget.
//!
//! Renders into the row slots layout reserves for it: label/input pairs for
//! each field, the submit button walking its simulated pipeline, and the
//! transient feedback panel.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::form::{FormFeedback, FormField};
use crate::app::{AppState, Focus};
use crate::model::Theme;

const INPUT_WIDTH: usize = 40;

/// One row of the form widget. `line` indexes into the slot rows layout
/// reserved (see `FORM_ROWS`): two rows per field, a spacer, the button and
/// the feedback row.
pub fn form_line(state: &AppState, line: usize) -> Line<'static> {
    match line {
        0..=7 => {
            let field = FormField::ALL[line / 2];
            if line % 2 == 0 {
                label_line(state, field)
            } else {
                input_line(state, field)
            }
        }
        9 => button_line(state),
        10 => feedback_line(state),
        _ => Line::default(),
    }
}

fn label_line(state: &AppState, field: FormField) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    let style = if state.form.field(field).invalid {
        Style::default().fg(Theme::ERROR)
    } else {
        Style::default().fg(Theme::MUTED_TEXT)
    };
    spans.push(Span::styled(field.label(), style));
    if field.required() {
        spans.push(Span::styled(" *", Style::default().fg(Theme::ACCENT)));
    }
    if state.form.field(field).invalid {
        spans.push(Span::styled(
            "  required",
            Style::default()
                .fg(Theme::ERROR)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

fn input_line(state: &AppState, field: FormField) -> Line<'static> {
    let form = &state.form;
    let field_state = form.field(field);
    let editing = state.focus == Focus::Form && form.active == field && !form.is_locked();

    let mut text = format!(" {}", field_state.value);
    if editing {
        text.push('▏');
    }
    while text.chars().count() < INPUT_WIDTH {
        text.push(' ');
    }

    let mut style = Style::default().fg(Theme::TEXT).bg(Theme::FIELD_BG);
    if field_state.invalid {
        style = style.fg(Theme::ERROR);
    }
    if editing {
        style = style.bg(Theme::SELECTION_BG);
    }

    Line::from(vec![Span::raw(" "), Span::styled(text, style)])
}

fn button_line(state: &AppState) -> Line<'static> {
    let form = &state.form;
    let style = if form.is_locked() {
        // Loading state: dimmed and inert until the pipeline resets
        Style::default().fg(Theme::MUTED_TEXT)
    } else {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", form.button_label()), style),
    ])
}

fn feedback_line(state: &AppState) -> Line<'static> {
    match &state.form.feedback {
        Some(FormFeedback::Success(message)) => Line::from(vec![
            Span::raw(" "),
            Span::styled(message.clone(), Style::default().fg(Theme::SUCCESS)),
        ]),
        Some(FormFeedback::Error(message)) => Line::from(vec![
            Span::raw(" "),
            Span::styled(message.clone(), Style::default().fg(Theme::ERROR)),
        ]),
        None => Line::default(),
    }
}
