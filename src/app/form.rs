//! Contact form: field editing, validation and the simulated submission
//! pipeline (no backend is wired; a timed Sending → Sent → reset sequence
//! stands in for one).

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Message => "How can we help?",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, FormField::Phone)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).expect("known field")
    }

    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub invalid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending { until: DateTime<Utc> },
    Sent { until: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFeedback {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FieldState; 4],
    pub active: FormField,
    pub phase: FormPhase,
    pub feedback: Option<FormFeedback>,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            active: FormField::Name,
            phase: FormPhase::Idle,
            feedback: None,
        }
    }

    pub fn field(&self, field: FormField) -> &FieldState {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        &mut self.fields[field.index()]
    }

    /// The submit control is locked from submit until the pipeline resets.
    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, FormPhase::Idle)
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => "Send Message",
            FormPhase::Sending { .. } => "Sending...",
            FormPhase::Sent { .. } => "Message Sent",
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_locked() {
            return;
        }
        let field = self.active;
        self.field_mut(field).value.push(c);
    }

    pub fn backspace(&mut self) {
        if self.is_locked() {
            return;
        }
        let field = self.active;
        self.field_mut(field).value.pop();
    }

    pub fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub fn focus_prev(&mut self) {
        self.active = self.active.prev();
    }

    /// Check required fields and email shape, marking offenders. Returns
    /// whether the form may submit.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in FormField::ALL {
            let value = self.field(field).value.trim().to_string();
            let invalid = (field.required() && value.is_empty())
                || (field == FormField::Email
                    && !value.is_empty()
                    && !email_pattern().is_match(&value));
            self.field_mut(field).invalid = invalid;
            valid &= !invalid;
        }
        valid
    }

    /// Attempt submission. Invalid input blocks with an inline error; valid
    /// input enters the timed pipeline.
    pub fn submit(&mut self, now: DateTime<Utc>, config: &UiConfig) {
        if self.is_locked() {
            return;
        }
        if !self.validate() {
            self.feedback = Some(FormFeedback::Error(
                "Please complete the highlighted fields.".to_string(),
            ));
            return;
        }
        self.feedback = None;
        self.phase = FormPhase::Sending {
            until: now + config.sending_delay,
        };
    }

    /// Advance the submission pipeline on the timer tick.
    pub fn tick(&mut self, now: DateTime<Utc>, config: &UiConfig) {
        match self.phase {
            FormPhase::Sending { until } if now >= until => {
                self.phase = FormPhase::Sent {
                    until: now + config.sent_delay,
                };
                self.feedback = Some(FormFeedback::Success(
                    "Thank you — we'll be in touch within one business day.".to_string(),
                ));
            }
            FormPhase::Sent { until } if now >= until => {
                self.reset();
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.fields = Default::default();
        self.active = FormField::Name;
        self.phase = FormPhase::Idle;
        self.feedback = None;
    }
}
