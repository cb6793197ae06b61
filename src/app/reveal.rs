//! Scroll-reveal tracking.
//!
//! Each revealable block reveals the first time its top row crosses the
//! observation line, the viewport bottom inset by the configured margin, so
//! a block must be slightly inside the viewport before its transition fires.
//! Blocks are staggered by their position within their group. One-shot mode
//! stops observing a block once revealed; repeatable mode re-hides blocks
//! that drop back below the observation line.

use std::time::Duration;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    /// In range; the staggered transition fires at `at`.
    Pending { at: DateTime<Utc> },
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RevealEntry {
    delay: Duration,
    phase: RevealPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    entries: Vec<RevealEntry>,
    once: bool,
}

impl RevealState {
    pub fn new(plan: Vec<Duration>, once: bool) -> Self {
        Self {
            entries: plan
                .into_iter()
                .map(|delay| RevealEntry {
                    delay,
                    phase: RevealPhase::Hidden,
                })
                .collect(),
            once,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_revealed(&self, block: usize) -> bool {
        matches!(
            self.entries.get(block).map(|e| e.phase),
            Some(RevealPhase::Revealed)
        )
    }

    pub fn revealed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.phase, RevealPhase::Revealed))
            .count()
    }

    /// Observe block tops against the current scroll window and advance
    /// pending transitions. `tops` is in plan order; the observation line sits
    /// `margin_rows` above the viewport bottom.
    pub fn observe(
        &mut self,
        tops: &[usize],
        offset: usize,
        view_rows: usize,
        margin_rows: usize,
        now: DateTime<Utc>,
    ) {
        let observe_line = (offset + view_rows).saturating_sub(margin_rows);
        for (entry, &top) in self.entries.iter_mut().zip(tops) {
            let in_range = top < observe_line;
            entry.phase = match entry.phase {
                RevealPhase::Hidden if in_range => {
                    if entry.delay.is_zero() {
                        RevealPhase::Revealed
                    } else {
                        RevealPhase::Pending {
                            at: now + entry.delay,
                        }
                    }
                }
                RevealPhase::Pending { at } if now >= at => RevealPhase::Revealed,
                RevealPhase::Pending { .. } if !in_range && !self.once => RevealPhase::Hidden,
                RevealPhase::Revealed if !in_range && !self.once => RevealPhase::Hidden,
                phase => phase,
            };
        }
    }
}
