//! Page layout model.
//!
//! The page is one long column of rows; scrolling slides a viewport-sized
//! window over it. Row positions are the anchor targets for smooth scrolling
//! and the observation points for scroll-reveal, so layout is computed here in
//! the pure core and the view renders exactly these rows.
//!
//! Body text wraps at a fixed measure independent of terminal width (the
//! page's max content width), which keeps row positions stable across
//! resizes.

use std::time::Duration;

use crate::app::accordion::AccordionState;
use crate::model::{SectionId, SiteContent};

/// Fixed text measure for body copy, in cells.
pub const CONTENT_WIDTH: usize = 76;

/// Rows reserved for the carousel widget (cards, dots, controls).
pub const CAROUSEL_ROWS: usize = 6;

/// Rows reserved for the contact form widget (fields, button, feedback).
pub const FORM_ROWS: usize = 11;

/// Reveal stagger steps, indexed by position within the group.
pub const PRACTICE_STAGGER: Duration = Duration::from_millis(100);
pub const ATTORNEY_STAGGER: Duration = Duration::from_millis(80);
pub const VALUE_STAGGER: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    HeroHeading,
    HeroTagline,
    SectionTitle(SectionId),
    Text,
    GroupHeading,
    BioToggle { attorney: usize },
    BioBody { attorney: usize },
    CarouselSlot { line: usize },
    FaqQuestion { index: usize },
    FaqAnswer { index: usize },
    FormSlot { line: usize },
    FooterRule,
    FooterCopyright,
    FooterPrivacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub text: String,
    pub kind: RowKind,
    /// Index into the reveal plan when this row belongs to a revealable block.
    pub reveal: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub rows: Vec<PageRow>,
    pub section_tops: Vec<(SectionId, usize)>,
    /// Top row of each revealable block, in plan order.
    pub reveal_tops: Vec<usize>,
}

/// Stagger delay per revealable block, in the order layout emits them.
/// Kept in lockstep with `PageLayout::compute`.
pub fn reveal_plan(content: &SiteContent) -> Vec<Duration> {
    let mut plan = Vec::new();
    // Practice: section header, then staggered cards
    plan.push(Duration::ZERO);
    for index in 0..content.practice_areas.len() {
        plan.push(PRACTICE_STAGGER * index as u32);
    }
    // Attorneys: section header, then cards staggered per group
    plan.push(Duration::ZERO);
    for group in &content.attorney_groups {
        for index in 0..group.members.len() {
            plan.push(ATTORNEY_STAGGER * index as u32);
        }
    }
    // Values: section header, then staggered items
    plan.push(Duration::ZERO);
    for index in 0..content.values.len() {
        plan.push(VALUE_STAGGER * index as u32);
    }
    // Remaining section headers
    plan.push(Duration::ZERO); // Testimonials
    plan.push(Duration::ZERO); // FAQ
    plan.push(Duration::ZERO); // Contact
    plan
}

struct LayoutBuilder {
    rows: Vec<PageRow>,
    section_tops: Vec<(SectionId, usize)>,
    reveal_tops: Vec<usize>,
    next_block: usize,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            section_tops: Vec::new(),
            reveal_tops: Vec::new(),
            next_block: 0,
        }
    }

    fn row(&mut self, text: impl Into<String>, kind: RowKind) {
        self.rows.push(PageRow {
            text: text.into(),
            kind,
            reveal: None,
        });
    }

    fn blank(&mut self) {
        self.row("", RowKind::Blank);
    }

    /// Start a revealable block at the current row; rows pushed through the
    /// returned index are tagged by the caller.
    fn begin_block(&mut self) -> usize {
        let block = self.next_block;
        self.next_block += 1;
        self.reveal_tops.push(self.rows.len());
        block
    }

    fn reveal_row(&mut self, text: impl Into<String>, kind: RowKind, block: usize) {
        self.rows.push(PageRow {
            text: text.into(),
            kind,
            reveal: Some(block),
        });
    }

    fn section(&mut self, id: SectionId) {
        self.section_tops.push((id, self.rows.len()));
    }

    fn section_title(&mut self, id: SectionId) {
        self.section(id);
        let block = self.begin_block();
        self.reveal_row(id.title(), RowKind::SectionTitle(id), block);
        self.blank();
    }
}

impl PageLayout {
    pub fn compute(
        content: &SiteContent,
        faq: &AccordionState,
        bios: &AccordionState,
    ) -> PageLayout {
        let mut b = LayoutBuilder::new();

        // ── Hero ────────────────────────────────────────────────
        b.section(SectionId::Home);
        b.blank();
        b.row(content.hero_heading.clone(), RowKind::HeroHeading);
        b.blank();
        for line in wrap(&content.hero_tagline, CONTENT_WIDTH) {
            b.row(line, RowKind::HeroTagline);
        }
        b.blank();
        b.blank();

        // ── Practice areas ──────────────────────────────────────
        b.section_title(SectionId::Practice);
        for area in &content.practice_areas {
            let block = b.begin_block();
            b.reveal_row(area.title.clone(), RowKind::Text, block);
            for line in wrap(&area.blurb, CONTENT_WIDTH) {
                b.reveal_row(line, RowKind::Text, block);
            }
            b.blank();
        }
        b.blank();

        // ── Attorneys ───────────────────────────────────────────
        b.section_title(SectionId::Attorneys);
        let mut attorney = 0;
        for group in &content.attorney_groups {
            b.row(group.heading.clone(), RowKind::GroupHeading);
            for member in &group.members {
                let block = b.begin_block();
                let marker = if bios.is_open(attorney) { "[-]" } else { "[+]" };
                b.reveal_row(
                    format!("{} {} — {}", marker, member.name, member.role),
                    RowKind::BioToggle { attorney },
                    block,
                );
                if bios.is_open(attorney) {
                    for paragraph in &member.bio {
                        for line in wrap(paragraph, CONTENT_WIDTH) {
                            b.reveal_row(line, RowKind::BioBody { attorney }, block);
                        }
                    }
                }
                attorney += 1;
            }
            b.blank();
        }
        b.blank();

        // ── Values ──────────────────────────────────────────────
        b.section_title(SectionId::Values);
        for item in &content.values {
            let block = b.begin_block();
            b.reveal_row(item.title.clone(), RowKind::Text, block);
            for line in wrap(&item.detail, CONTENT_WIDTH) {
                b.reveal_row(line, RowKind::Text, block);
            }
            b.blank();
        }
        b.blank();

        // ── Testimonials ────────────────────────────────────────
        b.section_title(SectionId::Testimonials);
        for line in 0..CAROUSEL_ROWS {
            b.row("", RowKind::CarouselSlot { line });
        }
        b.blank();

        // ── FAQ ─────────────────────────────────────────────────
        b.section_title(SectionId::Faq);
        for (index, entry) in content.faq.iter().enumerate() {
            let marker = if faq.is_open(index) { "[-]" } else { "[+]" };
            b.row(
                format!("{} {}", marker, entry.question),
                RowKind::FaqQuestion { index },
            );
            if faq.is_open(index) {
                for line in wrap(&entry.answer, CONTENT_WIDTH) {
                    b.row(line, RowKind::FaqAnswer { index });
                }
            }
            b.blank();
        }
        b.blank();

        // ── Contact ─────────────────────────────────────────────
        b.section_title(SectionId::Contact);
        for line in wrap(
            "Tell us a little about your situation and we will reach out to schedule \
             a confidential consultation.",
            CONTENT_WIDTH,
        ) {
            b.row(line, RowKind::Text);
        }
        b.blank();
        for line in 0..FORM_ROWS {
            b.row("", RowKind::FormSlot { line });
        }
        b.blank();

        // ── Footer ──────────────────────────────────────────────
        b.row("─".repeat(CONTENT_WIDTH), RowKind::FooterRule);
        b.row(content.copyright.clone(), RowKind::FooterCopyright);
        b.row(content.privacy_policy_label.clone(), RowKind::FooterPrivacy);

        PageLayout {
            rows: b.rows,
            section_tops: b.section_tops,
            reveal_tops: b.reveal_tops,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn section_top(&self, id: SectionId) -> usize {
        self.section_tops
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, top)| *top)
            .unwrap_or(0)
    }

    /// Largest valid scroll offset for a viewport of `view_rows`.
    pub fn max_scroll(&self, view_rows: usize) -> usize {
        self.total_rows().saturating_sub(view_rows)
    }
}

/// Greedy word wrap at `width` cells. Never returns an empty vec.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::accordion::OpenPolicy;

    fn fixture() -> (SiteContent, AccordionState, AccordionState) {
        let content = SiteContent::builtin();
        let faq = AccordionState::new(content.faq.len(), OpenPolicy::Single);
        let bios = AccordionState::new(content.attorney_count(), OpenPolicy::Multi);
        (content, faq, bios)
    }

    #[test]
    fn sections_appear_in_page_order() {
        let (content, faq, bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        let ids: Vec<SectionId> = layout.section_tops.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        let tops: Vec<usize> = layout.section_tops.iter().map(|(_, top)| *top).collect();
        assert!(tops.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reveal_tops_match_plan_length() {
        let (content, faq, bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        assert_eq!(layout.reveal_tops.len(), reveal_plan(&content).len());
    }

    #[test]
    fn opening_faq_panel_grows_the_page() {
        let (content, mut faq, bios) = fixture();
        let closed = PageLayout::compute(&content, &faq, &bios);
        faq.toggle(0);
        let open = PageLayout::compute(&content, &faq, &bios);
        assert!(open.total_rows() > closed.total_rows());
    }

    #[test]
    fn opening_bio_shifts_later_sections_down() {
        let (content, faq, mut bios) = fixture();
        let closed = PageLayout::compute(&content, &faq, &bios);
        bios.toggle(0);
        let open = PageLayout::compute(&content, &faq, &bios);
        assert!(open.section_top(SectionId::Faq) > closed.section_top(SectionId::Faq));
        // Sections before the attorneys block are unaffected
        assert_eq!(
            open.section_top(SectionId::Practice),
            closed.section_top(SectionId::Practice)
        );
    }

    #[test]
    fn bio_toggle_marker_reflects_state() {
        let (content, faq, mut bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        let toggle_row = layout
            .rows
            .iter()
            .find(|row| matches!(row.kind, RowKind::BioToggle { attorney: 0 }))
            .unwrap();
        assert!(toggle_row.text.starts_with("[+]"));

        bios.toggle(0);
        let layout = PageLayout::compute(&content, &faq, &bios);
        let toggle_row = layout
            .rows
            .iter()
            .find(|row| matches!(row.kind, RowKind::BioToggle { attorney: 0 }))
            .unwrap();
        assert!(toggle_row.text.starts_with("[-]"));
        assert!(layout
            .rows
            .iter()
            .any(|row| matches!(row.kind, RowKind::BioBody { attorney: 0 })));
    }

    #[test]
    fn carousel_and_form_slots_have_reserved_heights() {
        let (content, faq, bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        let carousel_rows = layout
            .rows
            .iter()
            .filter(|row| matches!(row.kind, RowKind::CarouselSlot { .. }))
            .count();
        let form_rows = layout
            .rows
            .iter()
            .filter(|row| matches!(row.kind, RowKind::FormSlot { .. }))
            .count();
        assert_eq!(carousel_rows, CAROUSEL_ROWS);
        assert_eq!(form_rows, FORM_ROWS);
    }

    #[test]
    fn max_scroll_saturates_for_tall_viewports() {
        let (content, faq, bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        assert_eq!(layout.max_scroll(10_000), 0);
        assert!(layout.max_scroll(20) > 0);
    }

    #[test]
    fn wrap_respects_measure() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
        for line in wrap(&"word ".repeat(50), 20) {
            assert!(line.chars().count() <= 20);
        }
    }

    #[test]
    fn wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn footer_rows_present() {
        let (content, faq, bios) = fixture();
        let layout = PageLayout::compute(&content, &faq, &bios);
        assert!(layout
            .rows
            .iter()
            .any(|row| matches!(row.kind, RowKind::FooterCopyright)));
        assert!(layout
            .rows
            .iter()
            .any(|row| matches!(row.kind, RowKind::FooterPrivacy)));
    }
}
