use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::app::accordion::{AccordionState, OpenPolicy};
use crate::app::carousel::CarouselState;
use crate::app::form::ContactForm;
use crate::app::layout::{reveal_plan, PageLayout};
use crate::app::menu::MenuState;
use crate::app::reveal::RevealState;
use crate::config::{UiConfig, UNITS_PER_CELL};
use crate::model::{SectionId, SiteContent};
use crate::tax::TaxTable;

/// Rows taken by the fixed site header.
pub const HEADER_ROWS: u16 = 3;

/// Rows taken by the fixed status footer.
pub const FOOTER_ROWS: u16 = 1;

/// Error ring buffer capacity.
const ERROR_CAP: usize = 100;

/// Terminal dimensions, with conversions into layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl Viewport {
    pub fn width_units(&self) -> u32 {
        self.width as u32 * UNITS_PER_CELL
    }

    /// Rows of the scrollable content window between header and footer.
    pub fn content_rows(&self) -> usize {
        self.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
    }
}

/// Vertical scroll position with an optional smooth-scroll target.
/// The animation eases a quarter of the remaining distance per tick (at least
/// one row) and snaps on arrival; manual scrolling cancels it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    target: Option<usize>,
}

impl ScrollState {
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn start_smooth(&mut self, target: usize) {
        self.target = Some(target);
    }

    pub fn cancel_animation(&mut self) {
        self.target = None;
    }

    /// Manual scroll; cancels any running animation.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        self.target = None;
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// Advance the smooth-scroll animation by one tick.
    pub fn animate(&mut self) {
        if let Some(target) = self.target {
            let distance = target.abs_diff(self.offset);
            let step = (distance / 4).max(1);
            if distance <= step {
                self.offset = target;
                self.target = None;
            } else if target > self.offset {
                self.offset += step;
            } else {
                self.offset -= step;
            }
        }
    }

    pub fn clamp(&mut self, max: usize) {
        self.offset = self.offset.min(max);
        if let Some(target) = self.target {
            self.target = Some(target.min(max));
        }
    }
}

/// Interactive regions reachable with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    MenuToggle,
    Carousel,
    Faq,
    Bios,
    Form,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Content,
        Focus::MenuToggle,
        Focus::Carousel,
        Focus::Faq,
        Focus::Bios,
        Focus::Form,
    ];

    pub fn next(&self) -> Focus {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Focus {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A deferred initial-load scroll to a URL-fragment-style anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnchor {
    pub section: SectionId,
    pub at: DateTime<Utc>,
}

/// Main application state.
/// Updated via the pure `update(state, event) -> state` function.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: UiConfig,

    /// Figures table the placeholders resolve against.
    pub figures: TaxTable,

    /// Calendar year used for resolution and the copyright stamp.
    pub current_year: i32,

    /// Unstamped page copy (tokens intact), kept for restamping on reload.
    pub template: SiteContent,

    /// Stamped page copy, what actually renders.
    pub content: SiteContent,

    pub viewport: Viewport,
    pub scroll: ScrollState,

    pub menu: MenuState,
    pub menu_selected: usize,

    pub focus: Focus,

    pub carousel: CarouselState,

    pub faq: AccordionState,
    pub faq_selected: usize,

    pub bios: AccordionState,
    pub bio_selected: usize,

    pub reveal: RevealState,
    pub form: ContactForm,

    /// Visited same-page anchors, newest last (the pushState analog).
    pub history: Vec<SectionId>,

    pub pending_anchor: Option<PendingAnchor>,

    /// Deadline for the debounced carousel reset after a resize.
    pub pending_carousel_reset: Option<DateTime<Utc>>,

    pub show_help: bool,

    /// Non-fatal error ring buffer (status bar display).
    pub errors: VecDeque<String>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(year: i32) -> Self {
        Self::with_parts(UiConfig::default(), TaxTable::builtin(), year)
    }

    pub fn with_parts(config: UiConfig, figures: TaxTable, year: i32) -> Self {
        let template = SiteContent::builtin();
        let content = template.stamped(&figures, year);
        let viewport = Viewport::default();
        let carousel = CarouselState::new(
            content.testimonials.len(),
            viewport.width_units(),
            config.breakpoints,
        );
        let faq = AccordionState::new(content.faq.len(), OpenPolicy::Single);
        let bios = AccordionState::new(content.attorney_count(), OpenPolicy::Multi);
        let reveal = RevealState::new(reveal_plan(&content), config.reveal_once);
        Self {
            config,
            figures,
            current_year: year,
            template,
            content,
            viewport,
            scroll: ScrollState::default(),
            menu: MenuState::new(),
            menu_selected: 0,
            focus: Focus::Content,
            carousel,
            faq,
            faq_selected: 0,
            bios,
            bio_selected: 0,
            reveal,
            form: ContactForm::new(),
            history: Vec::new(),
            pending_anchor: None,
            pending_carousel_reset: None,
            show_help: false,
            errors: VecDeque::with_capacity(ERROR_CAP),
            should_quit: false,
        }
    }

    /// Current layout for this content and accordion state.
    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(&self.content, &self.faq, &self.bios)
    }

    pub fn max_scroll(&self) -> usize {
        self.layout().max_scroll(self.viewport.content_rows())
    }

    pub fn scroll_offset_units(&self) -> u32 {
        self.scroll.offset as u32 * UNITS_PER_CELL
    }

    /// Header renders elevated past the configured scroll threshold.
    pub fn header_elevated(&self) -> bool {
        self.scroll_offset_units() > self.config.shadow_threshold
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_offset_units() > self.config.back_to_top_threshold
    }

    /// Navigate to a same-page anchor: record it and scroll smoothly.
    pub fn visit(&mut self, section: SectionId) {
        self.history.push(section);
        let top = self.layout().section_top(section).min(self.max_scroll());
        self.scroll.start_smooth(top);
    }

    /// Re-run reveal observation against the current scroll window.
    pub fn observe_reveals(&mut self, now: DateTime<Utc>) {
        let layout = self.layout();
        let margin_rows = (self.config.reveal_margin / UNITS_PER_CELL) as usize;
        self.reveal.observe(
            &layout.reveal_tops,
            self.scroll.offset,
            self.viewport.content_rows(),
            margin_rows,
            now,
        );
    }

    /// Re-resolve placeholders after a figures reload.
    pub fn restamp(&mut self) {
        self.content = self.template.stamped(&self.figures, self.current_year);
    }

    pub fn push_error(&mut self, message: String) {
        if self.errors.len() >= ERROR_CAP {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }
}
