use std::time::Duration;

/// Fixed cell-to-layout-unit scale. An 80-column terminal is an 800-unit-wide
/// viewport, so the page's thresholds and breakpoints keep their published
/// values.
pub const UNITS_PER_CELL: u32 = 10;

/// Carousel width breakpoints, in layout units.
/// Width at or below `single_max` shows 1 card, at or below `double_max` 2,
/// anything wider 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub single_max: u32,
    pub double_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_max: 768,
            double_max: 1024,
        }
    }
}

/// Tunables that varied across the three source revisions of the page script,
/// unified behind one parameterized implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Scroll offset past which the header renders elevated (revisions shipped
    /// 10, 20 and 50).
    pub shadow_threshold: u32,

    /// Scroll offset past which the back-to-top control is visible.
    pub back_to_top_threshold: u32,

    /// Viewport width above which the mobile menu cannot stay open.
    pub menu_collapse_width: u32,

    /// Carousel visible-cards breakpoints.
    pub breakpoints: Breakpoints,

    /// Blocks reveal once their top edge is within this many units below the
    /// viewport bottom.
    pub reveal_margin: u32,

    /// Reveal fires once and stops observing; `false` restores the earlier
    /// repeatable behavior.
    pub reveal_once: bool,

    /// Carousel page reset waits this long after the last resize.
    pub resize_debounce: Duration,

    /// Initial-load anchor scroll waits this long for layout to settle.
    pub anchor_settle: Duration,

    /// Simulated form submission: time spent in "Sending…".
    pub sending_delay: Duration,

    /// Simulated form submission: time "Message Sent" stays up before reset.
    pub sent_delay: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            shadow_threshold: 20,
            back_to_top_threshold: 400,
            menu_collapse_width: 768,
            breakpoints: Breakpoints::default(),
            reveal_margin: 50,
            reveal_once: true,
            resize_debounce: Duration::from_millis(150),
            anchor_settle: Duration::from_millis(100),
            sending_delay: Duration::from_millis(1000),
            sent_delay: Duration::from_millis(2000),
        }
    }
}
