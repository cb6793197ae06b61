use ratatui::style::Color;

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(16, 20, 28);
    pub const SURFACE: Color = Color::Rgb(24, 30, 42);
    pub const TEXT: Color = Color::Rgb(226, 228, 224);
    pub const MUTED_TEXT: Color = Color::Rgb(110, 118, 128);
    pub const HIDDEN_TEXT: Color = Color::Rgb(42, 48, 60);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(196, 164, 84); // brass — headings, rules
    pub const ACCENT_DEEP: Color = Color::Rgb(60, 90, 130); // slate blue — links

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(96, 190, 120);
    pub const ERROR: Color = Color::Rgb(214, 88, 88);
    pub const INFO: Color = Color::Rgb(100, 170, 210);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(20, 26, 36);
    pub const HEADER_BG_ELEVATED: Color = Color::Rgb(30, 38, 52);
    pub const FOOTER_BG: Color = Color::Rgb(20, 26, 36);
    pub const MENU_BG: Color = Color::Rgb(26, 33, 46);
    pub const SELECTION_BG: Color = Color::Rgb(44, 58, 80);
    pub const FIELD_BG: Color = Color::Rgb(30, 36, 48);
    pub const DOT_ACTIVE: Color = Color::Rgb(196, 164, 84); // = ACCENT
    pub const DOT_INACTIVE: Color = Color::Rgb(70, 78, 90);
}
