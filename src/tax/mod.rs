pub mod figures;
pub mod format;
pub mod placeholders;

pub use figures::{FigureKind, ResolvedFigure, TaxTable};
pub use format::{figure_display, format_currency, format_millions};
pub use placeholders::stamp_figures;
