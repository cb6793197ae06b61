//! IRS dollar-figure table with year-fallback resolution.
//!
//! The builtin values are the published figures, hand-updated annually when
//! the IRS announces the next year's numbers (typically October/November).
//! An external JSON file in the same shape can replace the builtin table at
//! startup and is hot-reloaded while the app runs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::FiguresError;

/// The four tracked dollar-amount categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FigureKind {
    AnnualGiftExclusion,
    EstateExemption,
    GstExemption,
    EstateExemptionMarried,
}

impl FigureKind {
    pub const ALL: [FigureKind; 4] = [
        FigureKind::AnnualGiftExclusion,
        FigureKind::EstateExemption,
        FigureKind::GstExemption,
        FigureKind::EstateExemptionMarried,
    ];

    /// Placeholder-style name, as used in `{tax-…}` tokens.
    pub fn name(&self) -> &'static str {
        match self {
            FigureKind::AnnualGiftExclusion => "annual-gift",
            FigureKind::EstateExemption => "estate-exemption",
            FigureKind::GstExemption => "gst-exemption",
            FigureKind::EstateExemptionMarried => "estate-exemption-married",
        }
    }

    pub fn from_name(name: &str) -> Option<FigureKind> {
        match name {
            "annual-gift" => Some(FigureKind::AnnualGiftExclusion),
            "estate-exemption" => Some(FigureKind::EstateExemption),
            "gst-exemption" => Some(FigureKind::GstExemption),
            "estate-exemption-married" => Some(FigureKind::EstateExemptionMarried),
            _ => None,
        }
    }
}

/// A figure resolved for a requested year: the entry year that applied and
/// its whole-dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFigure {
    pub year: i32,
    pub amount: u64,
}

/// Year-keyed amounts per figure kind. No runtime mutation beyond whole-table
/// replacement when the figures file reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxTable {
    entries: BTreeMap<FigureKind, BTreeMap<i32, u64>>,
}

/// On-disk shape of the figures file. Kind keys are camelCase, matching the
/// annually hand-edited config this table was lifted from.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TaxTableFile {
    annual_gift_exclusion: BTreeMap<i32, u64>,
    estate_exemption: BTreeMap<i32, u64>,
    gst_exemption: BTreeMap<i32, u64>,
    estate_exemption_married: BTreeMap<i32, u64>,
}

impl TaxTable {
    /// The published figures. Married exemption is 2x the individual one
    /// (portability).
    pub fn builtin() -> Self {
        let mut table = TaxTable::default();
        table.insert_years(
            FigureKind::AnnualGiftExclusion,
            &[(2024, 18_000), (2025, 18_000), (2026, 19_000), (2027, 19_000)],
        );
        table.insert_years(
            FigureKind::EstateExemption,
            &[
                (2024, 13_610_000),
                (2025, 13_990_000),
                (2026, 13_990_000),
                (2027, 13_990_000),
            ],
        );
        table.insert_years(
            FigureKind::GstExemption,
            &[
                (2024, 13_610_000),
                (2025, 13_990_000),
                (2026, 13_990_000),
                (2027, 13_990_000),
            ],
        );
        table.insert_years(
            FigureKind::EstateExemptionMarried,
            &[
                (2024, 27_220_000),
                (2025, 27_980_000),
                (2026, 27_980_000),
                (2027, 27_980_000),
            ],
        );
        table
    }

    /// Load the table from a JSON file in the `TaxTableFile` shape.
    pub fn load(path: &Path) -> Result<Self, FiguresError> {
        let content = std::fs::read_to_string(path).map_err(|source| FiguresError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse the JSON figures document.
    pub fn parse(content: &str) -> Result<Self, FiguresError> {
        let file: TaxTableFile = serde_json::from_str(content)?;
        let mut table = TaxTable::default();
        table.entries.insert(
            FigureKind::AnnualGiftExclusion,
            file.annual_gift_exclusion,
        );
        table
            .entries
            .insert(FigureKind::EstateExemption, file.estate_exemption);
        table
            .entries
            .insert(FigureKind::GstExemption, file.gst_exemption);
        table.entries.insert(
            FigureKind::EstateExemptionMarried,
            file.estate_exemption_married,
        );
        Ok(table)
    }

    fn insert_years(&mut self, kind: FigureKind, years: &[(i32, u64)]) {
        self.entries
            .insert(kind, years.iter().copied().collect());
    }

    /// Resolve the figure that applies as of `year`.
    ///
    /// A direct entry wins; otherwise the most recent entry-year at or before
    /// `year`; if `year` predates every entry, the earliest entry available.
    /// A kind with no entries resolves to `None`.
    pub fn resolve(&self, kind: FigureKind, year: i32) -> Option<ResolvedFigure> {
        let years = self.entries.get(&kind)?;
        if let Some((&entry_year, &amount)) = years.range(..=year).next_back() {
            return Some(ResolvedFigure {
                year: entry_year,
                amount,
            });
        }
        years.iter().next().map(|(&entry_year, &amount)| ResolvedFigure {
            year: entry_year,
            amount,
        })
    }

    /// Resolve by placeholder-style name. Unknown names warn and yield `None`;
    /// callers guard before formatting.
    pub fn resolve_named(&self, name: &str, year: i32) -> Option<ResolvedFigure> {
        match FigureKind::from_name(name) {
            Some(kind) => self.resolve(kind, year),
            None => {
                tracing::warn!(figure = name, "unknown tax figure name");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|years| years.is_empty())
    }
}
