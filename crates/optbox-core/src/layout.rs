//! Adaptive column layout for Grid-choice containers.
//!
//! With `max_columns` set, the minimum column width is the larger of the
//! configured minimum and an even split of the available width across
//! `max_columns` columns (net of gutters). Narrow viewports fall back to fewer,
//! wider columns; wide ones never exceed `max_columns`. Without it the
//! minimum is fixed and the column count is fully automatic.

use crate::config::GridChoiceConfig;

/// Tolerance for float division landing a hair below an exact column count.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub min_column_width: u32,
    pub max_columns: Option<u32>,
    /// Fixed gutter between columns, in pixels.
    pub gap: u32,
}

impl GridLayout {
    pub fn new(min_column_width: u32, max_columns: Option<u32>, gap: u32) -> Self {
        Self {
            min_column_width,
            max_columns: max_columns.filter(|&n| n > 0),
            gap,
        }
    }

    pub fn for_config(config: &GridChoiceConfig, gap: u32) -> Self {
        Self::new(config.min_column_width, config.max_columns, gap)
    }

    /// Minimum column width for a container `available` pixels wide.
    pub fn effective_min_width(&self, available: f64) -> f64 {
        let min = f64::from(self.min_column_width);
        match self.max_columns {
            Some(n) => {
                let n = f64::from(n);
                let even = (available - (n - 1.0) * f64::from(self.gap)) / n;
                min.max(even)
            }
            None => min,
        }
    }

    /// Number of columns an auto-fill grid places in `available` pixels.
    ///
    /// Always at least one; an over-wide minimum overflows rather than
    /// producing zero columns.
    pub fn column_count(&self, available: f64) -> u32 {
        let width = self.effective_min_width(available);
        let gap = f64::from(self.gap);
        let fits = ((available + gap) / (width + gap) + EPSILON).floor();
        let count = if fits.is_finite() && fits >= 1.0 {
            fits as u32
        } else {
            1
        };
        match self.max_columns {
            Some(n) => count.min(n),
            None => count,
        }
    }

    /// CSS `grid-template-columns` value expressing the same rule.
    pub fn template_columns(&self) -> String {
        match self.max_columns {
            Some(n) => format!(
                "repeat(auto-fill, minmax(max({}px, calc((100% - {}px) / {})), 1fr))",
                self.min_column_width,
                u64::from(n - 1) * u64::from(self.gap),
                n
            ),
            None => format!("repeat(auto-fill, minmax({}px, 1fr))", self.min_column_width),
        }
    }

    /// Inline style for the grid element.
    pub fn style(&self) -> String {
        format!(
            "display:grid;grid-template-columns:{};gap:{}px",
            self.template_columns(),
            self.gap
        )
    }
}
