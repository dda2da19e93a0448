//! Packing run settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optimization strategy.
///
/// Selects the scoring function used when ranking candidate free rectangles
/// and, for [`Strategy::Priority`], the order in which piece instances are
/// attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Minimize leftover short side (best short side fit).
    #[default]
    Waste,
    /// Minimize leftover area, favoring tight fits that need fewer
    /// follow-up cuts.
    Cuts,
    /// Best short side fit, with higher-priority pieces attempted first.
    Priority,
}

/// Configuration for one packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Blade width consumed between adjacent cuts, in millimeters.
    pub kerf_mm: f64,

    /// Margin removed from all four board edges before packing, in
    /// millimeters.
    pub edge_trim_mm: f64,

    /// Minimum width for a leftover rectangle to count as usable scrap.
    pub min_scrap_width_mm: f64,

    /// Minimum length for a leftover rectangle to count as usable scrap.
    pub min_scrap_length_mm: f64,

    /// When true, pieces with a grain direction may not be rotated.
    pub respect_grain: bool,

    /// Scoring strategy.
    pub strategy: Strategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kerf_mm: 0.0,
            edge_trim_mm: 0.0,
            min_scrap_width_mm: 0.0,
            min_scrap_length_mm: 0.0,
            respect_grain: true,
            strategy: Strategy::default(),
        }
    }
}

impl Settings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the blade kerf in millimeters.
    pub fn with_kerf(mut self, kerf_mm: f64) -> Self {
        self.kerf_mm = kerf_mm;
        self
    }

    /// Sets the edge trim margin in millimeters.
    pub fn with_edge_trim(mut self, edge_trim_mm: f64) -> Self {
        self.edge_trim_mm = edge_trim_mm;
        self
    }

    /// Sets the minimum usable-scrap dimensions in millimeters.
    pub fn with_min_scrap(mut self, width_mm: f64, length_mm: f64) -> Self {
        self.min_scrap_width_mm = width_mm;
        self.min_scrap_length_mm = length_mm;
        self
    }

    /// Sets whether grain directions forbid rotation.
    pub fn with_respect_grain(mut self, respect: bool) -> Self {
        self.respect_grain = respect;
        self
    }

    /// Sets the scoring strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.kerf_mm, 0.0);
        assert_eq!(settings.edge_trim_mm, 0.0);
        assert!(settings.respect_grain);
        assert_eq!(settings.strategy, Strategy::Waste);
    }

    #[test]
    fn test_builder_chain() {
        let settings = Settings::new()
            .with_kerf(3.0)
            .with_edge_trim(5.0)
            .with_min_scrap(50.0, 100.0)
            .with_respect_grain(false)
            .with_strategy(Strategy::Cuts);

        assert_eq!(settings.kerf_mm, 3.0);
        assert_eq!(settings.edge_trim_mm, 5.0);
        assert_eq!(settings.min_scrap_width_mm, 50.0);
        assert_eq!(settings.min_scrap_length_mm, 100.0);
        assert!(!settings.respect_grain);
        assert_eq!(settings.strategy, Strategy::Cuts);
    }
}
