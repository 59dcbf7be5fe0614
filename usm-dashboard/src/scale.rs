//! Sequential color scale for the choropleth.

use usm_data::stats::value_span;

/// Six-class YlOrRd palette, lightest first.
pub const YLORRD: [&str; 6] = [
    "#ffffb2", "#fed976", "#feb24c", "#fd8d3c", "#f03b20", "#bd0026",
];

/// Equal-width binning of a value domain onto the YlOrRd palette. The
/// domain's minimum falls in the first class and its maximum in the last;
/// a degenerate domain maps everything to the first class.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Scale spanning the given values.
    pub fn from_values(values: &[f64]) -> Self {
        match value_span(values) {
            Some((min, max)) => Self { min, max },
            None => Self { min: 0.0, max: 0.0 },
        }
    }

    fn bin_width(&self) -> f64 {
        (self.max - self.min) / YLORRD.len() as f64
    }

    /// Color class for a value inside the domain.
    pub fn color_for(&self, value: f64) -> &'static str {
        let width = self.bin_width();
        if width <= 0.0 {
            return YLORRD[0];
        }
        let bin = ((value - self.min) / width) as usize;
        YLORRD[bin.min(YLORRD.len() - 1)]
    }

    /// The seven bin edges from domain minimum to maximum, for the legend.
    pub fn bin_edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..=YLORRD.len())
            .map(|i| self.min + width * i as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_edges_map_to_first_and_last_class() {
        let scale = ColorScale::from_values(&[0.0, 60.0]);
        assert_eq!(scale.color_for(0.0), YLORRD[0]);
        assert_eq!(scale.color_for(60.0), YLORRD[5]);
    }

    #[test]
    fn test_bins_are_equal_width() {
        let scale = ColorScale::from_values(&[0.0, 60.0]);
        assert_eq!(scale.color_for(5.0), YLORRD[0]);
        assert_eq!(scale.color_for(15.0), YLORRD[1]);
        assert_eq!(scale.color_for(25.0), YLORRD[2]);
        assert_eq!(scale.color_for(35.0), YLORRD[3]);
        assert_eq!(scale.color_for(45.0), YLORRD[4]);
        assert_eq!(scale.color_for(55.0), YLORRD[5]);
    }

    #[test]
    fn test_bin_boundary_falls_into_the_upper_bin() {
        let scale = ColorScale::from_values(&[0.0, 60.0]);
        assert_eq!(scale.color_for(10.0), YLORRD[1]);
        assert_eq!(scale.color_for(50.0), YLORRD[5]);
    }

    #[test]
    fn test_degenerate_domain_uses_first_class() {
        let single = ColorScale::from_values(&[12.5, 12.5, 12.5]);
        assert_eq!(single.color_for(12.5), YLORRD[0]);
        let empty = ColorScale::from_values(&[]);
        assert_eq!(empty.color_for(0.0), YLORRD[0]);
    }

    #[test]
    fn test_bin_edges_span_the_domain() {
        let scale = ColorScale::from_values(&[3.0, 9.0]);
        let edges = scale.bin_edges();
        assert_eq!(edges.len(), 7);
        assert!((edges[0] - 3.0).abs() < 1e-9);
        assert!((edges[3] - 6.0).abs() < 1e-9);
        assert!((edges[6] - 9.0).abs() < 1e-9);
    }
}
