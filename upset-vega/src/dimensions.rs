use crate::constants::MAX_VERTICAL_BAR_SIZE;
use crate::options::UpSetOptions;

/// Pixel sizes of the three panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Height of the intersection size bar chart
    pub vertical_bar_chart_height: f64,
    pub matrix_height: f64,
    /// Width shared by the intersection bar chart and the matrix
    pub matrix_width: f64,
    /// Thickness of each intersection bar
    pub vertical_bar_size: f64,
}

impl Dimensions {
    pub fn compute(
        width: f64,
        height: f64,
        height_ratio: f64,
        horizontal_bar_chart_width: f64,
        num_intersections: usize,
        vertical_bar_padding: f64,
    ) -> Self {
        let vertical_bar_chart_height = height * height_ratio;
        // With no intersections the division yields infinity and the cap applies
        let vertical_bar_size = MAX_VERTICAL_BAR_SIZE
            .min(width / num_intersections as f64 - vertical_bar_padding);

        Self {
            vertical_bar_chart_height,
            matrix_height: height - vertical_bar_chart_height,
            matrix_width: width - horizontal_bar_chart_width,
            vertical_bar_size,
        }
    }

    pub fn from_options(options: &UpSetOptions, num_intersections: usize) -> Self {
        Self::compute(
            options.width,
            options.height,
            options.height_ratio,
            options.horizontal_bar_chart_width,
            num_intersections,
            options.vertical_bar_padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let dims = Dimensions::compute(1200.0, 700.0, 0.6, 300.0, 4, 20.0);
        assert!((dims.vertical_bar_chart_height - 420.0).abs() < 1e-9);
        assert!((dims.matrix_height - 280.0).abs() < 1e-9);
        assert_eq!(dims.matrix_width, 900.0);
        assert_eq!(dims.vertical_bar_size, 30.0);
    }

    #[test]
    fn test_bar_size_shrinks_with_many_intersections() {
        let dims = Dimensions::compute(1000.0, 500.0, 0.5, 200.0, 40, 20.0);
        assert_eq!(dims.vertical_bar_size, 5.0);
    }

    #[test]
    fn test_no_intersections_uses_maximum_bar_size() {
        let dims = Dimensions::compute(600.0, 400.0, 0.5, 100.0, 0, 20.0);
        assert_eq!(dims.vertical_bar_size, 30.0);
    }

    #[test]
    fn test_out_of_range_ratio_matches_default_ratio_after_validation() {
        let clamped = UpSetOptions::new().height_ratio(1.5).validate(3).unwrap();
        let half = UpSetOptions::new().height_ratio(0.5).validate(3).unwrap();
        assert_eq!(
            Dimensions::from_options(&clamped, 4),
            Dimensions::from_options(&half, 4)
        );
    }
}
