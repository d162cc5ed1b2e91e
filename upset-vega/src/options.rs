use serde::{Deserialize, Serialize};
use upset_data::{SortBy, SortOrder};

use crate::constants::DEFAULT_HEIGHT_RATIO;
use crate::error::UpSetChartError;
use crate::spec::config::TitleText;

/// Layout, styling and ordering options of an UpSet chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpSetOptions {
    /// Display labels aligned with the set list, set names when unset
    pub abbreviations: Option<Vec<String>>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub width: f64,
    pub height: f64,
    /// Share of the height given to the intersection bar chart, in [0, 1]
    pub height_ratio: f64,
    pub horizontal_bar_chart_width: f64,
    /// One color per set, in set-list order
    pub color_range: Vec<String>,
    pub highlight_color: String,
    pub glyph_size: f64,
    pub set_label_bg_size: f64,
    pub line_connection_size: f64,
    pub horizontal_bar_size: f64,
    pub vertical_bar_label_size: f64,
    pub vertical_bar_padding: f64,
    pub title: String,
    pub subtitle: Option<TitleText>,
}

impl Default for UpSetOptions {
    fn default() -> Self {
        Self {
            abbreviations: None,
            sort_by: SortBy::Frequency,
            sort_order: SortOrder::Ascending,
            width: 1200.0,
            height: 700.0,
            height_ratio: 0.6,
            horizontal_bar_chart_width: 300.0,
            color_range: ["#55A8DB", "#3070B5", "#30363F", "#F1AD60", "#DF6234", "#BDC6CA"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            highlight_color: "#EA4667".to_string(),
            glyph_size: 200.0,
            set_label_bg_size: 1000.0,
            line_connection_size: 2.0,
            horizontal_bar_size: 20.0,
            vertical_bar_label_size: 16.0,
            vertical_bar_padding: 20.0,
            title: String::new(),
            subtitle: None,
        }
    }
}

impl UpSetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abbreviations<S: Into<String>>(
        mut self,
        abbreviations: impl IntoIterator<Item = S>,
    ) -> Self {
        self.abbreviations = Some(abbreviations.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn height_ratio(mut self, height_ratio: f64) -> Self {
        self.height_ratio = height_ratio;
        self
    }

    pub fn horizontal_bar_chart_width(mut self, width: f64) -> Self {
        self.horizontal_bar_chart_width = width;
        self
    }

    pub fn color_range<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.color_range = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }

    pub fn glyph_size(mut self, size: f64) -> Self {
        self.glyph_size = size;
        self
    }

    pub fn set_label_bg_size(mut self, size: f64) -> Self {
        self.set_label_bg_size = size;
        self
    }

    pub fn line_connection_size(mut self, size: f64) -> Self {
        self.line_connection_size = size;
        self
    }

    pub fn horizontal_bar_size(mut self, size: f64) -> Self {
        self.horizontal_bar_size = size;
        self
    }

    pub fn vertical_bar_label_size(mut self, size: f64) -> Self {
        self.vertical_bar_label_size = size;
        self
    }

    pub fn vertical_bar_padding(mut self, padding: f64) -> Self {
        self.vertical_bar_padding = padding;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<TitleText>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Check the options against the set list and apply soft corrections.
    ///
    /// An out-of-range height ratio is reset with a warning and surplus colors
    /// are dropped. Invalid colors, too few colors and non-positive sizes are
    /// errors.
    pub fn validate(mut self, num_sets: usize) -> Result<Self, UpSetChartError> {
        if !(0.0..=1.0).contains(&self.height_ratio) {
            tracing::warn!(
                "height_ratio {} is outside [0, 1], set to {}",
                self.height_ratio,
                DEFAULT_HEIGHT_RATIO
            );
            self.height_ratio = DEFAULT_HEIGHT_RATIO;
        }

        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("horizontal_bar_chart_width", self.horizontal_bar_chart_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(UpSetChartError::InvalidArgument(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        for color in self.color_range.iter().chain([&self.highlight_color]) {
            csscolorparser::parse(color).map_err(|source| UpSetChartError::InvalidColor {
                color: color.clone(),
                source,
            })?;
        }

        if self.color_range.len() < num_sets {
            return Err(UpSetChartError::InvalidArgument(format!(
                "color_range has {} colors but {} sets were given",
                self.color_range.len(),
                num_sets
            )));
        }
        self.color_range.truncate(num_sets);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_ratio_outside_unit_interval_is_reset() {
        for ratio in [1.5, -0.1, f64::NAN] {
            let options = UpSetOptions::new().height_ratio(ratio).validate(3).unwrap();
            assert_eq!(options.height_ratio, 0.5);
        }
        let options = UpSetOptions::new().height_ratio(1.0).validate(3).unwrap();
        assert_eq!(options.height_ratio, 1.0);
    }

    #[test]
    fn test_surplus_colors_are_dropped() {
        let options = UpSetOptions::new().validate(2).unwrap();
        assert_eq!(options.color_range, vec!["#55A8DB", "#3070B5"]);
    }

    #[test]
    fn test_too_few_colors_is_an_error() {
        let err = UpSetOptions::new()
            .color_range(["red", "blue"])
            .validate(3)
            .unwrap_err();
        assert!(matches!(err, UpSetChartError::InvalidArgument(msg) if msg.contains("2 colors")));
    }

    #[test]
    fn test_unparseable_color_is_an_error() {
        let err = UpSetOptions::new()
            .highlight_color("not-a-color")
            .validate(1)
            .unwrap_err();
        assert!(matches!(
            err,
            UpSetChartError::InvalidColor { color, .. } if color == "not-a-color"
        ));
    }

    #[test]
    fn test_non_positive_width_is_an_error() {
        assert!(UpSetOptions::new().size(0.0, 100.0).validate(1).is_err());
        assert!(UpSetOptions::new()
            .horizontal_bar_chart_width(f64::INFINITY)
            .validate(1)
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_options() {
        let options: UpSetOptions = serde_json::from_str(
            r#"{"sort_by": "degree", "width": 800, "subtitle": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(options.sort_by, SortBy::Degree);
        assert_eq!(options.width, 800.0);
        assert_eq!(options.height, 700.0);
        assert_eq!(
            options.subtitle,
            Some(TitleText::Lines(vec!["a".to_string(), "b".to_string()]))
        );

        let err = serde_json::from_str::<UpSetOptions>(r#"{"sort_order": "up"}"#).unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }
}
