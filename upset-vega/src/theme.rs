use crate::spec::config::{
    AxisConfig, ConcatConfig, Config, LegendConfig, LegendOrient, TitleAnchor, TitleConfig,
    ViewConfig,
};

pub const BACKGROUND: &str = "white";

/// Fixed global style of UpSet charts
pub fn upset_config() -> Config {
    Config {
        view: ViewConfig { stroke_width: 0.0 },
        title: TitleConfig {
            font_size: 20.0,
            font_weight: 500,
            anchor: TitleAnchor::Start,
            subtitle_color: "#3A3A3A".to_string(),
            subtitle_font_size: 14.0,
            subtitle_padding: 10.0,
        },
        axis: AxisConfig {
            label_font_size: 14.0,
            label_font_weight: 300,
            title_font_size: 16.0,
            title_font_weight: 400,
            title_padding: 10.0,
        },
        legend: LegendConfig {
            title_font_size: 16.0,
            title_font_weight: 400,
            label_font_size: 14.0,
            label_font_weight: 300,
            padding: 20.0,
            orient: LegendOrient::TopLeft,
            symbol_type: "circle".to_string(),
            symbol_size: 30.0,
        },
        concat: ConcatConfig { spacing: 0.0 },
    }
}
