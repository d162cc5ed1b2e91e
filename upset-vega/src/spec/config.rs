use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendOrient {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Single title line or several stacked lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleText {
    Line(String),
    Lines(Vec<String>),
}

impl TitleText {
    pub fn is_blank(&self) -> bool {
        match self {
            TitleText::Line(line) => line.is_empty(),
            TitleText::Lines(lines) => lines.iter().all(|line| line.is_empty()),
        }
    }
}

impl From<&str> for TitleText {
    fn from(line: &str) -> Self {
        TitleText::Line(line.to_string())
    }
}

impl From<String> for TitleText {
    fn from(line: String) -> Self {
        TitleText::Line(line)
    }
}

impl From<Vec<String>> for TitleText {
    fn from(lines: Vec<String>) -> Self {
        TitleText::Lines(lines)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleParams {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TitleText>,
    pub anchor: TitleAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    pub font_size: f64,
    pub font_weight: u32,
    pub anchor: TitleAnchor,
    pub subtitle_color: String,
    pub subtitle_font_size: f64,
    pub subtitle_padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_font_size: f64,
    pub label_font_weight: u32,
    pub title_font_size: f64,
    pub title_font_weight: u32,
    pub title_padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub title_font_size: f64,
    pub title_font_weight: u32,
    pub label_font_size: f64,
    pub label_font_weight: u32,
    pub padding: f64,
    pub orient: LegendOrient,
    pub symbol_type: String,
    pub symbol_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcatConfig {
    pub spacing: f64,
}

/// Global style applied to every view of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub view: ViewConfig,
    pub title: TitleConfig,
    pub axis: AxisConfig,
    pub legend: LegendConfig,
    pub concat: ConcatConfig,
}
