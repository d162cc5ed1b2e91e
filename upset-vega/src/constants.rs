// Shared names and fixed styling for the UpSet views

/// Name of the long-form dataset every view reads
pub const SOURCE_DATASET: &str = "source";

// Selection parameter names
pub const LEGEND_PARAM: &str = "legend";
pub const HOVER_PARAM: &str = "hover";
pub const OPACITY_PARAM: &str = "opacity";

// Unit view names the selections attach to
pub const INTERSECTION_BARS_VIEW: &str = "intersection_size_bars";
pub const MATRIX_DOTS_VIEW: &str = "matrix_member_dots";
pub const SET_BARS_VIEW: &str = "set_size_bars";

// Colors
pub const MAIN_COLOR: &str = "#3A3A3A";
pub const STRIPE_COLOR: &str = "#F7F7F7";
pub const GLYPH_BACKGROUND_COLOR: &str = "#E6E6E6";

// Opacity of matrix glyphs outside the clicked intersection
pub const DIMMED_OPACITY: f64 = 0.6;

// Upper bound of the intersection bar thickness
pub const MAX_VERTICAL_BAR_SIZE: f64 = 30.0;

// Labels up to this many characters get a colored background circle
pub const SHORT_LABEL_MAX_CHARS: usize = 2;

// Offsets of labels relative to their anchor
pub const LABEL_DX: f64 = -10.0;
pub const BAR_LABEL_DY: f64 = -10.0;
pub const LABEL_BG_X: f64 = -20.0;

// Gap between the top bar chart and the matrix row
pub const PANEL_SPACING: f64 = 20.0;

// Gap between the matrix and the set size bars, where the set labels sit
pub const LABEL_GUTTER: f64 = 40.0;

pub const DEFAULT_HEIGHT_RATIO: f64 = 0.5;
